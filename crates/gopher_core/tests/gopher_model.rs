use gopher_core::{
    CreateGopher, FindGopher, FindGopherResponse, Gopher, GopherValidationError, Translator,
    Validator,
};

#[test]
fn from_request_copies_fields_and_uses_given_id() {
    let gopher = Gopher::from_request(3, &CreateGopher::new("Munch", 2)).unwrap();

    assert_eq!(gopher.id, 3);
    assert_eq!(gopher.name, "Munch");
    assert_eq!(gopher.age, 2);
}

#[test]
fn validate_rejects_negative_age() {
    let err = Gopher::validate(&CreateGopher::new("Munch", -4)).unwrap_err();
    assert_eq!(err, GopherValidationError::NegativeAge { age: -4 });
    assert_eq!(err.to_string(), "age can't be negative");
}

#[test]
fn validate_rejects_empty_name() {
    let err = Gopher::validate(&CreateGopher::new("", 3)).unwrap_err();
    assert_eq!(err, GopherValidationError::EmptyName);
    assert_eq!(err.to_string(), "name must not be empty");
}

#[test]
fn whitespace_name_is_not_empty() {
    Gopher::validate(&CreateGopher::new(" ", 1)).unwrap();
}

#[test]
fn projection_mirrors_record_fields() {
    let gopher = Gopher::from_request(1, &CreateGopher::new("Munch", 2)).unwrap();
    let projection: FindGopherResponse = gopher.translate();
    assert_eq!(
        projection,
        FindGopherResponse {
            id: 1,
            name: "Munch".to_string(),
            age: 2,
        }
    );
}

#[test]
fn dto_serialization_uses_expected_wire_fields() {
    let create = serde_json::to_value(CreateGopher::new("Munch", 2)).unwrap();
    assert_eq!(create, serde_json::json!({ "name": "Munch", "age": 2 }));

    let find = serde_json::to_value(FindGopher::new(9)).unwrap();
    assert_eq!(find, serde_json::json!({ "id": 9 }));

    let decoded: FindGopherResponse =
        serde_json::from_value(serde_json::json!({ "id": 1, "name": "Munch", "age": 2 }))
            .unwrap();
    assert_eq!(decoded.name, "Munch");
}

#[test]
fn create_request_has_no_id_field() {
    let value = serde_json::json!({ "id": 5, "name": "Munch", "age": 2 });
    let decoded: CreateGopher = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, CreateGopher::new("Munch", 2));
}
