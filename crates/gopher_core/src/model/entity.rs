//! Entity capabilities shared by domain records.
//!
//! An entity validates the requests that would create it and translates
//! itself into response projections. Both capabilities are generic over the
//! DTO type, so every supported pairing is fixed at compile time and an
//! unsupported one simply has no impl.

/// Validates a request of type `Req` against the entity's domain rules.
pub trait Validator<Req> {
    type Error;

    fn validate(request: &Req) -> Result<(), Self::Error>;
}

/// Translates an entity into a response projection of type `Resp`.
pub trait Translator<Resp> {
    fn translate(&self) -> Resp;
}
