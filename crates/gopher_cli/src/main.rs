//! Gopher burrow demo entry point.
//!
//! # Responsibility
//! - Drive the core boundary from the command line and print outcomes.
//! - Keep all domain decisions inside `gopher_core`.

use anyhow::Result;
use clap::Parser;
use gopher_core::{
    init_logging, CreateGopher, FindGopher, GopherApi, GopherBoundary, GopherId, GopherStore,
    LoggingConfig,
};
use log::info;
use std::path::PathBuf;

/// Create and look up gophers in an in-memory burrow.
#[derive(Parser, Debug)]
#[command(name = "gopher", version = gopher_core::core_version())]
struct Cli {
    /// Gophers to create, as NAME=AGE. Runs the scripted demo when omitted.
    #[arg(value_parser = parse_gopher)]
    gophers: Vec<CreateGopher>,

    /// Ids to look up after creating
    #[arg(long = "find", value_name = "ID")]
    find: Vec<GopherId>,

    /// Log level (trace|debug|info|warn|error); overrides GOPHER_LOG_LEVEL
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; overrides GOPHER_LOG_DIR
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = LoggingConfig::from_env();
    if let Some(level) = cli.log_level {
        config = config.with_level(level);
    }
    if let Some(dir) = cli.log_dir {
        config = config.with_log_dir(dir);
    }
    init_logging(&config)?;

    let api = GopherApi::new(GopherStore::new());

    if cli.gophers.is_empty() && cli.find.is_empty() {
        info!("event=demo_start module=cli mode=scripted");
        run_scripted(&api);
        return Ok(());
    }

    info!(
        "event=demo_start module=cli mode=args creates={} finds={}",
        cli.gophers.len(),
        cli.find.len()
    );
    for request in &cli.gophers {
        create(&api, request);
    }
    for id in cli.find {
        find(&api, id);
    }

    println!("Burrow holds {} gopher(s):", api.gophers.len());
    for gopher in api.gophers.find_all()? {
        println!("  {gopher:?}");
    }
    Ok(())
}

fn run_scripted(api: &GopherApi<GopherStore>) {
    if let Some(id) = create(api, &CreateGopher::new("Munch", 2)) {
        find(api, id);
    }
    create(api, &CreateGopher::new("", 3));
    println!("Burrow holds {} gopher(s).", api.gophers.len());
    find(api, 99);
}

fn create<B: GopherBoundary>(api: &GopherApi<B>, request: &CreateGopher) -> Option<GopherId> {
    match api.gophers.create(request) {
        Ok(created) => {
            println!("Created gopher at ID {}.", created.id);
            Some(created.id)
        }
        Err(err) => {
            println!("Couldn't create {:?}: {err}", request.name);
            None
        }
    }
}

fn find<B: GopherBoundary>(api: &GopherApi<B>, id: GopherId) {
    match api.gophers.find(&FindGopher::new(id)) {
        Ok(found) => println!("Found: {found:?}"),
        Err(err) => println!("Error: {err}"),
    }
}

fn parse_gopher(value: &str) -> Result<CreateGopher, String> {
    let (name, age) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=AGE, got `{value}`"))?;
    let age = age
        .trim()
        .parse::<i64>()
        .map_err(|err| format!("invalid age `{age}`: {err}"))?;
    Ok(CreateGopher::new(name, age))
}

#[cfg(test)]
mod tests {
    use super::{parse_gopher, Cli};
    use clap::Parser;
    use gopher_core::CreateGopher;

    #[test]
    fn parse_gopher_accepts_name_and_age() {
        assert_eq!(
            parse_gopher("Munch=2").expect("valid pair"),
            CreateGopher::new("Munch", 2)
        );
    }

    #[test]
    fn parse_gopher_keeps_negative_ages_for_domain_validation() {
        assert_eq!(
            parse_gopher("Munch=-1").expect("negative age parses"),
            CreateGopher::new("Munch", -1)
        );
        assert_eq!(
            parse_gopher("=3").expect("empty name parses"),
            CreateGopher::new("", 3)
        );
    }

    #[test]
    fn parse_gopher_rejects_malformed_pairs() {
        assert!(parse_gopher("Munch").is_err());
        assert!(parse_gopher("Munch=old").is_err());
    }

    #[test]
    fn cli_collects_gophers_and_lookups() {
        let cli = Cli::try_parse_from(["gopher", "Munch=2", "Nibble=5", "--find", "1"])
            .expect("arguments should parse");
        assert_eq!(cli.gophers.len(), 2);
        assert_eq!(cli.find, vec![1]);
        assert_eq!(cli.log_level, None);
    }
}
