use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use super::*;

#[test]
fn parses_offers_command() {
    let cli = Cli::try_parse_from(["hyoffers-cli", "--zip", "92708", "offers"])
        .expect("expected valid cli args");

    assert_eq!(cli.zip, "92708");
    assert!(cli.policy.is_none());
    assert!(matches!(cli.command, Commands::Offers));
}

#[test]
fn parses_by_type_command() {
    let cli = Cli::try_parse_from(["hyoffers-cli", "--zip", "92708", "by-type", "lease"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::ByType { ref offer_type } if offer_type == "lease"
    ));
}

#[test]
fn parses_payments_filters() {
    let cli = Cli::try_parse_from([
        "hyoffers-cli",
        "--zip",
        "92708",
        "payments",
        "--model",
        "Ioniq 5",
        "--max-price",
        "300",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Payments { model, max_price } => {
            assert_eq!(model.as_deref(), Some("Ioniq 5"));
            assert_eq!(max_price, Some(300.0));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn payments_filters_are_optional() {
    let cli = Cli::try_parse_from(["hyoffers-cli", "--zip", "92708", "payments"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Payments {
            model: None,
            max_price: None
        }
    ));
}

#[test]
fn parses_policy_override() {
    let cli = Cli::try_parse_from([
        "hyoffers-cli",
        "--zip",
        "92708",
        "--policy",
        "skip-record",
        "models",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.policy, Some(CoercionPolicy::SkipRecord));
    assert!(matches!(cli.command, Commands::Models));
}

#[test]
fn rejects_unknown_policy() {
    let result = Cli::try_parse_from([
        "hyoffers-cli",
        "--zip",
        "92708",
        "--policy",
        "lenient",
        "offers",
    ]);
    assert!(result.is_err());
}

#[test]
fn rejects_non_numeric_max_price() {
    let result = Cli::try_parse_from([
        "hyoffers-cli",
        "--zip",
        "92708",
        "payments",
        "--max-price",
        "cheap",
    ]);
    assert!(result.is_err());
}

#[test]
fn log_filter_falls_back_to_configured_level() {
    let filter = build_env_filter(None, "debug").expect("valid level");
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
}

#[test]
fn log_filter_prefers_rust_log() {
    let filter = build_env_filter(Some("trace"), "info").expect("valid directives");
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
}

#[test]
fn log_filter_ignores_unparseable_rust_log() {
    let filter = build_env_filter(Some("hyoffers=loud"), "error").expect("valid level");
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
}

#[test]
fn log_filter_rejects_bad_configured_level() {
    assert!(build_env_filter(None, "hyoffers=loud").is_err());
}
