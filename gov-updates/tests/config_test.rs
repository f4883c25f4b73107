use clap::Parser;
use gov_updates::config::{api_base, MAX_POLL_INTERVAL};
use gov_updates::{Config, CursorPolicy, UpdateError};

#[test]
fn test_config_defaults_and_validation() {
    let config = Config::try_parse_from([
        "gov-updates",
        "--token",
        "123:abc",
        "--congress-key",
        "key",
        "--chats=-1001234,42",
    ])
    .unwrap();

    assert_eq!(config.session, 115);
    assert_eq!(config.chats, vec![-1001234, 42]);
    assert_eq!(config.cursor_policy, CursorPolicy::Advance);
    assert_eq!(config.order_interval().as_secs(), 3600);
    assert_eq!(config.bill_interval().as_secs(), 1200);
    assert_eq!(config.channel_capacity, 100);
    assert!(config.validate().is_ok());

    let legacy = Config::try_parse_from([
        "gov-updates",
        "--token",
        "123:abc",
        "--congress-key",
        "",
        "--cursor-policy",
        "legacy",
    ])
    .unwrap();
    assert_eq!(legacy.cursor_policy, CursorPolicy::Legacy);
    assert!(matches!(legacy.validate(), Err(UpdateError::Config(_))));
}

#[test]
fn test_api_base_adds_trailing_slash() {
    let base = api_base("https://api.propublica.org/congress/v1").unwrap();
    assert_eq!(base.as_str(), "https://api.propublica.org/congress/v1/");
    assert_eq!(
        base.join("115/senate/bills/updated.json").unwrap().as_str(),
        "https://api.propublica.org/congress/v1/115/senate/bills/updated.json"
    );
}

#[test]
fn test_config_rejects_oversized_intervals() {
    let huge = (u64::MAX / 4).to_string();
    let week_secs = MAX_POLL_INTERVAL.as_secs().to_string();

    let config = Config::try_parse_from([
        "gov-updates",
        "--token",
        "123:abc",
        "--congress-key",
        "key",
        "--order-interval-secs",
        huge.as_str(),
    ])
    .unwrap();

    match config.validate() {
        Err(UpdateError::Config(reason)) => assert!(reason.contains("must not exceed")),
        other => panic!("expected a config error, got {:?}", other),
    }

    let week = Config::try_parse_from([
        "gov-updates",
        "--token",
        "123:abc",
        "--congress-key",
        "key",
        "--bill-interval-secs",
        week_secs.as_str(),
    ])
    .unwrap();
    assert!(week.validate().is_ok());
}
