//! Config tests.

use crate::config::bot_config::{parse_admins, BotConfig, DEFAULT_LOG_FILE};
use crate::config::{DEFAULT_DATABASE_URL, DEFAULT_SOURCE_CODE_URL};
use serial_test::serial;
use std::env;
use std::time::Duration;

const VARS: &[&str] = &[
    "BOT_TOKEN",
    "DATABASE_URL",
    "LOG_FILE",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "OPENDOTA_API_URL",
    "OPENDOTA_API_KEY",
    "ADMINS",
    "SESSION_TTL_SECS",
    "THROTTLE_MILLIS",
    "BROADCAST_DELAY_MILLIS",
    "SOURCE_CODE_URL",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token, "test_token");
    assert!(config.telegram_api_url.is_none());
    assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    assert_eq!(config.log_file, DEFAULT_LOG_FILE);
    assert_eq!(config.opendota_api_url, "https://api.opendota.com/api");
    assert!(config.opendota_api_key.is_none());
    assert!(config.admins.is_empty());
    assert_eq!(config.session_ttl, Duration::from_secs(86_400));
    assert_eq!(config.throttle, Duration::from_millis(100));
    assert_eq!(config.broadcast_delay, Duration::from_millis(50));
    assert_eq!(config.source_code_url, DEFAULT_SOURCE_CODE_URL);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("TELOXIDE_API_URL", "http://localhost:8081");
    env::set_var("OPENDOTA_API_KEY", "secret");
    env::set_var("ADMINS", "111, 222,,333");
    env::set_var("THROTTLE_MILLIS", "0");
    env::set_var("SESSION_TTL_SECS", "not-a-number");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.telegram_api_url.as_deref(), Some("http://localhost:8081"));
    assert_eq!(config.opendota_api_key.as_deref(), Some("secret"));
    assert_eq!(config.admins, vec![111, 222, 333]);
    assert_eq!(config.throttle, Duration::ZERO);
    assert_eq!(config.session_ttl, Duration::from_secs(86_400));
    assert_eq!(config.settings().admins, vec![111, 222, 333]);

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();

    assert_eq!(config.bot_token, "override_token");
}

#[test]
#[serial]
fn test_load_config_without_token_fails() {
    clear_env();
    assert!(BotConfig::load(None).is_err());
}

#[test]
#[serial]
fn test_load_config_rejects_bad_admins() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("ADMINS", "123,abc");

    assert!(BotConfig::load(None).is_err());

    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_invalid_urls() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("OPENDOTA_API_URL", "opendota");
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}

#[test]
fn test_parse_admins() {
    assert_eq!(parse_admins("").unwrap(), Vec::<i64>::new());
    assert_eq!(parse_admins(" 42 ").unwrap(), vec![42]);
    assert!(parse_admins("1;2").is_err());
}
