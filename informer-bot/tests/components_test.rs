//! Assembly tests: file-backed storage survives a restart, log setup creates its directory.

mod mock_bot;

use std::sync::Arc;

use informer_bot::{build_context, build_handler_chain, init_tracing, Locale};
use mock_bot::{test_config, MockBot};
use tempfile::TempDir;

/// **Test: Language and linked account survive rebuilding the context on the same file.**
///
/// **Setup:** Temp dir with `bot.db`.
/// **Action:** Build context, save language and link an account; build a second context.
/// **Expected:** The second context reads English and the linked account.
#[tokio::test]
async fn test_file_database_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = test_config("http://127.0.0.1:9", vec![]);
    config.database_url = format!("sqlite://{}", temp_dir.path().join("bot.db").display());

    let first = build_context(&config, Arc::new(MockBot::new())).await.unwrap();
    first.users.register_user(7, "Tester").await.unwrap();
    first.users.save_language(7, "en").await.unwrap();
    first.profiles.link_account(7, 105248644).await.unwrap();
    drop(first);

    let second = build_context(&config, Arc::new(MockBot::new())).await.unwrap();
    assert_eq!(second.stored_locale(7).await, Some(Locale::En));
    assert_eq!(second.profiles.linked_account(7).await.unwrap(), Some(105248644));
    assert_eq!(second.stored_locale(8).await, None);
    assert_eq!(second.locale(8).await, Locale::Ru);
}

/// **Test: The production chain has every handler in place.**
#[tokio::test]
async fn test_handler_chain_assembly() {
    let config = test_config("http://127.0.0.1:9", vec![1]);
    let ctx = build_context(&config, Arc::new(MockBot::new())).await.unwrap();

    let chain = build_handler_chain(&ctx, config.throttle);

    assert_eq!(chain.len(), 7);
    assert!(ctx.is_admin(1));
    assert!(!ctx.is_admin(2));
}

/// **Test: init_tracing creates missing log directories and the log file.**
#[test]
fn test_init_tracing_creates_log_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("logs").join("nested").join("bot.log");

    init_tracing(log_file.to_str().unwrap()).unwrap();
    tracing::info!("log line from test");

    assert!(log_file.exists());
}
