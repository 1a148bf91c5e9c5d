//! Conversation tests for inline buttons: players pager, nickname carousel, profile linking
//! and main menu navigation.

mod mock_bot;

use informer_bot::format::{plain, welcome};
use informer_bot::handlers::handle_and_report;
use informer_bot::{DialogState, Locale};
use mock_bot::{callback, mock_account, mock_json, mock_match, user, Sent, TestApp};
use mockito::Server;
use storage::SqlitePoolManager;
use tempfile::TempDir;

fn search_results(count: i64) -> String {
    let entries = (1..=count)
        .map(|id| format!(r#"{{"account_id": {}, "personaname": "dendi{}", "similarity": 1.0}}"#, id, id))
        .collect::<Vec<_>>();
    format!("[{}]", entries.join(","))
}

/// **Test: Players pager edits the overview message in place and pages through players.**
///
/// **Setup:** English user; match 100 with two players (second one anonymous).
/// **Action:** Look up match 100, press players, press page:1, press page:5.
/// **Expected:** Edits of message 7 with the right pager buttons; anonymous player gets the
/// hidden hint; page 5 answers "player not found".
#[tokio::test]
async fn test_players_pagination() {
    let mut server = Server::new_async().await;
    let _mocks = mock_match(&mut server).await;
    let app = TestApp::new(&server.url(), vec![]).await;
    app.english_user(1).await;
    let t = Locale::En.texts();

    app.press(1, "1", "match_info").await;
    app.text(1, "100").await;

    app.press(1, "7", "get_info_about_players").await;
    match app.bot.last() {
        Sent::Edit {
            message_id, text, ..
        } => {
            assert_eq!(message_id, "7");
            assert!(text.contains("`Alpha`"));
            assert!(text.contains("`Anti-Mage`"));
        }
        other => panic!("expected edit, got {:?}", other),
    }
    assert_eq!(app.bot.last().callback_data(), vec!["noop", "page:1", "back"]);
    assert_eq!(app.ctx.sessions.get(1).await.players.len(), 2);

    app.press(1, "7", "page:1").await;
    let second = app.bot.last();
    assert!(second.text().contains("`Axe`"));
    assert!(second.text().contains(&plain(t.probably_hidden)));
    assert_eq!(second.callback_data(), vec!["page:0", "noop", "back"]);

    app.press(1, "7", "page:5").await;
    assert_eq!(app.bot.last().text(), plain(t.player_not_found));
}

/// **Test: Paging without a looked-up match reports outdated data instead of failing.**
#[tokio::test]
async fn test_players_without_match() {
    let server = Server::new_async().await;
    let app = TestApp::new(&server.url(), vec![]).await;
    app.english_user(1).await;
    let expired = plain(Locale::En.texts().session_expired);

    app.press(1, "7", "get_info_about_players").await;
    assert_eq!(app.bot.last().text(), expired);

    app.press(1, "7", "page:0").await;
    assert_eq!(app.bot.last().text(), expired);
}

/// **Test: Nickname search opens a five-per-page carousel that pages by editing the keyboard.**
///
/// **Setup:** Search mock returning seven accounts.
/// **Action:** Press account_by_nick, send "dendi", press carousel:1, press carousel:3.
/// **Expected:** First page lists accounts 1-5 with `>>`; second page edits message 9 with
/// accounts 6-7 and `<<`; page 3 answers "nothing found".
#[tokio::test]
async fn test_nickname_carousel() {
    let mut server = Server::new_async().await;
    let _search = mock_json(&mut server, "/search", &search_results(7)).await;
    let app = TestApp::new(&server.url(), vec![]).await;
    app.english_user(1).await;
    let t = Locale::En.texts();

    app.press(1, "1", "account_by_nick").await;
    assert_eq!(
        app.ctx.sessions.get(1).await.state,
        DialogState::AwaitingNickname
    );
    app.text(1, "dendi").await;

    let first = app.bot.last();
    assert_eq!(first.text(), plain(t.found_accounts));
    assert_eq!(
        first.callback_data(),
        vec![
            "account_id:1",
            "account_id:2",
            "account_id:3",
            "account_id:4",
            "account_id:5",
            "noop",
            "carousel:1",
            "back"
        ]
    );

    app.press(1, "9", "carousel:1").await;
    match app.bot.last() {
        Sent::KeyboardEdit {
            message_id,
            keyboard,
            ..
        } => {
            assert_eq!(message_id, "9");
            assert_eq!(
                keyboard.callback_data(),
                vec!["account_id:6", "account_id:7", "carousel:0", "noop", "back"]
            );
            assert_eq!(keyboard.rows[0][0].text, "dendi6 — 6");
        }
        other => panic!("expected keyboard edit, got {:?}", other),
    }

    app.press(1, "9", "carousel:3").await;
    assert_eq!(app.bot.last().text(), plain(t.no_accounts_found));
}

/// **Test: An empty search result says so and offers the way back.**
#[tokio::test]
async fn test_nickname_search_without_results() {
    let mut server = Server::new_async().await;
    let _search = mock_json(&mut server, "/search", "[]").await;
    let app = TestApp::new(&server.url(), vec![]).await;
    app.english_user(1).await;

    app.press(1, "1", "account_by_nick").await;
    app.text(1, "nobody").await;

    let last = app.bot.last();
    assert_eq!(last.text(), plain(Locale::En.texts().no_accounts_found));
    assert_eq!(last.callback_data(), vec!["back"]);
}

/// **Test: Linking, checking and unlinking a Dota account from the profile.**
///
/// **Setup:** English user 1; OpenDota mocks for account 1.
/// **Action:** Open profile, link account 1, reopen profile, check account, try to link
/// account 2, unlink twice, check account.
/// **Expected:** Profile keyboard follows the link state; a second link is refused; the
/// second unlink finds nothing.
#[tokio::test]
async fn test_link_and_unlink_account() {
    let mut server = Server::new_async().await;
    let _mocks = mock_account(&mut server, 1).await;
    let app = TestApp::new(&server.url(), vec![]).await;
    app.english_user(1).await;
    let t = Locale::En.texts();

    app.press(1, "1", "user_profile").await;
    assert_eq!(app.bot.last().callback_data(), vec!["link_account", "back"]);

    app.press(1, "1", "link_account").await;
    assert_eq!(app.bot.last().text(), plain(t.send_link_account_id));
    app.bot.clear();
    app.text(1, "1").await;
    assert_eq!(app.bot.texts()[0], plain(t.account_linked));
    assert!(matches!(app.bot.last(), Sent::Photo { .. }));
    assert_eq!(app.ctx.profiles.linked_account(1).await.unwrap(), Some(1));
    assert_eq!(app.ctx.sessions.get(1).await.state, DialogState::Idle);

    app.press(1, "1", "user_profile").await;
    let profile = app.bot.last();
    assert!(profile.text().contains("`1`"));
    assert_eq!(
        profile.callback_data(),
        vec!["check_account", "unlink_account", "back"]
    );

    app.press(1, "1", "check_account").await;
    assert!(matches!(app.bot.last(), Sent::Photo { .. }));

    app.press(1, "1", "link_account").await;
    app.text(1, "2").await;
    assert_eq!(app.bot.last().text(), plain(t.account_already_linked));
    assert_eq!(app.ctx.profiles.linked_account(1).await.unwrap(), Some(1));

    app.press(1, "1", "unlink_account").await;
    assert_eq!(app.bot.last().text(), plain(t.account_unlinked));
    app.press(1, "1", "unlink_account").await;
    assert_eq!(app.bot.last().text(), plain(t.nothing_to_unlink));

    app.press(1, "1", "check_account").await;
    assert_eq!(app.bot.last().text(), plain(t.not_linked));
}

/// **Test: A storage failure while opening the profile is reported to the user.**
///
/// **Setup:** English user 1 on a file database; the profiles table is dropped behind the bot's back.
/// **Action:** Press user_profile through the reporting runner.
/// **Expected:** The chain returns Err and the chat gets the localized unexpected-error text.
#[tokio::test]
async fn test_storage_failure_is_reported() {
    let server = Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", temp_dir.path().join("bot.db").display());
    let app = TestApp::with_database(&server.url(), vec![], &url).await;
    app.english_user(1).await;

    let other = SqlitePoolManager::new(&url).await.unwrap();
    sqlx::query("DROP TABLE profiles")
        .execute(other.pool())
        .await
        .unwrap();

    let result = handle_and_report(&app.chain, &app.ctx, &callback(1, "1", "user_profile")).await;

    assert!(result.is_err());
    let reply = app.bot.last();
    assert_eq!(reply.chat_id(), 1);
    assert_eq!(reply.text(), plain(Locale::En.texts().unexpected_error));
}

/// **Test: Menu pages switch by editing the keyboard; without a message id a new menu is sent.**
#[tokio::test]
async fn test_start_page_navigation() {
    let server = Server::new_async().await;
    let app = TestApp::new(&server.url(), vec![]).await;
    app.english_user(1).await;

    app.press(1, "5", "start_page:2").await;
    match app.bot.last() {
        Sent::KeyboardEdit {
            message_id,
            keyboard,
            ..
        } => {
            assert_eq!(message_id, "5");
            assert_eq!(
                keyboard.callback_data(),
                vec!["user_profile", "change_language", "start_page:1"]
            );
            assert_eq!(keyboard.buttons().count(), 4);
        }
        other => panic!("expected keyboard edit, got {:?}", other),
    }

    app.press(1, "", "start_page:1").await;
    let menu = app.bot.last();
    assert_eq!(menu.text(), welcome(&user(1).display_name(), Locale::En));
    assert_eq!(menu.callback_data()[0], "account_info");
}

/// **Test: Back returns to the main menu and forgets the pending input.**
#[tokio::test]
async fn test_back_resets_session() {
    let server = Server::new_async().await;
    let app = TestApp::new(&server.url(), vec![]).await;
    app.english_user(1).await;

    app.press(1, "1", "account_info").await;
    assert_eq!(
        app.ctx.sessions.get(1).await.state,
        DialogState::AwaitingAccountId
    );

    app.press(1, "1", "back").await;
    assert_eq!(app.ctx.sessions.get(1).await.state, DialogState::Idle);
    assert_eq!(
        app.bot.last().text(),
        welcome(&user(1).display_name(), Locale::En)
    );
}

/// **Test: Language can be changed from the menu; counter and unknown buttons send nothing.**
#[tokio::test]
async fn test_change_language_and_silent_buttons() {
    let server = Server::new_async().await;
    let app = TestApp::new(&server.url(), vec![]).await;
    app.english_user(1).await;

    app.press(1, "1", "change_language").await;
    assert_eq!(app.bot.last().callback_data(), vec!["select_ru", "select_en"]);
    app.press(1, "1", "select_ru").await;
    assert_eq!(app.bot.last().text(), plain(Locale::Ru.texts().language_saved));
    assert_eq!(app.ctx.users.language(1).await.unwrap().as_deref(), Some("ru"));

    app.bot.clear();
    app.press(1, "1", "noop").await;
    app.press(1, "1", "no_such_button").await;
    assert!(app.bot.sent().is_empty());
}
