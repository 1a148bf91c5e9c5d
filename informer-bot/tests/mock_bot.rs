//! Recording [`Bot`] and a test app that wires the real handler chain to it.
//!
//! Storage is in-memory SQLite; OpenDota is whatever URL the test passes (a mockito server).

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use informer_bot::config::DEFAULT_SOURCE_CODE_URL;
use informer_bot::{
    build_context, build_handler_chain, Bot, BotConfig, BotContext, BotError, Chat, HandlerChain,
    Keyboard, Message, MessageKind, Result, User,
};
use mockito::{Matcher, ServerGuard};

/// One outgoing call made by the bot.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Message {
        chat_id: i64,
        text: String,
        keyboard: Option<Keyboard>,
    },
    Photo {
        chat_id: i64,
        photo_url: String,
        caption: String,
        keyboard: Option<Keyboard>,
    },
    Edit {
        chat_id: i64,
        message_id: String,
        text: String,
        keyboard: Option<Keyboard>,
    },
    KeyboardEdit {
        chat_id: i64,
        message_id: String,
        keyboard: Keyboard,
    },
}

impl Sent {
    pub fn chat_id(&self) -> i64 {
        match self {
            Sent::Message { chat_id, .. }
            | Sent::Photo { chat_id, .. }
            | Sent::Edit { chat_id, .. }
            | Sent::KeyboardEdit { chat_id, .. } => *chat_id,
        }
    }

    /// Message text, photo caption or edited text; empty for keyboard edits.
    pub fn text(&self) -> &str {
        match self {
            Sent::Message { text, .. } | Sent::Edit { text, .. } => text,
            Sent::Photo { caption, .. } => caption,
            Sent::KeyboardEdit { .. } => "",
        }
    }

    pub fn keyboard(&self) -> Option<&Keyboard> {
        match self {
            Sent::Message { keyboard, .. }
            | Sent::Photo { keyboard, .. }
            | Sent::Edit { keyboard, .. } => keyboard.as_ref(),
            Sent::KeyboardEdit { keyboard, .. } => Some(keyboard),
        }
    }

    /// Callback data of every button, top-left to bottom-right.
    pub fn callback_data(&self) -> Vec<String> {
        self.keyboard()
            .map(|k| k.callback_data().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// Records every call; message ids count up from 1.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    next_id: AtomicI32,
    unreachable: Mutex<HashSet<i64>>,
    fail_photos: AtomicBool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send to `chat_id` fails from now on.
    pub fn make_unreachable(&self, chat_id: i64) {
        self.unreachable.lock().unwrap().insert(chat_id);
    }

    pub fn fail_photos(&self) {
        self.fail_photos.store(true, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().iter().map(|s| s.text().to_string()).collect()
    }

    pub fn last(&self) -> Sent {
        self.sent().last().cloned().expect("bot sent nothing")
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }

    fn check(&self, chat: &Chat) -> Result<()> {
        if self.unreachable.lock().unwrap().contains(&chat.id) {
            return Err(BotError::Bot(format!("Forbidden: chat {} unreachable", chat.id)));
        }
        Ok(())
    }

    fn record(&self, sent: Sent) -> String {
        self.sent.lock().unwrap().push(sent);
        (self.next_id.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str, keyboard: Option<&Keyboard>) -> Result<String> {
        self.check(chat)?;
        Ok(self.record(Sent::Message {
            chat_id: chat.id,
            text: text.to_string(),
            keyboard: keyboard.cloned(),
        }))
    }

    async fn send_photo(
        &self,
        chat: &Chat,
        photo_url: &str,
        caption: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<String> {
        self.check(chat)?;
        if self.fail_photos.load(Ordering::SeqCst) {
            return Err(BotError::Bot("Bad Request: wrong file identifier".to_string()));
        }
        Ok(self.record(Sent::Photo {
            chat_id: chat.id,
            photo_url: photo_url.to_string(),
            caption: caption.to_string(),
            keyboard: keyboard.cloned(),
        }))
    }

    async fn edit_message(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<()> {
        self.check(chat)?;
        self.record(Sent::Edit {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            text: text.to_string(),
            keyboard: keyboard.cloned(),
        });
        Ok(())
    }

    async fn edit_keyboard(&self, chat: &Chat, message_id: &str, keyboard: &Keyboard) -> Result<()> {
        self.check(chat)?;
        self.record(Sent::KeyboardEdit {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            keyboard: keyboard.clone(),
        });
        Ok(())
    }
}

pub struct TestApp {
    pub bot: Arc<MockBot>,
    pub ctx: BotContext,
    pub chain: HandlerChain,
}

pub fn test_config(opendota_url: &str, admins: Vec<i64>) -> BotConfig {
    BotConfig {
        bot_token: "test_bot_token_12345".to_string(),
        telegram_api_url: None,
        log_file: "logs/test.log".to_string(),
        database_url: "sqlite::memory:".to_string(),
        opendota_api_url: opendota_url.to_string(),
        opendota_api_key: None,
        admins,
        session_ttl: Duration::from_secs(3600),
        throttle: Duration::ZERO,
        broadcast_delay: Duration::ZERO,
        source_code_url: DEFAULT_SOURCE_CODE_URL.to_string(),
    }
}

impl TestApp {
    pub async fn new(opendota_url: &str, admins: Vec<i64>) -> Self {
        Self::with_database(opendota_url, admins, "sqlite::memory:").await
    }

    /// Same as [`TestApp::new`] on a caller-chosen database.
    pub async fn with_database(opendota_url: &str, admins: Vec<i64>, database_url: &str) -> Self {
        let bot = Arc::new(MockBot::new());
        let mut config = test_config(opendota_url, admins);
        config.database_url = database_url.to_string();
        let ctx = build_context(&config, bot.clone())
            .await
            .expect("build_context must succeed");
        let chain = build_handler_chain(&ctx, config.throttle);
        Self { bot, ctx, chain }
    }

    /// Registers the user with English already chosen.
    pub async fn english_user(&self, user_id: i64) {
        self.ctx.users.register_user(user_id, "Tester").await.unwrap();
        self.ctx.users.save_language(user_id, "en").await.unwrap();
    }

    pub async fn text(&self, user_id: i64, text: &str) {
        self.chain.handle(&private_text(user_id, text)).await.unwrap();
    }

    pub async fn press(&self, user_id: i64, message_id: &str, data: &str) {
        self.chain
            .handle(&callback(user_id, message_id, data))
            .await
            .unwrap();
    }
}

pub fn user(id: i64) -> User {
    User {
        id,
        username: Some(format!("user{}", id)),
        first_name: Some("Tester".to_string()),
        last_name: None,
    }
}

pub fn private_text(user_id: i64, text: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: user(user_id),
        chat: Chat::private(user_id),
        content: text.to_string(),
        kind: MessageKind::Text,
        created_at: Utc::now(),
    }
}

pub fn group_text(user_id: i64, chat_id: i64, text: &str) -> Message {
    Message {
        chat: Chat {
            id: chat_id,
            chat_type: "supergroup".to_string(),
        },
        ..private_text(user_id, text)
    }
}

pub fn callback(user_id: i64, message_id: &str, data: &str) -> Message {
    Message {
        id: message_id.to_string(),
        kind: MessageKind::Callback,
        ..private_text(user_id, data)
    }
}

pub const HEROES: &str = r#"[
    {"id": 1, "name": "npc_dota_hero_antimage", "localized_name": "Anti-Mage"},
    {"id": 2, "name": "npc_dota_hero_axe", "localized_name": "Axe"}
]"#;

pub async fn mock_json(server: &mut ServerGuard, path: &str, body: &str) -> mockito::Mock {
    server
        .mock("GET", Matcher::Regex(format!("^{}", path)))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Public account `account_id` named Dendi with one recent Anti-Mage match.
pub async fn mock_account(server: &mut ServerGuard, account_id: i64) -> Vec<mockito::Mock> {
    vec![
        mock_json(
            server,
            &format!("/players/{}/wl", account_id),
            r#"{"win": 30, "lose": 10}"#,
        )
        .await,
        mock_json(
            server,
            &format!("/players/{}/matches", account_id),
            r#"[{"match_id": 7000000001, "player_slot": 1, "radiant_win": true, "hero_id": 1,
                 "kills": 12, "deaths": 1, "assists": 9}]"#,
        )
        .await,
        mock_json(
            server,
            &format!("/players/{}$", account_id),
            &format!(
                r#"{{"profile": {{"account_id": {}, "personaname": "Dendi",
                     "avatarfull": "https://avatars.example.com/dendi.jpg",
                     "profileurl": "https://steamcommunity.com/id/dendi/",
                     "steamid": "76561197960265729", "loccountrycode": "UA"}},
                     "rank_tier": 75}}"#,
                account_id
            ),
        )
        .await,
        mock_json(server, "/heroes", HEROES).await,
    ]
}

/// Match 100: Radiant win, one public and one anonymous player.
pub async fn mock_match(server: &mut ServerGuard) -> Vec<mockito::Mock> {
    vec![
        mock_json(
            server,
            "/matches/100$",
            r#"{"match_id": 100, "radiant_win": true, "human_players": 2, "game_mode": 22,
                "lobby_type": 7, "duration": 2400, "radiant_score": 40, "dire_score": 21,
                "players": [
                    {"account_id": 11, "personaname": "Alpha", "player_slot": 0, "hero_id": 1,
                     "level": 25, "net_worth": 30000, "kills": 10, "deaths": 2, "assists": 7,
                     "hero_damage": 40000, "rank_tier": 80,
                     "benchmarks": {"gold_per_min": {"raw": 712.0}, "hero_damage_per_min": {"raw": 1000.0},
                                    "hero_healing_per_min": {"raw": 0.0}, "kills_per_min": {"raw": 0.25},
                                    "last_hits_per_min": {"raw": 9.5}, "tower_damage": {"raw": 5230.0}}},
                    {"account_id": null, "personaname": null, "player_slot": 128, "hero_id": 2,
                     "kills": 1, "deaths": 9, "assists": 3}
                ]}"#,
        )
        .await,
        mock_json(server, "/heroes", HEROES).await,
    ]
}
