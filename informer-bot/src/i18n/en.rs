use super::Texts;

pub(super) static TEXTS: Texts = Texts {
    choose_language: "Выберите язык / Choose your language",
    language_saved: "Language saved!",
    back: "Back to menu",
    prev: "<<",
    next: ">>",
    account_info_button: "Account info 👤",
    search_by_nickname_button: "Search by nickname 🔎",
    match_info_button: "Match info 🎮",
    user_profile_button: "My profile 📇",
    language_button: "Язык / Language 💬",
    source_code_button: "Source code 👀",
    players_button: "Match players 👥",
    steam_profile_button: "Steam profile",
    link_account_button: "Link account 🔗",
    unlink_account_button: "Unlink account ✂️",
    check_account_button: "My Dota account 📊",
    confirm_button: "Send ✅",
    cancel_button: "Cancel ❌",

    welcome: "Hi, {name}! I show Dota 2 statistics from OpenDota. Pick an action from the menu below.",
    help: "I show Dota 2 statistics from OpenDota.\n\nIn private chat /start opens the menu.\n\nIn groups:\n/getaccount <id> - account info\n/getmatch <id> - match info\n/help - this help",
    send_account_id: "Send a Dota 2 account ID (Steam32).",
    send_match_id: "Send a match ID.",
    send_nickname: "Send a player nickname.",
    send_link_account_id: "Send the Dota 2 account ID to link.",
    looking_for_account: "Looking up account {id}...",
    looking_for_match: "Looking up match {id}...",
    searching_nickname: "Searching accounts...",
    found_accounts: "Accounts found:",
    getaccount_usage: "Put the account ID after the command: /getaccount <id>",
    getmatch_usage: "Put the match ID after the command: /getmatch <id>",

    not_a_number: "Invalid input: the ID must contain only digits.",
    not_positive: "The ID must be greater than zero.",
    account_not_found: "Could not get account data. The profile may be private or not exist.",
    match_not_found: "Match not found.",
    no_players: "No player data for this match.",
    player_not_found: "Player not found.",
    no_accounts_found: "Nothing found for this nickname.",
    session_expired: "This data is outdated, please start over.",
    unexpected_error: "Something went wrong. Please try again later.",
    not_allowed: "This action is available to administrators only.",
    unknown_input: "I don't understand. Open the menu with /start.",

    name: "Name:",
    account_id: "Account ID:",
    steam_id: "Steam ID:",
    team: "Team:",
    rank: "Rank:",
    hero: "Hero:",
    kda: "K/D/A:",
    level: "Level:",
    scepter: "Aghanim's Scepter:",
    shard: "Aghanim's Shard:",
    net_worth: "Net worth:",
    gold_per_min: "Gold per minute:",
    hero_damage: "Hero damage:",
    hero_damage_per_min: "Hero damage per minute:",
    kills_per_min: "Kills per minute:",
    last_hits_per_min: "Last hits per minute:",
    healing_per_min: "Healing per minute:",
    tower_damage: "Building damage:",
    winrate: "Winrate",
    total_matches: "Matches:",
    recent_winrate: "Winrate over last 20:",
    last_match: "Last match:",
    dota_plus: "Dota Plus:",
    country: "Country:",
    winner: "Winner:",
    players_count: "Players:",
    abandons: "Abandoned:",
    match_id: "Match ID:",
    duration: "Duration:",
    score: "Score:",
    won: "won",
    lost: "lost",
    radiant: "Radiant",
    dire: "Dire",
    unknown: "unknown",
    uncalibrated: "uncalibrated",
    probably_hidden: "Some data is unavailable: the profile is probably private.",
    yes: "✅",
    no: "❌",
    medals: [
        "Herald", "Guardian", "Crusader", "Archon", "Legend", "Ancient", "Divine", "Immortal",
    ],

    profile_title: "Your profile",
    requests: "Requests:",
    registered: "Registered:",
    last_request: "Last request:",
    linked_account: "Linked account: {id}",
    not_linked: "No Dota account linked.",
    account_linked: "Account linked!",
    account_already_linked: "An account is already linked. Unlink it first.",
    account_unlinked: "Account unlinked.",
    nothing_to_unlink: "No account is linked.",

    admin_help: "Admin commands:\n/statistics - user statistics\n/sendall - message every user\n/help - this help",
    broadcast_prompt: "Send the broadcast text.",
    broadcast_confirm: "Broadcast text:\n\n{text}\n\nSend it to every user?",
    broadcast_started: "Broadcast started.",
    broadcast_cancelled: "Broadcast cancelled.",
    broadcast_done: "Broadcast finished. Delivered: {sent}, failed: {failed}.",
    stats_title: "Statistics",
    total_users: "Users:",
    total_requests: "Total requests:",
    linked_profiles: "Linked accounts:",
    top_users: "Most active:",
};
