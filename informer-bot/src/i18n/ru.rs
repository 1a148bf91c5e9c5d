use super::Texts;

pub(super) static TEXTS: Texts = Texts {
    choose_language: "Выберите язык / Choose your language",
    language_saved: "Язык сохранён!",
    back: "Вернуться в меню",
    prev: "<<",
    next: ">>",
    account_info_button: "Информация об аккаунте 👤",
    search_by_nickname_button: "Поиск по никнейму 🔎",
    match_info_button: "Информация о матче 🎮",
    user_profile_button: "Мой профиль 📇",
    language_button: "Язык / Language 💬",
    source_code_button: "Исходный код 👀",
    players_button: "Игроки матча 👥",
    steam_profile_button: "Профиль Steam",
    link_account_button: "Привязать аккаунт 🔗",
    unlink_account_button: "Отвязать аккаунт ✂️",
    check_account_button: "Мой аккаунт Dota 📊",
    confirm_button: "Отправить ✅",
    cancel_button: "Отменить ❌",

    welcome: "Привет, {name}! Я показываю статистику Dota 2 по данным OpenDota. Выберите действие в меню ниже.",
    help: "Я показываю статистику Dota 2 по данным OpenDota.\n\nВ личных сообщениях команда /start открывает меню.\n\nВ группах:\n/getaccount <id> - информация об аккаунте\n/getmatch <id> - информация о матче\n/help - эта справка",
    send_account_id: "Отправьте ID аккаунта Dota 2 (Steam32).",
    send_match_id: "Отправьте ID матча.",
    send_nickname: "Отправьте никнейм игрока.",
    send_link_account_id: "Отправьте ID аккаунта Dota 2, который нужно привязать.",
    looking_for_account: "Ищу аккаунт {id}...",
    looking_for_match: "Ищу матч {id}...",
    searching_nickname: "Ищу аккаунты...",
    found_accounts: "Найденные аккаунты:",
    getaccount_usage: "Укажите ID аккаунта после команды: /getaccount <id>",
    getmatch_usage: "Укажите ID матча после команды: /getmatch <id>",

    not_a_number: "Некорректный ввод: ID должен состоять только из цифр.",
    not_positive: "ID должен быть больше нуля.",
    account_not_found: "Не удалось получить данные аккаунта. Возможно, профиль скрыт или не существует.",
    match_not_found: "Матч не найден.",
    no_players: "Нет данных об игроках этого матча.",
    player_not_found: "Игрок не найден.",
    no_accounts_found: "По этому никнейму ничего не найдено.",
    session_expired: "Данные устарели, начните заново.",
    unexpected_error: "Произошла непредвиденная ошибка. Попробуйте позже.",
    not_allowed: "Это действие доступно только администраторам.",
    unknown_input: "Не понимаю. Откройте меню командой /start.",

    name: "Имя:",
    account_id: "ID аккаунта:",
    steam_id: "Steam ID:",
    team: "Команда:",
    rank: "Ранг:",
    hero: "Герой:",
    kda: "У/С/П:",
    level: "Уровень:",
    scepter: "Аганим:",
    shard: "Аганим (осколок):",
    net_worth: "Ценность:",
    gold_per_min: "Золото в минуту:",
    hero_damage: "Урон по героям:",
    hero_damage_per_min: "Урон по героям в минуту:",
    kills_per_min: "Убийств в минуту:",
    last_hits_per_min: "Добиваний в минуту:",
    healing_per_min: "Лечение в минуту:",
    tower_damage: "Урон по строениям:",
    winrate: "Винрейт",
    total_matches: "Матчей:",
    recent_winrate: "Винрейт за 20 матчей:",
    last_match: "Последний матч:",
    dota_plus: "Dota Plus:",
    country: "Страна:",
    winner: "Победа:",
    players_count: "Игроков:",
    abandons: "Покинули игру:",
    match_id: "ID матча:",
    duration: "Длительность:",
    score: "Счёт:",
    won: "победа",
    lost: "поражение",
    radiant: "Силы Света",
    dire: "Силы Тьмы",
    unknown: "неизвестно",
    uncalibrated: "не откалиброван",
    probably_hidden: "Часть данных недоступна: вероятно, профиль скрыт.",
    yes: "✅",
    no: "❌",
    medals: [
        "Рекрут", "Страж", "Рыцарь", "Герой", "Легенда", "Властелин", "Божество", "Титан",
    ],

    profile_title: "Ваш профиль",
    requests: "Запросов:",
    registered: "Дата регистрации:",
    last_request: "Последний запрос:",
    linked_account: "Привязанный аккаунт: {id}",
    not_linked: "Аккаунт Dota не привязан.",
    account_linked: "Аккаунт привязан!",
    account_already_linked: "У вас уже привязан аккаунт. Сначала отвяжите его.",
    account_unlinked: "Аккаунт отвязан.",
    nothing_to_unlink: "Привязанного аккаунта нет.",

    admin_help: "Команды администратора:\n/statistics - статистика пользователей\n/sendall - рассылка всем пользователям\n/help - эта справка",
    broadcast_prompt: "Отправьте текст рассылки.",
    broadcast_confirm: "Текст рассылки:\n\n{text}\n\nОтправить всем пользователям?",
    broadcast_started: "Рассылка начата.",
    broadcast_cancelled: "Рассылка отменена.",
    broadcast_done: "Рассылка завершена. Доставлено: {sent}, ошибок: {failed}.",
    stats_title: "Статистика",
    total_users: "Пользователей:",
    total_requests: "Всего запросов:",
    linked_profiles: "Привязанных аккаунтов:",
    top_users: "Самые активные:",
};
