use crate::locale::Locale;
use crate::search::KindLabels;

/// Every piece of static text rendered on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub search_title: &'static str,
    pub search_hint: &'static str,
    pub placeholder: &'static str,
    pub find: &'static str,
    pub searching: &'static str,
    pub groups_found: &'static str,
    pub total_mentions: &'static str,
    pub latest_activity: &'static str,
    pub results_title: &'static str,
    pub results_hint: &'static str,
    pub messages_suffix: &'static str,
    pub members_suffix: &'static str,
    pub history_title: &'static str,
    pub history_hint: &'static str,
    pub results_suffix: &'static str,
    pub footer: &'static str,
    pub key_hints: &'static str,
    pub log_title: &'static str,
    pub kinds: KindLabels,
}

pub const RU: Labels = Labels {
    app_title: "Telegram Search Bot",
    app_subtitle: "Поиск упоминаний контакта в группах и чатах",
    search_title: "Поиск по номеру телефона",
    search_hint: "Введите номер телефона для поиска во всех чатах и группах",
    placeholder: "+7 (999) 123-45-67",
    find: "Найти",
    searching: "Поиск...",
    groups_found: "Найдено групп",
    total_mentions: "Всего упоминаний",
    latest_activity: "Последняя активность",
    results_title: "Результаты поиска",
    results_hint: "Группы и чаты, где был найден контакт",
    messages_suffix: "сообщений",
    members_suffix: "участников",
    history_title: "История поисков",
    history_hint: "Последние запросы поиска",
    results_suffix: "результатов",
    footer: "Все данные защищены и хранятся конфиденциально",
    key_hints: "Enter найти · Tab панели · ↑↓ прокрутка · F2 журнал · Esc выход",
    log_title: "Журнал",
    kinds: KindLabels {
        group: "Группа",
        channel: "Канал",
        chat: "Чат",
    },
};

pub const EN: Labels = Labels {
    app_title: "Telegram Search Bot",
    app_subtitle: "Find where a contact is mentioned across groups and chats",
    search_title: "Search by phone number",
    search_hint: "Enter a phone number to search every chat and group",
    placeholder: "+7 (999) 123-45-67",
    find: "Find",
    searching: "Searching...",
    groups_found: "Groups found",
    total_mentions: "Total mentions",
    latest_activity: "Latest activity",
    results_title: "Search results",
    results_hint: "Groups and chats where the contact was found",
    messages_suffix: "messages",
    members_suffix: "members",
    history_title: "Search history",
    history_hint: "Recent search requests",
    results_suffix: "results",
    footer: "All data is protected and stored confidentially",
    key_hints: "Enter search · Tab panels · ↑↓ scroll · F2 log · Esc quit",
    log_title: "Log",
    kinds: KindLabels {
        group: "Group",
        channel: "Channel",
        chat: "Chat",
    },
};

impl Labels {
    #[must_use]
    pub const fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }
}
