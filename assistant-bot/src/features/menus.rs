//! Static menus, greetings and inline option buttons.

use dbot_core::{Reply, User};

use crate::keyboards;
use crate::texts::{self, escape_html};

pub fn start() -> Reply {
    Reply::text(texts::START).with_markup(keyboards::main_keyboard())
}

pub fn help() -> Reply {
    Reply::text(texts::HELP)
}

pub fn cancelled() -> Reply {
    Reply::text(texts::CANCELLED).with_markup(keyboards::main_keyboard())
}

pub fn greet(user: &User, hello: bool) -> Reply {
    let name = user
        .first_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(texts::FRIEND);
    let greeting = if hello { "Привет" } else { "До свидания" };
    Reply::html(format!("{}, <b>{}</b>!", greeting, escape_html(name)))
}

pub fn links() -> Reply {
    Reply::text(texts::LINKS_PROMPT).with_markup(keyboards::links())
}

pub fn dynamic() -> Reply {
    Reply::text(texts::DYNAMIC_PROMPT).with_markup(keyboards::show_more())
}

/// Replaces the "show more" message with the option menu.
pub fn show_more(message_id: &str) -> Reply {
    Reply::text(texts::CHOOSE_OPTION)
        .with_markup(keyboards::options())
        .editing(message_id)
}

pub fn option_chosen(option: u8) -> Reply {
    Reply::html(format!("Вы выбрали: <b>Опция {}</b>", option))
}
