//! Reply and inline keyboards.

use dbot_core::{InlineButton, Markup};

use crate::texts;

pub const ACTION_SHOW_MORE: &str = "show_more";
pub const ACTION_OPTION_1: &str = "option_1";
pub const ACTION_OPTION_2: &str = "option_2";

/// Main reply keyboard: finance buttons plus the greeting row.
pub fn main_keyboard() -> Markup {
    let row = |labels: &[&str]| labels.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    Markup::Keyboard(vec![
        row(&[texts::BTN_CONSENT]),
        row(&[texts::BTN_REVOKE]),
        row(&[texts::BTN_REGISTER, texts::BTN_RATES]),
        row(&[texts::BTN_TIPS, texts::BTN_FINANCES]),
        row(&[texts::BTN_HELLO, texts::BTN_BYE]),
    ])
}

pub fn links() -> Markup {
    Markup::Inline(vec![
        vec![InlineButton::url("📰 Новости", "https://news.yandex.ru")],
        vec![InlineButton::url("🎵 Музыка", "https://music.yandex.ru")],
        vec![InlineButton::url("🎬 Видео", "https://youtube.com")],
    ])
}

pub fn show_more() -> Markup {
    Markup::Inline(vec![vec![InlineButton::callback(
        texts::SHOW_MORE,
        ACTION_SHOW_MORE,
    )]])
}

pub fn options() -> Markup {
    Markup::Inline(vec![
        vec![InlineButton::callback("Опция 1", ACTION_OPTION_1)],
        vec![InlineButton::callback("Опция 2", ACTION_OPTION_2)],
    ])
}
