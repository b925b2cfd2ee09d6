//! User-facing texts.

use chrono::{DateTime, Utc};

pub const START: &str = "👋 Привет! Я ваш помощник для погоды, вдохновения и личных финансов.\n\n\
Напишите /help, чтобы узнать, что я умею.\n\n\
Для работы с личными финансами необходимо:\n\
1. Дать согласие на обработку персональных данных.\n\
2. Зарегистрироваться (это произойдёт автоматически при согласии).\n\n\
В любой момент вы можете отозвать согласие.";

pub const HELP: &str = "Вот что я умею:\n\
/start — начать работу\n\
/help — получить помощь\n\
/cancel — прервать текущий диалог\n\
/forecast — получить прогноз погоды (введи название города)\n\
/fact — случайный факт\n\
/bored — чем заняться, когда скучно\n\
/cat — случайный котик\n\
/joke — шутка\n\
/pokemon <имя> — информация о покемоне (например, /pokemon pikachu)\n\
/rates — курс валют\n\
/tips — совет по экономии\n\
/finances — ввести личные расходы\n\
/links — показать кнопки вызова ссылок\n\
/dynamic — показать больше опций";

pub const CANCELLED: &str = "Действие отменено.";
pub const UNKNOWN_INPUT: &str = "Я не понимаю. Напишите /help, чтобы узнать, что я умею.";
pub const FAILURE: &str = "⚠ Произошла ошибка. Попробуйте позже.";

// Reply keyboard buttons
pub const BTN_CONSENT: &str = "Дать согласие на обработку персональных данных";
pub const BTN_REVOKE: &str = "Отзыв согласия на обработку персональных данных";
pub const BTN_REGISTER: &str = "Регистрация в телеграм боте";
pub const BTN_RATES: &str = "Курс валют";
pub const BTN_TIPS: &str = "Советы по экономии";
pub const BTN_FINANCES: &str = "Личные финансы";
pub const BTN_HELLO: &str = "Привет";
pub const BTN_BYE: &str = "Пока";

pub const ANONYMOUS_NAME: &str = "Пользователь без имени";
pub const FRIEND: &str = "друг";

// Consent and registration
pub const CONSENT_CREATED: &str =
    "✅ Вы дали согласие на обработку персональных данных и успешно зарегистрированы!";
pub const CONSENT_GRANTED: &str = "✅ Согласие на обработку персональных данных получено!";
pub const CONSENT_REVOKED: &str = "🚫 Согласие на обработку персональных данных отозвано. Все данные сохранены в соответствии с законом.";
pub const NOT_REGISTERED: &str = "❌ Вы не зарегистрированы.";
pub const CONSENT_NEVER_GIVEN: &str = "⚠️ Вы ещё не давали согласие на обработку данных.";
pub const REGISTERED_NO_CONSENT: &str =
    "📌 Вы зарегистрированы, но не дали согласие. Пожалуйста, нажмите «Дать согласие».";
pub const ALREADY_REGISTERED_WITH_CONSENT: &str = "✅ Вы уже зарегистрированы и дали согласие!";
pub const ALREADY_REGISTERED_NO_CONSENT: &str =
    "⚠️ Вы зарегистрированы, но не дали согласие. Нажмите «Дать согласие».";
pub const CONSENT_REQUIRED: &str = "⚠️ Сначала дайте согласие на обработку данных!";

// Finance questionnaire
pub const ASK_CATEGORY: [&str; 3] = [
    "Введите первую категорию расходов (например, 'Еда'):",
    "Введите вторую категорию расходов:",
    "Введите третью категорию расходов:",
];
pub const ASK_AMOUNT: &str = "Введите сумму по этой категории (в рублях):";
pub const BAD_AMOUNT: &str = "❌ Введите число (например, 500.0)";
pub const NEGATIVE_AMOUNT: &str = "❌ Сумма не может быть отрицательной. Введите число (например, 500.0)";
pub const EMPTY_CATEGORY: &str = "❌ Название категории не может быть пустым.";

// Weather
pub const ASK_CITY: &str = "Введите название города:";
pub const NETWORK_ERROR: &str = "📡 Ошибка сети. Попробуйте позже.";
pub const WEATHER_BAD_STATUS: &str = "❌ Ошибка: неверный ключ или город не найден.";
pub const MALFORMED_RESPONSE: &str = "📄 Получен некорректный ответ от сервера.";

// Fun
pub const FACT_FAILED: &str = "❌ Ошибка при получении факта.";
pub const ACTIVITY_FAILED: &str = "❌ Ошибка при получении активности.";
pub const CAT_FAILED: &str = "❌ Не удалось получить картинку котика 😿";
pub const JOKE_FAILED: &str = "❌ Ошибка при получении шутки.";
pub const POKEMON_USAGE: &str = "❗ Укажи имя покемона. Например: /pokemon pikachu";
pub const POKEMON_FAILED: &str = "❌ Ошибка при получении информации о покемоне.";

// Savings
pub const RATES_FAILED: &str = "Не удалось получить данные о курсе валют!";
pub const SAVING_TIPS: [&str; 6] = [
    "Совет 1: Ведите бюджет и следите за своими расходами.",
    "Совет 2: Откладывайте часть доходов на сбережения.",
    "Совет 3: Покупайте товары по скидкам и распродажам.",
    "Совет 4: Ходите в магазин сытым.",
    "Совет 5: К каждому шопингу готовьте список покупок и не покупайте ничего, кроме того, что в списке.",
    "Совет 6: Старайтесь обходиться без кредитов и кредитных карт.",
];

// Menus
pub const CHOOSE_ACTION: &str = "Выберите действие:";
pub const LINKS_PROMPT: &str = "Нажмите на кнопку, чтобы перейти по ссылке:";
pub const DYNAMIC_PROMPT: &str = "Нажмите кнопку ниже:";
pub const SHOW_MORE: &str = "Показать больше опций";
pub const CHOOSE_OPTION: &str = "Выберите опцию:";

pub fn consent_already_granted(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => format!("✅ Ваше согласие было получено: {}", format_date(date)),
        None => CONSENT_GRANTED.to_string(),
    }
}

pub fn consent_already_revoked(date: DateTime<Utc>) -> String {
    format!("⚠️ Вы уже отозвали согласие: {}", format_date(date))
}

pub fn pokemon_not_found(name: &str) -> String {
    format!("❌ Покемон '{}' не найден. Попробуй другое имя.", name)
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Whole numbers keep one decimal ("500.0"), others print as-is ("1250.5").
pub fn format_decimal(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.1}", amount)
    } else {
        amount.to_string()
    }
}

pub fn escape_html(s: &str) -> String {
    teloxide::utils::html::escape(s)
}
