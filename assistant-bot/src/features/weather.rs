//! Weather flow: city prompt and forecast reply.

use dbot_core::Reply;
use gateway::{ExternalError, Forecast, WeatherClient};
use tracing::warn;

use crate::conversation::ConversationSession;
use crate::texts;

pub fn start(session: &mut ConversationSession) -> Reply {
    session.start_weather();
    Reply::text(texts::ASK_CITY)
}

/// Answers the city step. The session is idle on return unless the city was blank.
pub async fn answer_city(
    client: &WeatherClient,
    user_id: i64,
    input: &str,
    session: &mut ConversationSession,
) -> Reply {
    let city = input.trim();
    if city.is_empty() {
        return start(session);
    }

    match client.forecast(city).await {
        Ok(forecast) => Reply::text(format_forecast(&forecast)),
        Err(e) => {
            warn!(user_id, city = %city, error = %e, "Forecast failed");
            Reply::text(failure_text(&e))
        }
    }
}

pub fn format_forecast(forecast: &Forecast) -> String {
    format!(
        "🌍 Местоположение: {}\n🌡 Температура: {} °C\n☁ Погода: {}\n💧 Влажность: {}%\n💨 Ветер: {} км/ч",
        forecast.location,
        texts::format_decimal(forecast.temp),
        forecast.description,
        texts::format_decimal(forecast.humidity),
        texts::format_decimal(forecast.wind_speed),
    )
}

pub fn failure_text(err: &ExternalError) -> &'static str {
    match err {
        ExternalError::Network(_) => texts::NETWORK_ERROR,
        ExternalError::BadStatus(_) => texts::WEATHER_BAD_STATUS,
        ExternalError::MalformedBody(_) => texts::MALFORMED_RESPONSE,
    }
}
