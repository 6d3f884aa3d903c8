//! Text rendering for the single weather screen.

use std::fmt::Write;

use pogoda_core::{ViewState, WeatherRecord, icon};

pub const TITLE: &str = "Простая погода";
pub const LOADING: &str = "Загрузка...";

/// The result card: location, truncated temperature, description,
/// feels-like and humidity, condition emoji.
pub fn render_record(record: &WeatherRecord) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "  {}", record.location_name);
    let _ = writeln!(out, "  {}°C", record.temperature_c as i64);
    if let Some(condition) = record.primary_condition() {
        let _ = writeln!(out, "  {}", condition.description);
    }
    let _ = writeln!(
        out,
        "  Ощущается: {}°C   Влажность: {}%",
        record.feels_like_c as i64, record.humidity_pct
    );
    if let Some(condition) = record.primary_condition() {
        let _ = writeln!(out, "  {}", icon::emoji_for(&condition.icon_code));
    }

    out
}

fn render_error(message: &str) -> String {
    format!("  Ошибка\n  {message}\n")
}

/// The whole screen: loading line, error panel, then the last
/// successful record. The record deliberately stays visible under a
/// loading line or an error until the next success overwrites it.
pub fn render_screen(state: &ViewState, last_record: Option<&WeatherRecord>) -> String {
    let mut out = String::new();

    if state.is_loading() {
        out.push_str(LOADING);
        out.push('\n');
    }
    if let ViewState::Failure(message) = state {
        out.push_str(&render_error(message));
    }
    if let Some(record) = last_record {
        out.push_str(&render_record(record));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pogoda_core::Condition;

    fn gomel() -> WeatherRecord {
        WeatherRecord {
            location_name: "Gomel".into(),
            temperature_c: 5.0,
            feels_like_c: 2.0,
            humidity_pct: 80,
            conditions: vec![Condition { description: "ясно".into(), icon_code: "01d".into() }],
        }
    }

    #[test]
    fn record_card_shows_all_fields() {
        let card = render_record(&gomel());
        assert!(card.contains("Gomel"));
        assert!(card.contains("5°C"));
        assert!(card.contains("ясно"));
        assert!(card.contains("Ощущается: 2°C"));
        assert!(card.contains("Влажность: 80%"));
        assert!(card.contains("☀️"));
    }

    #[test]
    fn card_without_conditions_skips_description_and_emoji() {
        let mut record = gomel();
        record.conditions.clear();
        let card = render_record(&record);
        assert!(card.contains("Gomel"));
        assert!(!card.contains("☀️"));
    }

    #[test]
    fn failure_screen_keeps_last_record_visible() {
        let record = gomel();
        let screen =
            render_screen(&ViewState::Failure("Город не найден".into()), Some(&record));
        assert!(screen.contains("Город не найден"));
        assert!(screen.contains("Gomel"));
    }

    #[test]
    fn loading_screen_keeps_last_record_visible() {
        let record = gomel();
        let screen = render_screen(&ViewState::Loading, Some(&record));
        assert!(screen.starts_with(LOADING));
        assert!(screen.contains("Gomel"));
    }

    #[test]
    fn idle_screen_is_empty() {
        assert!(render_screen(&ViewState::Idle, None).is_empty());
    }
}
