//! Maps upstream icon codes (e.g. "01d") to display emoji.

/// Shown when no rule matches the code.
pub const FALLBACK_EMOJI: &str = "🌡️";

/// Containment rules in priority order. Day/night variants of clear sky
/// get distinct glyphs; every other group matches on its numeric prefix,
/// so "01d"/"01n" must come before any bare "0x" pattern would.
const RULES: &[(&str, &str)] = &[
    ("01d", "☀️"),
    ("01n", "🌙"),
    ("02", "⛅"),
    ("03", "☁️"),
    ("04", "🌫️"),
    ("09", "🌧️"),
    ("10", "🌦️"),
    ("11", "⛈️"),
    ("13", "❄️"),
    ("50", "🌫️"),
];

/// Total function: unknown codes fall back to [`FALLBACK_EMOJI`].
/// First matching rule wins.
pub fn emoji_for(icon_code: &str) -> &'static str {
    RULES
        .iter()
        .find(|(pattern, _)| icon_code.contains(pattern))
        .map(|(_, emoji)| *emoji)
        .unwrap_or(FALLBACK_EMOJI)
}
