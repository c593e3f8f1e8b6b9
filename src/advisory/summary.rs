//! Plain-text rendering of an advisory record

use std::fmt;

use super::model::AdvisoryRecord;

/// Display phrases for time-of-day labels
const TIME_PHRASES: &[(&str, &str)] = &[
    ("early_morning", "early morning"),
    ("morning", "morning"),
    ("midday", "midday"),
    ("afternoon", "afternoon"),
    ("evening", "evening"),
    ("night", "night"),
];

fn time_phrase(label: &str) -> &str {
    TIME_PHRASES
        .iter()
        .find(|(key, _)| *key == label)
        .map_or(label, |&(_, phrase)| phrase)
}

/// Upper-cases the first character and lower-cases the rest
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

impl fmt::Display for AdvisoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Weather Advisory: {} conditions\n",
            capitalize(self.condition.as_str())
        )?;
        writeln!(f, "Severity: {}\n", capitalize(self.severity.as_str()))?;
        writeln!(f, "{}\n", self.base_advisory)?;

        for advisory in [
            &self.wind_advisory,
            &self.humidity_advisory,
            &self.precipitation_advisory,
        ] {
            writeln!(f, "• {advisory}")?;
        }
        writeln!(f)?;

        write!(
            f,
            "This advisory takes into account {} seasonal patterns and {} conditions.",
            self.season_context,
            time_phrase(self.time_context.as_str())
        )
    }
}

/// Render the advisory as a multi-line summary
#[must_use]
pub fn summarize(record: &AdvisoryRecord) -> String {
    record.to_string()
}
