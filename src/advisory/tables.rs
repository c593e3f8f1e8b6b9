//! Static decision tables
//!
//! Range tables are ordered slices scanned first-match-wins. Composite
//! tables are exact-match maps keyed by a label pair and built once on
//! first use.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::model::{Activity, Condition, RiskLevel, Season, TimeContext};

/// Half-open interval `[lower, upper)` carrying a label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeRule<T> {
    pub lower: f64,
    pub upper: f64,
    pub label: T,
}

impl<T> RangeRule<T> {
    pub const fn new(lower: f64, upper: f64, label: T) -> Self {
        Self {
            lower,
            upper,
            label,
        }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value < self.upper
    }
}

/// Returns the label of the first rule containing `value`
pub fn lookup_range<T: Copy>(rules: &[RangeRule<T>], value: f64) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.contains(value))
        .map(|rule| rule.label)
}

/// Bounds over temperature, humidity and wind speed. All three must match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionRule {
    pub temperature: RangeRule<()>,
    pub humidity: RangeRule<()>,
    pub wind_speed: RangeRule<()>,
    pub condition: Condition,
}

impl ConditionRule {
    #[must_use]
    pub fn matches(&self, temperature: f64, humidity: f64, wind_speed: f64) -> bool {
        self.temperature.contains(temperature)
            && self.humidity.contains(humidity)
            && self.wind_speed.contains(wind_speed)
    }
}

const ANY_HUMIDITY: RangeRule<()> = RangeRule::new(0.0, 100.0, ());
const ANY_WIND: RangeRule<()> = RangeRule::new(0.0, f64::INFINITY, ());

const fn temperature_band(lower: f64, upper: f64, condition: Condition) -> ConditionRule {
    ConditionRule {
        temperature: RangeRule::new(lower, upper, ()),
        // Humidity and wind bounds span the whole domain for now
        humidity: ANY_HUMIDITY,
        wind_speed: ANY_WIND,
        condition,
    }
}

pub const CONDITION_RULES: &[ConditionRule] = &[
    temperature_band(f64::NEG_INFINITY, 0.0, Condition::Freezing),
    temperature_band(0.0, 10.0, Condition::Cold),
    temperature_band(10.0, 20.0, Condition::Cool),
    temperature_band(20.0, 25.0, Condition::Mild),
    temperature_band(25.0, 30.0, Condition::Warm),
    temperature_band(30.0, 35.0, Condition::Hot),
    temperature_band(35.0, f64::INFINITY, Condition::VeryHot),
];

pub const WIND_ADVISORIES: &[RangeRule<&str>] = &[
    RangeRule::new(0.0, 15.0, "Low wind conditions"),
    RangeRule::new(15.0, 30.0, "Moderate wind. Secure loose objects outdoors."),
    RangeRule::new(
        30.0,
        45.0,
        "Strong wind advisory. Be cautious with high-profile vehicles.",
    ),
    RangeRule::new(
        45.0,
        f64::INFINITY,
        "Dangerous wind conditions. Avoid unnecessary travel.",
    ),
];

pub const WIND_ADVISORY_FALLBACK: &str = "Extreme wind conditions. Seek shelter immediately.";

pub const HUMIDITY_ADVISORIES: &[RangeRule<&str>] = &[
    RangeRule::new(
        0.0,
        30.0,
        "Very dry conditions. Stay hydrated and moisturize skin.",
    ),
    RangeRule::new(30.0, 50.0, "Comfortable humidity levels."),
    RangeRule::new(
        50.0,
        70.0,
        "Moderately humid. May feel warmer than actual temperature.",
    ),
    RangeRule::new(
        70.0,
        100.0,
        "High humidity. Heat stress possible in warm temperatures.",
    ),
];

pub const HUMIDITY_ADVISORY_FALLBACK: &str = "Extreme humidity levels. Use caution.";

pub const TIME_CONTEXTS: &[RangeRule<TimeContext>] = &[
    RangeRule::new(0.0, 6.0, TimeContext::EarlyMorning),
    RangeRule::new(6.0, 10.0, TimeContext::Morning),
    RangeRule::new(10.0, 14.0, TimeContext::Midday),
    RangeRule::new(14.0, 18.0, TimeContext::Afternoon),
    RangeRule::new(18.0, 22.0, TimeContext::Evening),
    RangeRule::new(22.0, 24.0, TimeContext::Night),
];

/// Season by month, index 0 is January
pub const MONTH_SEASONS: [Season; 12] = [
    Season::Winter,
    Season::Winter,
    Season::Spring,
    Season::Spring,
    Season::Spring,
    Season::Summer,
    Season::Summer,
    Season::Summer,
    Season::Fall,
    Season::Fall,
    Season::Fall,
    Season::Winter,
];

pub const PRECIPITATION_LIGHT: &str =
    "Light precipitation expected. Consider carrying an umbrella.";
pub const PRECIPITATION_MODERATE: &str = "Moderate precipitation expected. Rain gear recommended.";
pub const PRECIPITATION_HEAVY: &str =
    "Heavy precipitation expected. Take precautions against flooding in low areas.";
pub const PRECIPITATION_SEVERE: &str =
    "Severe precipitation warning. Flooding possible. Avoid unnecessary travel.";
pub const NO_PRECIPITATION: &str = "No precipitation expected.";

pub const BASE_ADVISORY_FALLBACK: &str = "No specific advisory for these conditions.";

pub static RISK_TABLE: LazyLock<HashMap<(Condition, Activity), RiskLevel>> = LazyLock::new(|| {
    use Activity::{DailyCommute, OutdoorSports, Travel};
    use Condition::*;
    use RiskLevel::{High, Low, Moderate};

    // (condition, outdoor_sports, travel, daily_commute)
    let rows = [
        (Freezing, High, High, Moderate),
        (Cold, Moderate, Moderate, Low),
        (Cool, Low, Low, Low),
        (Mild, Low, Low, Low),
        (Warm, Low, Low, Low),
        (Hot, Moderate, Low, Low),
        (VeryHot, High, Moderate, Moderate),
    ];

    rows.into_iter()
        .flat_map(|(condition, sports, travel, commute)| {
            [
                ((condition, OutdoorSports), sports),
                ((condition, Travel), travel),
                ((condition, DailyCommute), commute),
            ]
        })
        .collect()
});

pub static ADVISORY_TABLE: LazyLock<HashMap<(Condition, RiskLevel), &'static str>> =
    LazyLock::new(|| {
        use Condition::*;
        use RiskLevel::{High, Low, Moderate};

        HashMap::from([
            ((Freezing, High), "Extreme caution advised. Risk of hypothermia and frostbite. Avoid unnecessary travel and outdoor activities."),
            ((Freezing, Moderate), "Wear multiple layers and cover extremities. Be cautious of ice on roads and pathways."),
            ((Freezing, Low), "Dress warmly and be aware of potentially icy conditions."),
            ((Cold, High), "Limit time outdoors. Wear insulated clothing and protect extremities."),
            ((Cold, Moderate), "Dress in warm layers and be cautious of cold-related discomfort."),
            ((Cold, Low), "Light jacket or sweater recommended."),
            ((Cool, High), "Dress in layers and consider weather-appropriate gear for extended outdoor activities."),
            ((Cool, Moderate), "Light jacket recommended, especially in the evening."),
            ((Cool, Low), "Generally comfortable conditions. Light outer layer may be needed."),
            ((Mild, High), "Comfortable conditions for most activities. Stay hydrated during extended outdoor exposure."),
            ((Mild, Moderate), "Ideal weather for most activities. No special precautions needed."),
            ((Mild, Low), "Optimal conditions for all activities."),
            ((Warm, High), "Stay hydrated and consider sun protection for extended outdoor activities."),
            ((Warm, Moderate), "Comfortable conditions. Consider light clothing and hydration."),
            ((Warm, Low), "Pleasant conditions. No special precautions needed."),
            ((Hot, High), "Limit strenuous activities during peak heat. Stay hydrated and seek shade frequently."),
            ((Hot, Moderate), "Stay hydrated and use sun protection. Take breaks in shade when outdoors."),
            ((Hot, Low), "Light clothing recommended. Stay hydrated."),
            ((VeryHot, High), "Heat danger! Avoid strenuous activities. Stay hydrated and in air-conditioned environments when possible."),
            ((VeryHot, Moderate), "Minimize sun exposure. Drink plenty of fluids and take frequent breaks in shade or air conditioning."),
            ((VeryHot, Low), "Use caution in heat. Stay hydrated and limit direct sun exposure."),
        ])
    });
