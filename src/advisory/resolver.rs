//! Advisory resolution
//!
//! Every function here is a pure lookup over the static tables. Nothing can
//! fail: inputs outside a table fall back to that table's default label.

use tracing::instrument;

use super::model::{
    Activity, AdvisoryRecord, AdvisoryRequest, Condition, RiskLevel, Season, Severity, TimeContext,
};
use super::tables::{
    self, ADVISORY_TABLE, CONDITION_RULES, HUMIDITY_ADVISORIES, MONTH_SEASONS, RISK_TABLE,
    TIME_CONTEXTS, WIND_ADVISORIES,
};

/// Wind speed (km/h) at which severity is forced to high
pub const SEVERE_WIND_KMH: f64 = 45.0;
/// Wind speed (km/h) at which severity is at least moderate
pub const STRONG_WIND_KMH: f64 = 30.0;
/// Precipitation (mm) at which severity is forced to high
pub const SEVERE_PRECIPITATION_MM: f64 = 15.0;
/// Precipitation (mm) at which severity is at least moderate
pub const HEAVY_PRECIPITATION_MM: f64 = 7.5;
const MODERATE_PRECIPITATION_MM: f64 = 2.5;

/// Classify the weather using the first condition rule whose bounds contain
/// all three readings
#[must_use]
pub fn resolve_condition(temperature: f64, humidity: f64, wind_speed: f64) -> Condition {
    CONDITION_RULES
        .iter()
        .find(|rule| rule.matches(temperature, humidity, wind_speed))
        .map_or(Condition::Normal, |rule| rule.condition)
}

/// Activities without rows in the risk table never reach the map
#[must_use]
pub fn resolve_risk(condition: Condition, activity: &Activity) -> RiskLevel {
    let activity = match activity {
        Activity::OutdoorSports => Activity::OutdoorSports,
        Activity::Travel => Activity::Travel,
        Activity::DailyCommute => Activity::DailyCommute,
        Activity::Other(_) => return RiskLevel::Low,
    };

    RISK_TABLE
        .get(&(condition, activity))
        .copied()
        .unwrap_or(RiskLevel::Low)
}

#[must_use]
pub fn resolve_wind_advisory(wind_speed: f64) -> &'static str {
    tables::lookup_range(WIND_ADVISORIES, wind_speed).unwrap_or(tables::WIND_ADVISORY_FALLBACK)
}

#[must_use]
pub fn resolve_humidity_advisory(humidity: f64) -> &'static str {
    tables::lookup_range(HUMIDITY_ADVISORIES, humidity)
        .unwrap_or(tables::HUMIDITY_ADVISORY_FALLBACK)
}

#[must_use]
pub fn resolve_time_context(hour: i32) -> TimeContext {
    tables::lookup_range(TIME_CONTEXTS, f64::from(hour)).unwrap_or(TimeContext::Night)
}

#[must_use]
pub fn resolve_season_context(month: i32) -> Season {
    usize::try_from(month)
        .ok()
        .and_then(|month| month.checked_sub(1))
        .and_then(|index| MONTH_SEASONS.get(index))
        .copied()
        .unwrap_or(Season::Unknown)
}

/// Precipitation guidance in mm. Anything not strictly positive means no
/// precipitation rather than a fifth band.
#[must_use]
pub fn resolve_precipitation_advisory(precipitation: f64) -> &'static str {
    match precipitation {
        p if p.is_nan() || p <= 0.0 => tables::NO_PRECIPITATION,
        p if p < MODERATE_PRECIPITATION_MM => tables::PRECIPITATION_LIGHT,
        p if p < HEAVY_PRECIPITATION_MM => tables::PRECIPITATION_MODERATE,
        p if p < SEVERE_PRECIPITATION_MM => tables::PRECIPITATION_HEAVY,
        _ => tables::PRECIPITATION_SEVERE,
    }
}

#[must_use]
pub fn resolve_base_advisory(condition: Condition, risk_level: RiskLevel) -> &'static str {
    ADVISORY_TABLE
        .get(&(condition, risk_level))
        .copied()
        .unwrap_or(tables::BASE_ADVISORY_FALLBACK)
}

/// Escalate to the highest tier any single signal qualifies for
#[must_use]
pub fn derive_severity(risk_level: RiskLevel, wind_speed: f64, precipitation: f64) -> Severity {
    if risk_level == RiskLevel::High
        || wind_speed >= SEVERE_WIND_KMH
        || precipitation >= SEVERE_PRECIPITATION_MM
    {
        Severity::High
    } else if risk_level == RiskLevel::Moderate
        || wind_speed >= STRONG_WIND_KMH
        || precipitation >= HEAVY_PRECIPITATION_MM
    {
        Severity::Moderate
    } else {
        Severity::Low
    }
}

/// Resolve every table for one request and combine the results
#[instrument(level = "debug", skip_all, fields(activity = %request.activity))]
pub fn generate_advisory(request: &AdvisoryRequest) -> AdvisoryRecord {
    let condition = resolve_condition(request.temperature, request.humidity, request.wind_speed);
    let risk_level = resolve_risk(condition, &request.activity);
    let base_advisory = resolve_base_advisory(condition, risk_level);

    let severity = derive_severity(risk_level, request.wind_speed, request.precipitation);

    tracing::debug!(%condition, %risk_level, %severity, "advisory resolved");

    AdvisoryRecord {
        condition,
        risk_level,
        base_advisory: base_advisory.to_string(),
        wind_advisory: resolve_wind_advisory(request.wind_speed).to_string(),
        humidity_advisory: resolve_humidity_advisory(request.humidity).to_string(),
        precipitation_advisory: resolve_precipitation_advisory(request.precipitation).to_string(),
        severity,
        time_context: resolve_time_context(request.hour),
        season_context: resolve_season_context(request.month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        activity: &str,
        precipitation: f64,
    ) -> AdvisoryRequest {
        AdvisoryRequest {
            temperature,
            humidity,
            wind_speed,
            activity: Activity::from(activity),
            month: 1,
            hour: 12,
            precipitation,
        }
    }

    #[rstest]
    #[case(-40.0, Condition::Freezing)]
    #[case(-0.1, Condition::Freezing)]
    #[case(0.0, Condition::Cold)]
    #[case(9.9, Condition::Cold)]
    #[case(10.0, Condition::Cool)]
    #[case(20.0, Condition::Mild)]
    #[case(25.0, Condition::Warm)]
    #[case(30.0, Condition::Hot)]
    #[case(34.9, Condition::Hot)]
    #[case(35.0, Condition::VeryHot)]
    #[case(60.0, Condition::VeryHot)]
    fn test_condition_by_temperature(#[case] temperature: f64, #[case] expected: Condition) {
        assert_eq!(resolve_condition(temperature, 50.0, 10.0), expected);
    }

    #[test]
    fn test_condition_falls_back_to_normal_outside_humidity_and_wind_bounds() {
        assert_eq!(resolve_condition(15.0, 100.0, 10.0), Condition::Normal);
        assert_eq!(resolve_condition(15.0, -5.0, 10.0), Condition::Normal);
        assert_eq!(resolve_condition(15.0, 50.0, -1.0), Condition::Normal);
        assert_eq!(resolve_condition(f64::NAN, 50.0, 10.0), Condition::Normal);
    }

    #[test]
    fn test_condition_label_lies_within_its_band() {
        let mut temperature = -30.0;
        while temperature < 50.0 {
            let condition = resolve_condition(temperature, 40.0, 5.0);
            let rule = CONDITION_RULES
                .iter()
                .find(|rule| rule.condition == condition)
                .expect("condition comes from the table");
            assert!(rule.temperature.contains(temperature));
            temperature += 0.5;
        }
    }

    #[rstest]
    #[case(Condition::Freezing, "outdoor_sports", RiskLevel::High)]
    #[case(Condition::Freezing, "daily_commute", RiskLevel::Moderate)]
    #[case(Condition::Cold, "travel", RiskLevel::Moderate)]
    #[case(Condition::Hot, "outdoor_sports", RiskLevel::Moderate)]
    #[case(Condition::Hot, "travel", RiskLevel::Low)]
    #[case(Condition::VeryHot, "daily_commute", RiskLevel::Moderate)]
    #[case(Condition::Freezing, "skydiving", RiskLevel::Low)]
    #[case(Condition::Normal, "outdoor_sports", RiskLevel::Low)]
    fn test_risk_lookup(
        #[case] condition: Condition,
        #[case] activity: &str,
        #[case] expected: RiskLevel,
    ) {
        assert_eq!(resolve_risk(condition, &Activity::from(activity)), expected);
    }

    #[rstest]
    #[case(0.0, "Low wind conditions")]
    #[case(15.0, "Moderate wind. Secure loose objects outdoors.")]
    #[case(44.9, "Strong wind advisory. Be cautious with high-profile vehicles.")]
    #[case(120.0, "Dangerous wind conditions. Avoid unnecessary travel.")]
    #[case(-3.0, "Extreme wind conditions. Seek shelter immediately.")]
    fn test_wind_advisory(#[case] wind_speed: f64, #[case] expected: &str) {
        assert_eq!(resolve_wind_advisory(wind_speed), expected);
    }

    #[rstest]
    #[case(10.0, "Very dry conditions. Stay hydrated and moisturize skin.")]
    #[case(30.0, "Comfortable humidity levels.")]
    #[case(69.9, "Moderately humid. May feel warmer than actual temperature.")]
    #[case(75.0, "High humidity. Heat stress possible in warm temperatures.")]
    #[case(100.0, "Extreme humidity levels. Use caution.")]
    #[case(-1.0, "Extreme humidity levels. Use caution.")]
    fn test_humidity_advisory(#[case] humidity: f64, #[case] expected: &str) {
        assert_eq!(resolve_humidity_advisory(humidity), expected);
    }

    #[rstest]
    #[case(0, TimeContext::EarlyMorning)]
    #[case(5, TimeContext::EarlyMorning)]
    #[case(6, TimeContext::Morning)]
    #[case(12, TimeContext::Midday)]
    #[case(17, TimeContext::Afternoon)]
    #[case(21, TimeContext::Evening)]
    #[case(23, TimeContext::Night)]
    #[case(25, TimeContext::Night)]
    #[case(-2, TimeContext::Night)]
    fn test_time_context(#[case] hour: i32, #[case] expected: TimeContext) {
        assert_eq!(resolve_time_context(hour), expected);
    }

    #[rstest]
    #[case(1, Season::Winter)]
    #[case(3, Season::Spring)]
    #[case(7, Season::Summer)]
    #[case(10, Season::Fall)]
    #[case(12, Season::Winter)]
    #[case(0, Season::Unknown)]
    #[case(13, Season::Unknown)]
    #[case(-1, Season::Unknown)]
    fn test_season_context(#[case] month: i32, #[case] expected: Season) {
        assert_eq!(resolve_season_context(month), expected);
    }

    #[rstest]
    #[case(0.0, tables::NO_PRECIPITATION)]
    #[case(-1.0, tables::NO_PRECIPITATION)]
    #[case(0.1, tables::PRECIPITATION_LIGHT)]
    #[case(2.5, tables::PRECIPITATION_MODERATE)]
    #[case(7.5, tables::PRECIPITATION_HEAVY)]
    #[case(14.9, tables::PRECIPITATION_HEAVY)]
    #[case(15.0, tables::PRECIPITATION_SEVERE)]
    fn test_precipitation_advisory(#[case] precipitation: f64, #[case] expected: &str) {
        assert_eq!(resolve_precipitation_advisory(precipitation), expected);
    }

    #[test]
    fn test_unlisted_activity_is_low_risk_for_every_condition() {
        let activity = Activity::Other("rock_climbing".to_string());
        for rule in CONDITION_RULES {
            assert_eq!(resolve_risk(rule.condition, &activity), RiskLevel::Low);
        }
        assert_eq!(resolve_risk(Condition::Normal, &activity), RiskLevel::Low);
    }

    #[test]
    fn test_base_advisory_fallback_for_normal_condition() {
        assert_eq!(
            resolve_base_advisory(Condition::Normal, RiskLevel::Low),
            "No specific advisory for these conditions."
        );
        assert_eq!(
            resolve_base_advisory(Condition::Cold, RiskLevel::Low),
            "Light jacket or sweater recommended."
        );
    }

    #[test]
    fn test_severity_escalates_on_any_single_signal() {
        assert_eq!(derive_severity(RiskLevel::Low, 10.0, 0.0), Severity::Low);
        assert_eq!(derive_severity(RiskLevel::High, 0.0, 0.0), Severity::High);
        assert_eq!(derive_severity(RiskLevel::Low, 45.0, 0.0), Severity::High);
        assert_eq!(derive_severity(RiskLevel::Low, 0.0, 15.0), Severity::High);
        assert_eq!(derive_severity(RiskLevel::Moderate, 0.0, 0.0), Severity::Moderate);
        assert_eq!(derive_severity(RiskLevel::Low, 30.0, 0.0), Severity::Moderate);
        assert_eq!(derive_severity(RiskLevel::Low, 0.0, 7.5), Severity::Moderate);
        assert_eq!(derive_severity(RiskLevel::Moderate, 50.0, 0.0), Severity::High);
    }

    #[test]
    fn test_severity_is_monotonic_in_wind_and_precipitation() {
        let mut previous = Severity::Low;
        for step in 0..120 {
            let severity = derive_severity(RiskLevel::Low, f64::from(step), 0.0);
            assert!(severity >= previous);
            previous = severity;
        }
        assert_eq!(previous, Severity::High);

        let mut previous = Severity::Low;
        for step in 0..40 {
            let severity = derive_severity(RiskLevel::Low, 0.0, f64::from(step) * 0.5);
            assert!(severity >= previous);
            previous = severity;
        }
        assert_eq!(previous, Severity::High);
    }

    #[test]
    fn test_cold_windy_travel_day() {
        let record = generate_advisory(&request(5.0, 60.0, 35.0, "travel", 5.0));

        assert_eq!(record.condition, Condition::Cold);
        assert_eq!(record.risk_level, RiskLevel::Moderate);
        assert_eq!(record.severity, Severity::Moderate);
        assert_eq!(record.precipitation_advisory, tables::PRECIPITATION_MODERATE);
        assert_eq!(
            record.wind_advisory,
            "Strong wind advisory. Be cautious with high-profile vehicles."
        );
    }

    #[test]
    fn test_hot_humid_sports_day() {
        let record = generate_advisory(&request(33.0, 75.0, 10.0, "outdoor_sports", 0.0));

        assert_eq!(record.condition, Condition::Hot);
        assert_eq!(record.risk_level, RiskLevel::Moderate);
        assert_eq!(record.severity, Severity::Moderate);
        assert_eq!(record.precipitation_advisory, "No precipitation expected.");
        assert_eq!(
            record.base_advisory,
            "Stay hydrated and use sun protection. Take breaks in shade when outdoors."
        );
    }

    #[test]
    fn test_freezing_storm() {
        let record = generate_advisory(&request(-5.0, 50.0, 50.0, "outdoor_sports", 20.0));

        assert_eq!(record.condition, Condition::Freezing);
        assert_eq!(record.risk_level, RiskLevel::High);
        assert_eq!(record.severity, Severity::High);
        assert_eq!(record.precipitation_advisory, tables::PRECIPITATION_SEVERE);
    }

    #[test]
    fn test_context_fields_come_from_month_and_hour() {
        let mut req = request(22.0, 40.0, 5.0, "daily_commute", 0.0);
        req.month = 8;
        req.hour = 19;

        let record = generate_advisory(&req);

        assert_eq!(record.season_context, Season::Summer);
        assert_eq!(record.time_context, TimeContext::Evening);
        assert_eq!(record.severity, Severity::Low);
    }
}
