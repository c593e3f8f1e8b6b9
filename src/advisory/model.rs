//! Advisory domain types
//!
//! Closed label sets used by the rule tables plus the request and record
//! structures that flow in and out of the resolver.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse weather classification derived from the condition table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Freezing,
    Cold,
    Cool,
    Mild,
    Warm,
    Hot,
    #[serde(rename = "very hot")]
    VeryHot,
    /// Returned when no condition band matches
    Normal,
}

impl Condition {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Freezing => "freezing",
            Condition::Cold => "cold",
            Condition::Cool => "cool",
            Condition::Mild => "mild",
            Condition::Warm => "warm",
            Condition::Hot => "hot",
            Condition::VeryHot => "very hot",
            Condition::Normal => "normal",
        }
    }
}

/// What the caller is planning to do outdoors
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Activity {
    OutdoorSports,
    Travel,
    #[default]
    DailyCommute,
    /// Any activity the risk table has no entries for
    Other(String),
}

impl Activity {
    /// Activities with dedicated rows in the risk table
    pub const KNOWN: [Activity; 3] = [
        Activity::OutdoorSports,
        Activity::Travel,
        Activity::DailyCommute,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Activity::OutdoorSports => "outdoor_sports",
            Activity::Travel => "travel",
            Activity::DailyCommute => "daily_commute",
            Activity::Other(name) => name,
        }
    }
}

impl From<&str> for Activity {
    fn from(value: &str) -> Self {
        match value {
            "outdoor_sports" => Activity::OutdoorSports,
            "travel" => Activity::Travel,
            "daily_commute" => Activity::DailyCommute,
            other => Activity::Other(other.to_string()),
        }
    }
}

/// Activity-adjusted hazard tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

/// Final escalated tier combining risk, wind and precipitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Moderate, Severity::High];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
    Unknown,
}

impl Season {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Unknown => "unknown",
        }
    }
}

/// Time-of-day bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeContext {
    EarlyMorning,
    Morning,
    Midday,
    Afternoon,
    Evening,
    Night,
}

impl TimeContext {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeContext::EarlyMorning => "early_morning",
            TimeContext::Morning => "morning",
            TimeContext::Midday => "midday",
            TimeContext::Afternoon => "afternoon",
            TimeContext::Evening => "evening",
            TimeContext::Night => "night",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(Condition, Activity, RiskLevel, Severity, Season, TimeContext);

/// Fully resolved advisory inputs
///
/// Month and hour are mandatory here: filling them from the wall clock is
/// the job of whoever builds the request, not of the resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisoryRequest {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    pub activity: Activity,
    /// Calendar month (1-12)
    pub month: i32,
    /// Hour of day (0-23)
    pub hour: i32,
    /// Precipitation amount in mm
    pub precipitation: f64,
}

/// Advisory produced for a single request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryRecord {
    pub condition: Condition,
    pub risk_level: RiskLevel,
    pub base_advisory: String,
    pub wind_advisory: String,
    pub humidity_advisory: String,
    pub precipitation_advisory: String,
    pub severity: Severity,
    pub time_context: TimeContext,
    pub season_context: Season,
}
