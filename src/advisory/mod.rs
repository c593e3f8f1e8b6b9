//! Advisory module
//!
//! This module provides the rule-based advisory engine:
//! - Static decision tables (range rules and label-pair rules)
//! - Resolution of each table with its fallback label
//! - Severity escalation across risk, wind and precipitation
//! - Plain-text summaries of the resulting record

pub mod model;
pub mod resolver;
pub mod summary;
pub mod tables;

pub use model::{
    Activity, AdvisoryRecord, AdvisoryRequest, Condition, RiskLevel, Season, Severity, TimeContext,
};
pub use resolver::{
    derive_severity, generate_advisory, resolve_base_advisory, resolve_condition,
    resolve_humidity_advisory, resolve_precipitation_advisory, resolve_risk,
    resolve_season_context, resolve_time_context, resolve_wind_advisory,
};
pub use summary::summarize;
