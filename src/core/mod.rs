pub mod evaluate;
pub mod units;

pub use evaluate::{classify, evaluate};
pub use units::normalize;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Height unit accepted by the normalizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeightUnit {
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "ft")]
    Feet,
}

impl HeightUnit {
    /// Parse a unit name as it appears in configuration files and prompts.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cm" | "cms" | "centimeters" => Some(Self::Centimeters),
            "m" | "meters" => Some(Self::Meters),
            "ft" | "feet" => Some(Self::Feet),
            _ => None,
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HeightUnit::Centimeters => "cm",
            HeightUnit::Meters => "m",
            HeightUnit::Feet => "ft",
        };
        write!(f, "{s}")
    }
}

/// A single weight/height reading, created per calculation request.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Measurement {
    pub weight_kg: f64,
    pub height_raw: f64,
    pub unit: HeightUnit,
}

/// Ordinal BMI classification bands, lowest to highest.
///
/// Each range is closed on its lower bound; see [`classify`] for the
/// thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    ExtremeUnderweight, // value < 16
    Underweight,        // 16 <= value < 18.5
    Healthy,            // 18.5 <= value < 25
    Overweight,         // 25 <= value < 30
    ExtremeOverweight,  // value >= 30
}

impl Band {
    /// Display urgency for this band.
    pub fn severity(self) -> Severity {
        match self {
            Band::ExtremeUnderweight | Band::ExtremeOverweight => Severity::Error,
            Band::Underweight | Band::Overweight => Severity::Warning,
            Band::Healthy => Severity::Info,
        }
    }

    /// User-facing interpretation line.
    pub fn message(self) -> &'static str {
        match self {
            Band::ExtremeUnderweight => "You are Extremely Underweight",
            Band::Underweight => "You are Underweight",
            Band::Healthy => "You are Healthy",
            Band::Overweight => "You are Overweight",
            Band::ExtremeOverweight => "You are Extremely Overweight",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Band::ExtremeUnderweight => "Extremely Underweight",
            Band::Underweight => "Underweight",
            Band::Healthy => "Healthy",
            Band::Overweight => "Overweight",
            Band::ExtremeOverweight => "Extremely Overweight",
        };
        write!(f, "{s}")
    }
}

/// Three-level display urgency derived from [`Band`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// Evaluated BMI value with its classification.
///
/// `band` and `severity` are a pure function of `value`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BmiResult {
    pub value: f64,
    pub band: Band,
    pub severity: Severity,
}

/// Everything the output writers need to render one calculation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BmiReport {
    pub measurement: Measurement,
    pub height_meters: f64,
    pub result: BmiResult,
    pub timestamp: DateTime<Utc>,
}

impl BmiReport {
    pub fn new(measurement: Measurement, height_meters: f64, result: BmiResult) -> Self {
        Self {
            measurement,
            height_meters,
            result,
            timestamp: Utc::now(),
        }
    }
}
