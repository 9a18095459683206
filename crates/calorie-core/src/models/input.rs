// ABOUTME: Calculation input models: biometrics, activity level, and goal
// ABOUTME: Enum wire values are snake_case; unknown values are preserved verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::wire::serialize_number;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male gender (+5 kcal constant)
    Male,
    /// Female gender (-161 kcal constant)
    Female,
}

impl Gender {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "unknown gender '{other}' (expected male or female)"
            ))),
        }
    }
}

/// Activity level for TDEE calculation
///
/// Values outside the known set are kept in `Other` so a stored record
/// round-trips unchanged; lookups treat them with the sedentary defaults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise or physical job
    ExtremelyActive,
    /// Unrecognized wire value
    Other(String),
}

impl ActivityLevel {
    /// All recognized activity levels, lowest first
    pub const KNOWN: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];

    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtremelyActive => "extremely_active",
            Self::Other(value) => value,
        }
    }

    /// Whether this is one of the recognized levels
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "sedentary" => Self::Sedentary,
            "lightly_active" => Self::LightlyActive,
            "moderately_active" => Self::ModeratelyActive,
            "very_active" => Self::VeryActive,
            "extremely_active" => Self::ExtremelyActive,
            _ => Self::Other(value),
        }
    }
}

impl From<ActivityLevel> for String {
    fn from(level: ActivityLevel) -> Self {
        match level {
            ActivityLevel::Other(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing for user input; accepts `-` in place of `_`
impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = Self::from(s.trim().to_lowercase().replace('-', "_"));
        if level.is_known() {
            Ok(level)
        } else {
            Err(AppError::invalid_input(format!(
                "unknown activity level '{s}' (expected one of: {})",
                Self::KNOWN.map(|l| l.as_str().to_owned()).join(", ")
            )))
        }
    }
}

/// Weight goal driving the calorie modifier and macro split
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    /// Caloric deficit
    LoseWeight,
    /// Caloric balance
    MaintainWeight,
    /// Caloric surplus
    GainWeight,
    /// Unrecognized wire value
    Other(String),
}

impl Goal {
    /// All recognized goals
    pub const KNOWN: [Self; 3] = [Self::LoseWeight, Self::MaintainWeight, Self::GainWeight];

    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::MaintainWeight => "maintain_weight",
            Self::GainWeight => "gain_weight",
            Self::Other(value) => value,
        }
    }

    /// Whether this is one of the recognized goals
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        match value.as_str() {
            "lose_weight" => Self::LoseWeight,
            "maintain_weight" => Self::MaintainWeight,
            "gain_weight" => Self::GainWeight,
            _ => Self::Other(value),
        }
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        match goal {
            Goal::Other(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing for user input; accepts `-` in place of `_`
impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let goal = Self::from(s.trim().to_lowercase().replace('-', "_"));
        if goal.is_known() {
            Ok(goal)
        } else {
            Err(AppError::invalid_input(format!(
                "unknown goal '{s}' (expected one of: {})",
                Self::KNOWN.map(|g| g.as_str().to_owned()).join(", ")
            )))
        }
    }
}

/// Biometric input collected on the first calculator step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicData {
    /// Gender for the BMR constant
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    #[serde(rename = "height", serialize_with = "serialize_number")]
    pub height_cm: f64,
    /// Body weight in kilograms
    #[serde(rename = "weight", serialize_with = "serialize_number")]
    pub weight_kg: f64,
}

/// Activity level and goal collected on the second calculator step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityData {
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub goal: Goal,
}

/// Complete input to a calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieCalculationData {
    /// Biometric input
    #[serde(flatten)]
    pub basic: BasicData,
    /// Activity level and goal
    #[serde(flatten)]
    pub activity: ActivityData,
}

impl CalorieCalculationData {
    /// Combine both calculator steps into one input
    #[must_use]
    pub const fn new(basic: BasicData, activity: ActivityData) -> Self {
        Self { basic, activity }
    }

    /// Gender
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.basic.gender
    }

    /// Age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.basic.age
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.basic.height_cm
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.basic.weight_kg
    }

    /// Activity level
    #[must_use]
    pub const fn activity_level(&self) -> &ActivityLevel {
        &self.activity.activity_level
    }

    /// Goal
    #[must_use]
    pub const fn goal(&self) -> &Goal {
        &self.activity.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CalorieCalculationData {
        CalorieCalculationData::new(
            BasicData {
                gender: Gender::Male,
                age: 30,
                height_cm: 180.0,
                weight_kg: 80.0,
            },
            ActivityData {
                activity_level: ActivityLevel::ModeratelyActive,
                goal: Goal::MaintainWeight,
            },
        )
    }

    #[test]
    fn test_input_wire_format() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"gender":"male","age":30,"height":180,"weight":80,"activityLevel":"moderately_active","goal":"maintain_weight"}"#
        );
    }

    #[test]
    fn test_unknown_enum_values_preserved() {
        let json = r#"{"gender":"female","age":41,"height":165.5,"weight":62,"activityLevel":"couch","goal":"bulk"}"#;
        let data: CalorieCalculationData = serde_json::from_str(json).unwrap();
        assert_eq!(
            data.activity_level(),
            &ActivityLevel::Other("couch".to_owned())
        );
        assert_eq!(data.goal(), &Goal::Other("bulk".to_owned()));
        assert_eq!(serde_json::to_string(&data).unwrap(), json);
    }

    #[test]
    fn test_strict_parsing_rejects_unknown() {
        assert_eq!(
            "very-active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
        assert_eq!("Gain_Weight".parse::<Goal>().unwrap(), Goal::GainWeight);
        assert!("couch".parse::<ActivityLevel>().is_err());
        assert!("bulk".parse::<Goal>().is_err());
        assert_eq!("F".parse::<Gender>().unwrap(), Gender::Female);
        assert!("x".parse::<Gender>().is_err());
    }
}
