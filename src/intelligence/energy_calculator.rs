// ABOUTME: Energy expenditure algorithms: BMI, Mifflin-St Jeor BMR, TDEE, and MET-based activity calories
// ABOUTME: Includes a reference MET table for common training activities and a body-profile snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Ainsworth, B.E., et al. (2011). Compendium of Physical Activities.
//!   *Medicine & Science in Sports & Exercise*, 43(8), 1575-1581.
//!   <https://doi.org/10.1249/MSS.0b013e31821ece12>

use crate::config::{ActivityFactorsConfig, BmrConfig, EnergyConfig};
use pose_coach_core::constants::energy::{MET_KCAL_DIVISOR, MET_OXYGEN_ML_PER_KG_MIN};
use pose_coach_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male gender (higher BMR)
    Male,
    /// Female gender (lower BMR)
    Female,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    #[default]
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6+ days/week)
    VeryActive,
    /// Extra active (sport or physical labor)
    ExtraActive,
}

impl ActivityLevel {
    /// Multiplier applied to BMR
    #[must_use]
    pub const fn factor(self, config: &ActivityFactorsConfig) -> f64 {
        match self {
            Self::Sedentary => config.sedentary,
            Self::LightlyActive => config.lightly_active,
            Self::ModeratelyActive => config.moderately_active,
            Self::VeryActive => config.very_active,
            Self::ExtraActive => config.extra_active,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly-active" | "light" => Ok(Self::LightlyActive),
            "moderately-active" | "moderate" => Ok(Self::ModeratelyActive),
            "very-active" | "active" => Ok(Self::VeryActive),
            "extra-active" | "extra" => Ok(Self::ExtraActive),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level: '{other}'. Valid options: sedentary, lightly-active, \
                 moderately-active, very-active, extra-active"
            ))),
        }
    }
}

/// Reference activities with a representative MET value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetActivity {
    /// Brisk walking
    BriskWalk,
    /// Jogging
    Jog,
    /// Fast running
    FastRun,
    /// Cycling, moderate effort
    Cycling,
    /// Freestyle swimming, moderate effort
    Swimming,
    /// Weighted squats
    Squat,
    /// Bench press
    BenchPress,
    /// Deadlift
    Deadlift,
    /// Yoga or stretching
    Yoga,
    /// Recreational soccer
    Soccer,
    /// Pickup basketball
    Basketball,
}

impl MetActivity {
    /// Every tabulated activity
    pub const ALL: [Self; 11] = [
        Self::BriskWalk,
        Self::Jog,
        Self::FastRun,
        Self::Cycling,
        Self::Swimming,
        Self::Squat,
        Self::BenchPress,
        Self::Deadlift,
        Self::Yoga,
        Self::Soccer,
        Self::Basketball,
    ];

    /// Metabolic equivalent of the activity
    #[must_use]
    pub const fn met(self) -> f64 {
        match self {
            Self::BriskWalk => 4.3,
            Self::Jog | Self::Soccer => 7.0,
            Self::FastRun => 10.0,
            Self::Cycling => 7.5,
            Self::Swimming | Self::Basketball => 8.0,
            Self::Squat | Self::BenchPress | Self::Deadlift => 6.0,
            Self::Yoga => 2.5,
        }
    }

    /// Kebab-case name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BriskWalk => "brisk-walk",
            Self::Jog => "jog",
            Self::FastRun => "fast-run",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
            Self::Squat => "squat",
            Self::BenchPress => "bench-press",
            Self::Deadlift => "deadlift",
            Self::Yoga => "yoga",
            Self::Soccer => "soccer",
            Self::Basketball => "basketball",
        }
    }
}

impl FromStr for MetActivity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|activity| activity.name() == normalized)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|a| a.name()).collect();
                AppError::invalid_input(format!(
                    "Unknown activity: '{s}'. Valid options: {}",
                    valid.join(", ")
                ))
            })
    }
}

/// Body Mass Index: weight (kg) / height (m)²
///
/// A zero height yields 0 rather than infinity.
#[must_use]
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    if height_cm == 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// # Errors
///
/// Returns an error if input values are out of valid ranges
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    if weight_kg.is_nan() || weight_kg <= 0.0 || weight_kg > 300.0 {
        return Err(AppError::invalid_input(
            "Weight must be between 0 and 300 kg",
        ));
    }
    if height_cm.is_nan() || height_cm <= 0.0 || height_cm > 300.0 {
        return Err(AppError::invalid_input(
            "Height must be between 0 and 300 cm",
        ));
    }
    if !(10..=120).contains(&age) {
        return Err(AppError::invalid_input(
            "Age must be between 10 and 120 years (Mifflin-St Jeor formula validated for ages 10+)",
        ));
    }

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    Ok(weight_component + height_component + age_component + gender_constant)
}

/// Calculate Total Daily Energy Expenditure: BMR x activity factor
///
/// # Errors
///
/// Returns an error if BMR is not positive
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if bmr.is_nan() || bmr <= 0.0 {
        return Err(AppError::invalid_input("BMR must be positive"));
    }
    Ok(bmr * activity_level.factor(config))
}

/// Calories burned: MET x 3.5 x `weight_kg` / 200 x minutes
#[must_use]
pub fn kcal_from_mets(met: f64, weight_kg: f64, minutes: f64) -> f64 {
    met * MET_OXYGEN_ML_PER_KG_MIN * weight_kg / MET_KCAL_DIVISOR * minutes
}

/// Inputs describing one person
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyProfile {
    /// Gender
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Habitual activity level
    pub activity_level: ActivityLevel,
}

/// BMI, BMR, and TDEE for a profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergySnapshot {
    /// Body Mass Index
    pub bmi: f64,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
}

impl BodyProfile {
    /// Compute all energy figures for this profile
    ///
    /// # Errors
    ///
    /// Returns an error if any measurement is outside the BMR formula's valid range
    pub fn snapshot(&self, config: &EnergyConfig) -> AppResult<EnergySnapshot> {
        let bmr = calculate_mifflin_st_jeor(
            self.weight_kg,
            self.height_cm,
            self.age,
            self.gender,
            &config.bmr,
        )?;
        let tdee = calculate_tdee(bmr, self.activity_level, &config.activity_factors)?;
        Ok(EnergySnapshot {
            bmi: bmi(self.height_cm, self.weight_kg),
            bmr,
            tdee,
        })
    }

    /// Calories this person burns doing `activity` for `minutes`
    #[must_use]
    pub fn activity_kcal(&self, activity: MetActivity, minutes: f64) -> f64 {
        kcal_from_mets(activity.met(), self.weight_kg, minutes)
    }
}
