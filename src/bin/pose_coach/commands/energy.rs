// ABOUTME: Energy commands for pose-coach
// ABOUTME: Computes BMI/BMR/TDEE for a body profile and MET-based activity calories

use anyhow::Result;
use pose_coach::config::CoachConfig;
use pose_coach::intelligence::{kcal_from_mets, ActivityLevel, BodyProfile, Gender, MetActivity};
use serde_json::json;

use crate::helpers::display::{display_energy, print_json};

/// BMI, BMR, and TDEE for a profile
pub fn profile(
    gender: Gender,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    activity_level: ActivityLevel,
    config: &CoachConfig,
    json: bool,
) -> Result<()> {
    let profile = BodyProfile {
        gender,
        age,
        height_cm,
        weight_kg,
        activity_level,
    };
    let snapshot = profile.snapshot(&config.energy)?;

    if json {
        print_json(&snapshot)
    } else {
        display_energy(&snapshot);
        Ok(())
    }
}

/// Calories for one activity
pub fn kcal(activity: MetActivity, minutes: f64, weight_kg: f64, json: bool) -> Result<()> {
    let kcal = kcal_from_mets(activity.met(), weight_kg, minutes);

    if json {
        print_json(&json!({
            "activity": activity,
            "met": activity.met(),
            "minutes": minutes,
            "weight_kg": weight_kg,
            "kcal": kcal,
        }))
    } else {
        println!(
            "{} (MET {}) for {minutes} min at {weight_kg} kg: {} kcal",
            activity.name(),
            activity.met(),
            kcal.trunc()
        );
        Ok(())
    }
}
