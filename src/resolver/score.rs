use crate::models::NutritionRecord;
use crate::resolver::constants::*;

/// Derive a health score from a record's macro totals.
///
/// Rewards a calorie split near 25% protein / 50% carbs / 25% fat and high
/// fiber density; penalizes sugar and sodium density. Formula-derived scores
/// clamp to [SCORE_MIN, SCORE_MAX]. Zero total calories returns
/// DEFAULT_HEALTH_SCORE without attempting the formula.
pub fn macro_balance_score(record: &NutritionRecord) -> i32 {
    let calories = record.calories;
    if calories <= 0.0 {
        return DEFAULT_HEALTH_SCORE;
    }

    let protein_share = record.protein * PROTEIN_CAL_PER_G / calories;
    let carb_share = record.carbs * CARB_CAL_PER_G / calories;
    let fat_share = record.fat * FAT_CAL_PER_G / calories;

    let deviation = (protein_share - IDEAL_PROTEIN_SHARE).abs()
        + (carb_share - IDEAL_CARB_SHARE).abs()
        + (fat_share - IDEAL_FAT_SHARE).abs();
    let balance = 100.0 - deviation * 100.0;

    let fiber_density = record.fiber_g / calories * 1000.0;
    let sugar_density = record.sugar_g / calories * 1000.0;
    let sodium_density = record.sodium_mg / calories;

    let raw = balance * BALANCE_WEIGHT + fiber_density * FIBER_WEIGHT
        - sugar_density * SUGAR_WEIGHT
        - sodium_density * SODIUM_WEIGHT
        + SCORE_BASE;

    (raw.round() as i32).clamp(SCORE_MIN, SCORE_MAX)
}
