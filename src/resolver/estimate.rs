use rand::Rng;

use crate::error::{NutriError, Result};
use crate::models::NutritionRecord;
use crate::resolver::constants::*;

/// Coarse dish classification driving the estimation profile choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishClass {
    Dessert,
    Vegetarian,
    NonVegetarian,
}

/// Classify a dish by keyword presence in its lowercased name.
///
/// Dessert keywords take priority over the vegetarian/non-vegetarian split.
pub fn classify(dish_name: &str) -> DishClass {
    let lower = dish_name.to_lowercase();
    if DESSERT_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return DishClass::Dessert;
    }
    if NON_VEG_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return DishClass::NonVegetarian;
    }
    DishClass::Vegetarian
}

/// Half-open integer range a nutrient value is drawn from.
#[derive(Debug, Clone, Copy)]
pub struct ValueRange {
    pub lo: u32,
    pub hi: u32,
}

impl ValueRange {
    pub const fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    /// Draw a uniform integer from [lo, hi) as a float.
    ///
    /// An empty range is a configuration error, not a panic.
    fn sample<R: Rng>(&self, rng: &mut R, field: &'static str) -> Result<f64> {
        if self.lo >= self.hi {
            return Err(NutriError::EmptyProfileRange(field));
        }
        Ok(f64::from(rng.gen_range(self.lo..self.hi)))
    }

    /// Whether a value could have been drawn from this range.
    pub fn contains(&self, value: f64) -> bool {
        value >= f64::from(self.lo) && value < f64::from(self.hi)
    }
}

/// Per-class value ranges for placeholder nutrition data, per 100 g.
#[derive(Debug, Clone)]
pub struct EstimationProfile {
    pub calories: ValueRange,
    pub protein: ValueRange,
    pub fat: ValueRange,
    pub carbs: ValueRange,
    pub fiber_g: ValueRange,
    pub sugar_g: ValueRange,
    pub sodium_mg: ValueRange,
    pub health_score: ValueRange,
    pub recommended_serving: &'static str,
}

/// The three built-in profiles.
#[derive(Debug, Clone)]
pub struct EstimationProfiles {
    pub dessert: EstimationProfile,
    pub vegetarian: EstimationProfile,
    pub non_vegetarian: EstimationProfile,
}

impl EstimationProfiles {
    pub fn for_class(&self, class: DishClass) -> &EstimationProfile {
        match class {
            DishClass::Dessert => &self.dessert,
            DishClass::Vegetarian => &self.vegetarian,
            DishClass::NonVegetarian => &self.non_vegetarian,
        }
    }
}

impl Default for EstimationProfiles {
    fn default() -> Self {
        Self {
            dessert: EstimationProfile {
                calories: ValueRange::new(150, 250),
                protein: ValueRange::new(1, 4),
                fat: ValueRange::new(5, 13),
                carbs: ValueRange::new(20, 35),
                fiber_g: ValueRange::new(0, 2),
                sugar_g: ValueRange::new(15, 25),
                sodium_mg: ValueRange::new(30, 130),
                health_score: ValueRange::new(20, 50),
                recommended_serving: "40-50g (1 piece)",
            },
            vegetarian: EstimationProfile {
                calories: ValueRange::new(250, 400),
                protein: ValueRange::new(6, 14),
                fat: ValueRange::new(8, 20),
                carbs: ValueRange::new(30, 50),
                fiber_g: ValueRange::new(4, 10),
                sugar_g: ValueRange::new(2, 6),
                sodium_mg: ValueRange::new(300, 600),
                health_score: ValueRange::new(55, 80),
                recommended_serving: "200g (1 cup)",
            },
            non_vegetarian: EstimationProfile {
                calories: ValueRange::new(350, 500),
                protein: ValueRange::new(20, 35),
                fat: ValueRange::new(15, 30),
                carbs: ValueRange::new(20, 40),
                fiber_g: ValueRange::new(2, 6),
                sugar_g: ValueRange::new(2, 7),
                sodium_mg: ValueRange::new(400, 700),
                health_score: ValueRange::new(45, 70),
                recommended_serving: "200g (1 cup)",
            },
        }
    }
}

/// Generate a placeholder record for a dish with no database match.
///
/// Values are drawn per 100 g from the profile matching the dish class, then
/// scaled to the requested gram serving. Health score and descriptive fields
/// never scale. Non-deterministic unless the RNG is seeded.
pub fn estimate_record<R: Rng>(
    rng: &mut R,
    profiles: &EstimationProfiles,
    dish_name: &str,
    serving_size: f64,
    serving_unit: &str,
) -> Result<NutritionRecord> {
    let profile = profiles.for_class(classify(dish_name));

    let mut record = NutritionRecord {
        dish_name: dish_name.to_string(),
        dish_components: vec![dish_name.to_string()],
        calories: profile.calories.sample(rng, "calories")?,
        protein: profile.protein.sample(rng, "protein")?,
        fat: profile.fat.sample(rng, "fat")?,
        carbs: profile.carbs.sample(rng, "carbs")?,
        fiber_g: profile.fiber_g.sample(rng, "fiber_g")?,
        sugar_g: profile.sugar_g.sample(rng, "sugar_g")?,
        sodium_mg: profile.sodium_mg.sample(rng, "sodium_mg")?,
        health_score: profile.health_score.sample(rng, "health_score")? as i32,
        quantity_g: STANDARD_SERVING_G,
        serving_size,
        serving_unit: serving_unit.to_string(),
        recommended_serving: profile.recommended_serving.to_string(),
    };

    if serving_unit == "g" && serving_size != STANDARD_SERVING_G {
        record.scale(serving_size / STANDARD_SERVING_G);
        record.quantity_g = serving_size;
    }

    Ok(record)
}

/// The fixed generic record used when estimation itself fails.
pub fn generic_record(dish_name: &str, serving_size: f64, serving_unit: &str) -> NutritionRecord {
    let scale = if serving_unit == "g" {
        serving_size / STANDARD_SERVING_G
    } else {
        1.0
    };

    NutritionRecord {
        dish_name: dish_name.to_string(),
        dish_components: vec![dish_name.to_string()],
        calories: (GENERIC_CALORIES * scale).round(),
        protein: (GENERIC_PROTEIN * scale).round(),
        fat: (GENERIC_FAT * scale).round(),
        carbs: (GENERIC_CARBS * scale).round(),
        fiber_g: (GENERIC_FIBER_G * scale).round(),
        sugar_g: (GENERIC_SUGAR_G * scale).round(),
        sodium_mg: (GENERIC_SODIUM_MG * scale).round(),
        health_score: GENERIC_HEALTH_SCORE,
        quantity_g: serving_size,
        serving_size,
        serving_unit: serving_unit.to_string(),
        recommended_serving: GENERIC_SERVING.to_string(),
    }
}
