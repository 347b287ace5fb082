use serde::{Deserialize, Serialize};

/// A resolved nutrition estimate for one dish or dish combination.
///
/// Every field is always populated; downstream renderers display records
/// verbatim. Records are built fresh per resolution and not mutated after
/// being handed to a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionRecord {
    pub dish_name: String,

    /// Decomposed parts of a combination dish; single-element otherwise.
    /// Never empty.
    pub dish_components: Vec<String>,

    pub calories: f64,

    pub protein: f64,

    pub fat: f64,

    pub carbs: f64,

    pub fiber_g: f64,

    pub sugar_g: f64,

    pub sodium_mg: f64,

    /// Heuristic 0-100 score rewarding macro balance and fiber, penalizing
    /// sugar and sodium density.
    pub health_score: i32,

    /// Total resolved weight in grams.
    pub quantity_g: f64,

    pub serving_size: f64,

    pub serving_unit: String,

    /// Human-readable customary portion, independent of the requested size.
    pub recommended_serving: String,
}

impl NutritionRecord {
    /// Scale the additive nutrient fields by `factor`.
    ///
    /// Health score, weight, serving fields, and descriptive fields are left
    /// untouched.
    pub fn scale(&mut self, factor: f64) {
        self.calories *= factor;
        self.protein *= factor;
        self.fat *= factor;
        self.carbs *= factor;
        self.fiber_g *= factor;
        self.sugar_g *= factor;
        self.sodium_mg *= factor;
    }

    /// Whether this record was resolved as a combination of sub-dishes.
    pub fn is_combination(&self) -> bool {
        self.dish_components.len() > 1
    }
}
