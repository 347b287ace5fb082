use serde::{Deserialize, Serialize};

/// A food database entry: a partial nutrition tuple for one canonical dish.
///
/// Values are per customary serving. Micronutrient fields default to zero so
/// partial entries stay loadable; weight and serving description are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,

    pub calories: f64,

    pub protein: f64,

    pub fat: f64,

    pub carbs: f64,

    #[serde(default)]
    pub fiber_g: f64,

    #[serde(default)]
    pub sugar_g: f64,

    #[serde(default)]
    pub sodium_mg: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_g: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_serving: Option<String>,
}

impl FoodEntry {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Basic validation: non-empty name and non-negative values.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.calories >= 0.0
            && self.protein >= 0.0
            && self.fat >= 0.0
            && self.carbs >= 0.0
            && self.fiber_g >= 0.0
            && self.sugar_g >= 0.0
            && self.sodium_mg >= 0.0
            && self.quantity_g.map_or(true, |q| q > 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} cal, P:{} F:{} C:{}",
            self.name, self.calories, self.protein, self.fat, self.carbs
        )
    }
}

impl PartialEq for FoodEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodEntry {}
