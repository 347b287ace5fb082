pub mod constants;
pub mod decompose;
pub mod estimate;
pub mod matching;
pub mod score;

pub use decompose::{decompose, default_known_combos, KnownCombo};
pub use estimate::{classify, DishClass, EstimationProfile, EstimationProfiles, ValueRange};
pub use matching::{lookup_component, match_single_dish, normalize_synonyms};
pub use score::macro_balance_score;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::database::FoodDatabase;
use crate::models::{FoodEntry, NutritionRecord};
use constants::*;
use estimate::{estimate_record, generic_record};

/// Resolves free-text dish names into nutrition records.
///
/// Resolution prefers database lookup and combination decomposition over
/// guessing, and never fails: when everything else misses it produces
/// placeholder data, and an error inside the placeholder path degrades to a
/// fixed generic record. The database, known-combination table, and
/// estimation profiles are injected so tests can substitute fixtures.
pub struct NutrientResolver {
    db: FoodDatabase,
    known_combos: Vec<KnownCombo>,
    profiles: EstimationProfiles,
    rng: StdRng,
}

impl NutrientResolver {
    /// Resolver over `db` with the built-in combination table and profiles,
    /// seeded from entropy.
    pub fn new(db: FoodDatabase) -> Self {
        Self::from_rng(db, StdRng::from_entropy())
    }

    /// Resolver with a fixed RNG seed, for reproducible estimation draws.
    pub fn with_seed(db: FoodDatabase, seed: u64) -> Self {
        Self::from_rng(db, StdRng::seed_from_u64(seed))
    }

    fn from_rng(db: FoodDatabase, rng: StdRng) -> Self {
        Self {
            db,
            known_combos: default_known_combos(),
            profiles: EstimationProfiles::default(),
            rng,
        }
    }

    /// Replace the known-combination table.
    pub fn with_known_combos(mut self, combos: Vec<KnownCombo>) -> Self {
        self.known_combos = combos;
        self
    }

    /// Replace the estimation profiles.
    pub fn with_profiles(mut self, profiles: EstimationProfiles) -> Self {
        self.profiles = profiles;
        self
    }

    pub fn database(&self) -> &FoodDatabase {
        &self.db
    }

    /// Resolve a dish name into a complete nutrition record.
    ///
    /// Steps, in order: decompose into components; sum database hits for
    /// combinations; direct/fuzzy single-dish lookup; heuristic estimation;
    /// fixed generic fallback. Every step degrades to the next, so the call
    /// always returns a fully-populated record.
    pub fn resolve(
        &mut self,
        dish_name: &str,
        serving_size: f64,
        serving_unit: &str,
    ) -> NutritionRecord {
        let components = decompose(dish_name, &self.known_combos);

        if components.len() > 1 {
            if let Some(record) =
                self.resolve_combination(dish_name, &components, serving_size, serving_unit)
            {
                return record;
            }
            // No component matched: the split is discarded and the combined
            // name goes through the single-dish path unchanged.
        }

        if let Some(entry) = match_single_dish(&self.db, dish_name) {
            return record_from_entry(entry, dish_name, serving_size, serving_unit);
        }

        estimate_record(
            &mut self.rng,
            &self.profiles,
            dish_name,
            serving_size,
            serving_unit,
        )
        .unwrap_or_else(|_| generic_record(dish_name, serving_size, serving_unit))
    }

    /// Sum the database hits for a decomposed combination.
    ///
    /// Components that miss the database are skipped silently; `None` means
    /// no component hit at all.
    fn resolve_combination(
        &self,
        dish_name: &str,
        components: &[String],
        serving_size: f64,
        serving_unit: &str,
    ) -> Option<NutritionRecord> {
        let mut record = NutritionRecord {
            dish_name: dish_name.to_string(),
            dish_components: components.to_vec(),
            calories: 0.0,
            protein: 0.0,
            fat: 0.0,
            carbs: 0.0,
            fiber_g: 0.0,
            sugar_g: 0.0,
            sodium_mg: 0.0,
            health_score: DEFAULT_HEALTH_SCORE,
            quantity_g: 0.0,
            serving_size,
            serving_unit: serving_unit.to_string(),
            recommended_serving: COMBINATION_SERVING.to_string(),
        };

        let mut found = 0;
        for component in components {
            let Some(entry) = lookup_component(&self.db, component) else {
                continue;
            };
            found += 1;
            record.calories += entry.calories;
            record.protein += entry.protein;
            record.fat += entry.fat;
            record.carbs += entry.carbs;
            record.fiber_g += entry.fiber_g;
            record.sugar_g += entry.sugar_g;
            record.sodium_mg += entry.sodium_mg;
            record.quantity_g += entry.quantity_g.unwrap_or(DEFAULT_COMPONENT_WEIGHT_G);
        }

        if found == 0 {
            return None;
        }

        record.health_score = macro_balance_score(&record);
        Some(record)
    }
}

/// Build a record from a direct database match, no summation.
fn record_from_entry(
    entry: &FoodEntry,
    dish_name: &str,
    serving_size: f64,
    serving_unit: &str,
) -> NutritionRecord {
    let mut record = NutritionRecord {
        dish_name: dish_name.to_string(),
        dish_components: vec![dish_name.to_string()],
        calories: entry.calories,
        protein: entry.protein,
        fat: entry.fat,
        carbs: entry.carbs,
        fiber_g: entry.fiber_g,
        sugar_g: entry.sugar_g,
        sodium_mg: entry.sodium_mg,
        health_score: DEFAULT_HEALTH_SCORE,
        quantity_g: entry.quantity_g.unwrap_or(DEFAULT_COMPONENT_WEIGHT_G),
        serving_size,
        serving_unit: serving_unit.to_string(),
        recommended_serving: entry
            .recommended_serving
            .clone()
            .unwrap_or_else(|| recommended_serving_hint(dish_name).to_string()),
    };
    record.health_score = macro_balance_score(&record);
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, calories: f64, quantity_g: Option<f64>) -> FoodEntry {
        FoodEntry {
            name: name.to_string(),
            calories,
            protein: 8.0,
            fat: 6.0,
            carbs: 30.0,
            fiber_g: 4.0,
            sugar_g: 3.0,
            sodium_mg: 400.0,
            quantity_g,
            recommended_serving: None,
        }
    }

    fn sample_db() -> FoodDatabase {
        FoodDatabase::new(vec![
            entry("Dal Makhani", 230.0, Some(200.0)),
            entry("Naan", 280.0, None),
            entry("Chole", 210.0, Some(200.0)),
        ])
    }

    #[test]
    fn test_combination_sums_found_components() {
        let mut resolver = NutrientResolver::with_seed(sample_db(), 1);
        let record = resolver.resolve("Dal Makhani with Naan", 100.0, "g");

        assert_eq!(record.dish_name, "Dal Makhani with Naan");
        assert_eq!(record.dish_components, vec!["Dal Makhani", "Naan"]);
        assert_eq!(record.calories, 510.0);
        assert_eq!(record.protein, 16.0);
        // Stored weight for dal, component default for naan.
        assert_eq!(record.quantity_g, 350.0);
        assert_eq!(record.recommended_serving, COMBINATION_SERVING);
    }

    #[test]
    fn test_combination_skips_missing_components() {
        let mut resolver = NutrientResolver::with_seed(sample_db(), 1);
        let record = resolver.resolve("Chole with Kulcha", 100.0, "g");

        // Kulcha misses; totals reflect only chole.
        assert_eq!(record.dish_components, vec!["Chole", "Kulcha"]);
        assert_eq!(record.calories, 210.0);
        assert_eq!(record.quantity_g, 200.0);
    }

    #[test]
    fn test_combination_full_miss_discards_split() {
        let mut resolver = NutrientResolver::with_seed(FoodDatabase::empty(), 42);
        let record = resolver.resolve("Idli with Sambar", 100.0, "g");

        // Degrades to estimation on the combined name; the attempted split
        // is not preserved.
        assert_eq!(record.dish_components, vec!["Idli with Sambar"]);
        assert!(record.calories > 0.0);
    }

    #[test]
    fn test_direct_match_populates_every_field() {
        let mut resolver = NutrientResolver::with_seed(sample_db(), 1);
        let record = resolver.resolve("Naan", 100.0, "g");

        assert_eq!(record.dish_name, "Naan");
        assert_eq!(record.dish_components, vec!["Naan"]);
        assert_eq!(record.calories, 280.0);
        assert_eq!(record.quantity_g, DEFAULT_COMPONENT_WEIGHT_G);
        assert_eq!(record.recommended_serving, "80g (1 piece)");
        assert!((0..=100).contains(&record.health_score));
    }

    #[test]
    fn test_resolver_never_fails_on_empty_database() {
        let mut resolver = NutrientResolver::with_seed(FoodDatabase::empty(), 3);
        for dish in ["Aloo Gobi", "Chicken 65", "Moong Dal Halwa", ""] {
            let record = resolver.resolve(dish, 100.0, "g");
            assert!(!record.dish_components.is_empty());
            assert!((0..=100).contains(&record.health_score));
        }
    }

    #[test]
    fn test_broken_profiles_fall_back_to_generic_record() {
        let mut profiles = EstimationProfiles::default();
        profiles.vegetarian.protein = ValueRange::new(5, 5);

        let mut resolver =
            NutrientResolver::with_seed(FoodDatabase::empty(), 9).with_profiles(profiles);
        let record = resolver.resolve("Aloo Gobi", 100.0, "g");

        assert_eq!(record.calories, 350.0);
        assert_eq!(record.health_score, 60);
        assert_eq!(record.recommended_serving, "Standard serving");
    }

    #[test]
    fn test_injected_combo_table_replaces_builtin() {
        let combos = vec![KnownCombo {
            pattern: "naan dal".to_string(),
            components: vec!["Naan".to_string(), "Dal Makhani".to_string()],
        }];
        let mut resolver =
            NutrientResolver::with_seed(sample_db(), 1).with_known_combos(combos);

        let record = resolver.resolve("Naan Dal Special", 100.0, "g");
        assert_eq!(record.dish_components, vec!["Naan", "Dal Makhani"]);
        assert_eq!(record.calories, 280.0 + 230.0);

        // The built-in table is gone; the fused name resolves as one dish.
        let record = resolver.resolve("Chole Bhature Unknown", 100.0, "g");
        assert_eq!(record.dish_components.len(), 1);
    }

    #[test]
    fn test_zero_calorie_combination_keeps_default_score() {
        let mut water = entry("Nimbu Pani", 0.0, Some(250.0));
        water.protein = 0.0;
        water.fat = 0.0;
        water.carbs = 0.0;
        water.fiber_g = 0.0;
        water.sugar_g = 0.0;
        water.sodium_mg = 0.0;
        let mut soda = water.clone();
        soda.name = "Soda".to_string();

        let db = FoodDatabase::new(vec![water, soda]);
        let mut resolver = NutrientResolver::with_seed(db, 5);
        let record = resolver.resolve("Nimbu Pani with Soda", 100.0, "g");

        assert_eq!(record.calories, 0.0);
        assert_eq!(record.health_score, DEFAULT_HEALTH_SCORE);
    }
}
