use crate::database::FoodDatabase;
use crate::models::FoodEntry;
use crate::resolver::constants::SYNONYM_REWRITES;

/// Rewrite spelling variants in a lowercased name to their canonical forms.
pub fn normalize_synonyms(lower_name: &str) -> String {
    let mut normalized = lower_name.to_string();
    for (variant, canonical) in SYNONYM_REWRITES {
        normalized = normalized.replace(variant, canonical);
    }
    normalized
}

/// Look up one combination component.
///
/// Tried in order: exact case-sensitive match on the raw component,
/// case-insensitive match against the synonym-normalized name, then
/// substring containment in either direction. First hit wins; database
/// order decides ties for the substring stage.
pub fn lookup_component<'a>(db: &'a FoodDatabase, component: &str) -> Option<&'a FoodEntry> {
    if let Some(entry) = db.exact(component) {
        return Some(entry);
    }

    let normalized = normalize_synonyms(&component.to_lowercase());

    if let Some(entry) = db.iter().find(|e| e.key() == normalized) {
        return Some(entry);
    }

    db.iter().find(|e| {
        let key = e.key();
        normalized.contains(&key) || key.contains(&normalized)
    })
}

/// Resolve a single (non-combination) dish name against the database.
///
/// Tried in order: exact case-sensitive match on the raw name, word-set
/// matching after synonym normalization, then substring containment on the
/// full normalized strings.
pub fn match_single_dish<'a>(db: &'a FoodDatabase, dish_name: &str) -> Option<&'a FoodEntry> {
    if let Some(entry) = db.exact(dish_name) {
        return Some(entry);
    }

    let normalized = normalize_synonyms(&dish_name.to_lowercase());
    let food_words: Vec<&str> = normalized.split_whitespace().collect();

    if let Some(entry) = db.iter().find(|e| {
        let key = e.key();
        let dish_words: Vec<&str> = key.split_whitespace().collect();
        words_cover(&food_words, &dish_words) || words_cover(&dish_words, &food_words)
    }) {
        return Some(entry);
    }

    db.iter().find(|e| {
        let key = e.key();
        normalized.contains(&key) || key.contains(&normalized)
    })
}

/// Whether every word in `subset` is contained in (or contains) some word
/// of `superset`.
fn words_cover(subset: &[&str], superset: &[&str]) -> bool {
    subset
        .iter()
        .all(|w| superset.iter().any(|s| s.contains(w) || w.contains(s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, calories: f64) -> FoodEntry {
        FoodEntry {
            name: name.to_string(),
            calories,
            protein: 6.0,
            fat: 5.0,
            carbs: 25.0,
            fiber_g: 3.0,
            sugar_g: 2.0,
            sodium_mg: 350.0,
            quantity_g: None,
            recommended_serving: None,
        }
    }

    fn sample_db() -> FoodDatabase {
        FoodDatabase::new(vec![
            entry("Dal Tadka", 140.0),
            entry("Steamed Rice", 180.0),
            entry("Butter Chicken", 340.0),
            entry("Naan", 280.0),
        ])
    }

    #[test]
    fn test_normalize_synonyms() {
        assert_eq!(normalize_synonyms("rajma chawal"), "rajma rice");
        assert_eq!(normalize_synonyms("murgh makhani"), "chicken makhani");
        assert_eq!(normalize_synonyms("daal fry"), "dal fry");
        assert_eq!(normalize_synonyms("tandoori chapatti"), "tandoori roti");
        assert_eq!(normalize_synonyms("aloo sabji"), "aloo sabzi");
    }

    #[test]
    fn test_lookup_component_exact_before_partial() {
        let db = sample_db();
        let hit = lookup_component(&db, "Naan").unwrap();
        assert_eq!(hit.name, "Naan");
    }

    #[test]
    fn test_lookup_component_normalizes_synonyms() {
        let db = sample_db();
        // "chawal" -> "rice", then substring containment finds Steamed Rice.
        let hit = lookup_component(&db, "Chawal").unwrap();
        assert_eq!(hit.name, "Steamed Rice");
    }

    #[test]
    fn test_lookup_component_substring_both_directions() {
        let db = sample_db();
        let hit = lookup_component(&db, "Garlic Naan").unwrap();
        assert_eq!(hit.name, "Naan");

        let hit = lookup_component(&db, "Rice").unwrap();
        assert_eq!(hit.name, "Steamed Rice");
    }

    #[test]
    fn test_lookup_component_miss() {
        let db = sample_db();
        assert!(lookup_component(&db, "Dhokla").is_none());
        assert!(lookup_component(&FoodDatabase::empty(), "Naan").is_none());
    }

    #[test]
    fn test_match_single_dish_exact() {
        let db = sample_db();
        let hit = match_single_dish(&db, "Butter Chicken").unwrap();
        assert_eq!(hit.name, "Butter Chicken");
    }

    #[test]
    fn test_match_single_dish_word_set() {
        let db = sample_db();
        // Every input word is contained in some dish word or vice versa.
        let hit = match_single_dish(&db, "butter murgh").unwrap();
        assert_eq!(hit.name, "Butter Chicken");
    }

    #[test]
    fn test_match_single_dish_word_set_symmetric() {
        let db = sample_db();
        // All dish words appear within the longer input.
        let hit = match_single_dish(&db, "homestyle dal tadka bowl").unwrap();
        assert_eq!(hit.name, "Dal Tadka");
    }

    #[test]
    fn test_match_single_dish_substring_fallback() {
        let db = FoodDatabase::new(vec![entry("Masala Dosa with Sambar", 320.0)]);
        let hit = match_single_dish(&db, "masala dosa with sambar deluxe");
        assert!(hit.is_some());
    }

    #[test]
    fn test_match_single_dish_empty_db() {
        assert!(match_single_dish(&FoodDatabase::empty(), "Dal Tadka").is_none());
    }
}
