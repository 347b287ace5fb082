/// Keywords marking a dish as non-vegetarian.
pub const NON_VEG_KEYWORDS: &[&str] = &["chicken", "mutton", "fish", "prawn", "egg"];

/// Keywords marking a dish as a dessert. Dessert classification takes
/// priority over the vegetarian/non-vegetarian split.
pub const DESSERT_KEYWORDS: &[&str] = &["sweet", "mithai", "halwa", "barfi", "ladoo"];

/// Ordered spelling-variant rewrites applied to lowercased names before
/// database matching. Longer variants come before shorter ones so a variant
/// is never left half-rewritten.
pub const SYNONYM_REWRITES: &[(&str, &str)] = &[
    ("chawal", "rice"),
    ("murgh", "chicken"),
    ("panir", "paneer"),
    ("bhajji", "bhaji"),
    ("chapatti", "roti"),
    ("chapati", "roti"),
    ("daal", "dal"),
    ("dhal", "dal"),
    ("sabji", "sabzi"),
];

/// Fused dish names that denote combinations without a "with"/"and"
/// connector, matched by case-insensitive substring containment in order.
/// Single-element mappings pin a canonical name for dishes whose names look
/// like combinations but are not.
pub const KNOWN_COMBINATIONS: &[(&str, &[&str])] = &[
    ("chole bhature", &["Chole", "Bhature"]),
    ("rajma chawal", &["Rajma", "Chawal"]),
    ("dal chawal", &["Dal", "Chawal"]),
    ("kadhi chawal", &["Kadhi", "Chawal"]),
    ("chicken biryani", &["Chicken Biryani"]),
    ("veg biryani", &["Vegetable Biryani"]),
    ("dal makhani", &["Dal Makhani"]),
    ("butter chicken", &["Butter Chicken"]),
    ("shahi paneer", &["Shahi Paneer"]),
    ("palak paneer", &["Palak Paneer"]),
];

/// Ordered customary-portion hints keyed by substring of the dish name.
pub const SERVING_HINTS: &[(&[&str], &str)] = &[
    (&["thali"], "600g (1 thali)"),
    (&["biryani"], "200g (1 cup)"),
    (&["dal", "curry"], "200g (1 cup)"),
    (&["naan"], "80g (1 piece)"),
    (&["roti"], "30g (1 piece)"),
    (&["samosa"], "50g (1 piece)"),
    (&["gulab jamun", "jalebi"], "40g (1 piece)"),
];

/// Reference serving the database values and estimation profiles are based
/// on; gram serving sizes scale relative to this.
pub const STANDARD_SERVING_G: f64 = 100.0;

/// Assumed weight of a combination component with no stored weight.
pub const DEFAULT_COMPONENT_WEIGHT_G: f64 = 150.0;

/// Health score used when the macro-balance formula cannot run (zero total
/// calories).
pub const DEFAULT_HEALTH_SCORE: i32 = 65;

/// Serving description for combination records.
pub const COMBINATION_SERVING: &str = "See individual components";

// ─────────────────────────────────────────────────────────────────────────────
// Health score formula weights
// ─────────────────────────────────────────────────────────────────────────────

/// Calories per gram of each macronutrient.
pub const PROTEIN_CAL_PER_G: f64 = 4.0;
pub const CARB_CAL_PER_G: f64 = 4.0;
pub const FAT_CAL_PER_G: f64 = 9.0;

/// Ideal macro calorie split: 25% protein, 50% carbs, 25% fat.
pub const IDEAL_PROTEIN_SHARE: f64 = 0.25;
pub const IDEAL_CARB_SHARE: f64 = 0.5;
pub const IDEAL_FAT_SHARE: f64 = 0.25;

/// Weight of the macro-balance term.
pub const BALANCE_WEIGHT: f64 = 0.5;

/// Reward per unit of fiber density (g per 1000 kcal).
pub const FIBER_WEIGHT: f64 = 30.0;

/// Penalty per unit of sugar density (g per 1000 kcal).
pub const SUGAR_WEIGHT: f64 = 10.0;

/// Penalty per unit of sodium density (mg per kcal).
pub const SODIUM_WEIGHT: f64 = 0.05;

/// Base added to the weighted score before clamping.
pub const SCORE_BASE: f64 = 50.0;

/// Clamp range for formula-derived scores.
pub const SCORE_MIN: i32 = 40;
pub const SCORE_MAX: i32 = 90;

// ─────────────────────────────────────────────────────────────────────────────
// Total-failure fallback record
// ─────────────────────────────────────────────────────────────────────────────

pub const GENERIC_CALORIES: f64 = 350.0;
pub const GENERIC_PROTEIN: f64 = 12.0;
pub const GENERIC_FAT: f64 = 15.0;
pub const GENERIC_CARBS: f64 = 45.0;
pub const GENERIC_FIBER_G: f64 = 5.0;
pub const GENERIC_SUGAR_G: f64 = 4.0;
pub const GENERIC_SODIUM_MG: f64 = 450.0;
pub const GENERIC_HEALTH_SCORE: i32 = 60;
pub const GENERIC_SERVING: &str = "Standard serving";

/// Customary-portion hint for a dish name, from the ordered hint table.
pub fn recommended_serving_hint(dish_name: &str) -> &'static str {
    let lower = dish_name.to_lowercase();
    for (keywords, hint) in SERVING_HINTS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return hint;
        }
    }
    GENERIC_SERVING
}
