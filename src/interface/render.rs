use crate::models::{FoodEntry, NutritionRecord};

/// Display a nutrition record in a formatted block.
pub fn display_record(record: &NutritionRecord) {
    println!();
    println!("=== Nutrition Estimate ===");
    println!();

    println!("Dish: {}", record.dish_name);
    if record.is_combination() {
        println!("Components: {}", record.dish_components.join(" + "));
    }
    println!(
        "Serving: {:.0} {} (resolved weight: {:.0} g)",
        record.serving_size, record.serving_unit, record.quantity_g
    );
    println!("Recommended serving: {}", record.recommended_serving);
    println!();

    println!("Calories: {:>7.1} kcal", record.calories);
    println!("Protein:  {:>7.1} g", record.protein);
    println!("Fat:      {:>7.1} g", record.fat);
    println!("Carbs:    {:>7.1} g", record.carbs);
    println!("Fiber:    {:>7.1} g", record.fiber_g);
    println!("Sugar:    {:>7.1} g", record.sugar_g);
    println!("Sodium:   {:>7.1} mg", record.sodium_mg);
    println!();

    println!("Health score: {}/100 {}", record.health_score, health_tag(record.health_score));
    println!();
}

/// Short verdict string for a health score.
fn health_tag(score: i32) -> &'static str {
    match score {
        s if s >= 75 => "(good)",
        s if s >= 55 => "(moderate)",
        _ => "(indulgent)",
    }
}

/// Display a list of database entries with their details.
pub fn display_food_list(entries: &[&FoodEntry], title: &str) {
    if entries.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, entries.len());
    println!();

    let max_name_len = entries.iter().map(|e| e.name.len()).max().unwrap_or(10);

    for entry in entries {
        let weight = entry
            .quantity_g
            .map(|q| format!("{:.0} g", q))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<width$} - {:>5.0} cal | P:{:>4.1} F:{:>4.1} C:{:>4.1} | {}",
            entry.name,
            entry.calories,
            entry.protein,
            entry.fat,
            entry.carbs,
            weight,
            width = max_name_len
        );
    }

    println!();
}
