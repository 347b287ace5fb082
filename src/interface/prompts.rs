use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};

/// Minimum similarity for a did-you-mean suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum suggestions offered in a selection list.
const MAX_SUGGESTIONS: usize = 5;

/// Prompt for a dish name, with fuzzy suggestions from the database names.
///
/// Unknown names are returned as typed; the resolver handles them. Known
/// names are canonicalized to their database spelling.
pub fn prompt_dish_name(known_names: &[&str]) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Which dish would you like to analyze?")
        .interact_text()?;

    let input = input.trim().to_string();
    if input.is_empty() {
        return Err(NutriError::InvalidInput("Empty dish name".to_string()));
    }

    // Exact match (case-insensitive) takes the canonical spelling.
    if let Some(name) = known_names
        .iter()
        .find(|n| n.to_lowercase() == input.to_lowercase())
    {
        return Ok((*name).to_string());
    }

    // Fuzzy suggestions against the database.
    let mut candidates: Vec<(&str, f64)> = known_names
        .iter()
        .map(|n| (*n, jaro_winkler(&n.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(input);
    }

    if candidates.len() == 1 {
        let name = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", name))
            .default(true)
            .interact()?;

        return Ok(if confirm { name.to_string() } else { input });
    }

    // Multiple matches - let the user pick or keep the typed name.
    let options: Vec<String> = candidates
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|(n, _)| (*n).to_string())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push(format!("Keep '{}'", input));

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(options[selection].clone())
    } else {
        Ok(input)
    }
}

/// Prompt for the serving size in the chosen unit.
pub fn prompt_serving_size() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Serving size")
        .default("100".to_string())
        .interact_text()?;

    let size: f64 = input
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))?;

    if size <= 0.0 {
        return Err(NutriError::InvalidInput(
            "Serving size must be positive".to_string(),
        ));
    }

    Ok(size)
}

/// Prompt for the serving unit.
pub fn prompt_serving_unit() -> Result<String> {
    let units = ["g", "ml", "piece"];

    let selection = Select::new()
        .with_prompt("Serving unit")
        .items(&units)
        .default(0)
        .interact()?;

    Ok(units[selection].to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full estimate request interactively.
pub fn collect_estimate_request(known_names: &[&str]) -> Result<(String, f64, String)> {
    let dish = prompt_dish_name(known_names)?;
    let serving_size = prompt_serving_size()?;
    let serving_unit = prompt_serving_unit()?;

    Ok((dish, serving_size, serving_unit))
}
