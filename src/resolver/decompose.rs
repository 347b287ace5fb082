use crate::resolver::constants::KNOWN_COMBINATIONS;

/// A fused dish name and the components it decomposes into.
#[derive(Debug, Clone)]
pub struct KnownCombo {
    /// Lowercase substring that identifies the combination.
    pub pattern: String,
    pub components: Vec<String>,
}

/// The built-in known-combination table.
pub fn default_known_combos() -> Vec<KnownCombo> {
    KNOWN_COMBINATIONS
        .iter()
        .map(|(pattern, components)| KnownCombo {
            pattern: (*pattern).to_string(),
            components: components.iter().map(|c| (*c).to_string()).collect(),
        })
        .collect()
}

/// Split a dish name into its component sub-dishes.
///
/// Rules are tried in fixed priority order; the order is behaviorally
/// significant and must not be rearranged:
///   1. thali names (with an optional trailing "with A, B and C" clause)
///   2. "X with Y"
///   3. "X and Y"
///   4. the known-combination table
///   5. the name itself as a single component
pub fn decompose(dish_name: &str, combos: &[KnownCombo]) -> Vec<String> {
    let lower = dish_name.to_lowercase();

    if let Some(components) = match_thali(&lower) {
        return components;
    }
    if let Some(components) = split_on_connector(dish_name, "with") {
        return components;
    }
    if let Some(components) = split_on_connector(dish_name, "and") {
        return components;
    }
    if let Some(combo) = combos.iter().find(|c| lower.contains(&c.pattern)) {
        return combo.components.clone();
    }

    vec![dish_name.to_string()]
}

/// Thali rule: the name up to and including the last "thali" is the first
/// component; a directly following "with" clause lists further components,
/// split on commas and "and". Components come out lowercased.
fn match_thali(lower: &str) -> Option<Vec<String>> {
    let pos = lower.rfind("thali")?;
    let head = lower[..pos + "thali".len()].trim().to_string();
    let mut components = vec![head];

    let rest = &lower[pos + "thali".len()..];
    let trimmed = rest.trim_start();
    // The clause only counts when "with" follows the thali name directly,
    // separated by whitespace on both sides.
    if trimmed.len() < rest.len() {
        if let Some(tail) = trimmed.strip_prefix("with") {
            let items = tail.strip_prefix(|c: char| c.is_whitespace());
            if let Some(items) = items {
                for piece in items.split(',') {
                    for item in split_on_word(piece, "and") {
                        let item = item.trim();
                        if !item.is_empty() {
                            components.push(item.to_string());
                        }
                    }
                }
            }
        }
    }

    Some(components)
}

/// Split `name` in two at the last free-standing, case-insensitive
/// occurrence of `connector` that has text on both sides. Original casing
/// is preserved; runs of whitespace collapse to single spaces.
fn split_on_connector(name: &str, connector: &str) -> Option<Vec<String>> {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    let idx = tokens
        .iter()
        .enumerate()
        .rev()
        .find(|(i, t)| {
            t.eq_ignore_ascii_case(connector) && *i > 0 && *i < tokens.len() - 1
        })
        .map(|(i, _)| i)?;

    Some(vec![tokens[..idx].join(" "), tokens[idx + 1..].join(" ")])
}

/// Split on every free-standing occurrence of `word` (any casing).
fn split_on_word<'a>(text: &'a str, word: &str) -> Vec<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut groups = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for token in tokens {
        if token.eq_ignore_ascii_case(word) {
            groups.push(current.join(" "));
            current = Vec::new();
        } else {
            current.push(token);
        }
    }
    groups.push(current.join(" "));
    groups
}
