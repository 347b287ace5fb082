use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::NutritionRecord;

/// One row of a batch input file.
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub dish: String,

    #[serde(default)]
    pub serving_size: Option<f64>,

    #[serde(default)]
    pub serving_unit: Option<String>,
}

/// Read batch requests from a CSV file with a `dish[,serving_size][,serving_unit]` header.
pub fn read_batch_requests<P: AsRef<Path>>(path: P) -> Result<Vec<BatchRequest>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut requests = Vec::new();
    for row in reader.deserialize() {
        requests.push(row?);
    }
    Ok(requests)
}

/// Write resolved records to a CSV report.
pub fn write_csv_report<P: AsRef<Path>>(path: P, records: &[NutritionRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "dish",
        "components",
        "calories",
        "protein",
        "fat",
        "carbs",
        "fiber_g",
        "sugar_g",
        "sodium_mg",
        "health_score",
        "quantity_g",
        "serving_size",
        "serving_unit",
        "recommended_serving",
    ])?;

    for record in records {
        wtr.write_record([
            record.dish_name.clone(),
            record.dish_components.join(" + "),
            format!("{:.1}", record.calories),
            format!("{:.1}", record.protein),
            format!("{:.1}", record.fat),
            format!("{:.1}", record.carbs),
            format!("{:.1}", record.fiber_g),
            format!("{:.1}", record.sugar_g),
            format!("{:.1}", record.sodium_mg),
            record.health_score.to_string(),
            format!("{:.0}", record.quantity_g),
            format!("{:.0}", record.serving_size),
            record.serving_unit.clone(),
            record.recommended_serving.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write one resolved record to a pretty-printed JSON report.
pub fn write_json_report<P: AsRef<Path>>(path: P, record: &NutritionRecord) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(record)?.as_bytes())?;
    Ok(())
}

/// Leading phrases an upstream identifier tends to prepend to a dish name.
const IDENTIFIER_PREFIXES: &[&str] = &[
    "this is",
    "the dish is",
    "it is",
    "i see",
    "this looks like",
    "this appears to be",
    "identified as",
    "the food is",
    "in the image",
    "the meal is",
];

/// Clean a free-text dish name coming from an upstream identifier.
///
/// Strips leading identification phrases, truncates at the first sentence
/// punctuation, removes wrapping quotes, and title-cases words.
pub fn clean_dish_name(raw: &str) -> String {
    let mut name = raw.trim().to_string();

    let lower = name.to_lowercase();
    for prefix in IDENTIFIER_PREFIXES {
        if lower.starts_with(prefix) && lower[prefix.len()..].starts_with(char::is_whitespace) {
            name = name[prefix.len()..].trim_start().to_string();
            break;
        }
    }

    if let Some(cut) = name.find(['.', ',', '\n', ':']) {
        name = name[..cut].trim().to_string();
    }

    if name.len() >= 2 && name.starts_with('"') && name.ends_with('"') {
        name = name[1..name.len() - 1].to_string();
    }

    title_case(&name)
}

/// Uppercase the first letter of each word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_boundary = true;
    for c in text.chars() {
        if at_boundary && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = !c.is_alphanumeric();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn sample_record() -> NutritionRecord {
        NutritionRecord {
            dish_name: "Chole Bhature".to_string(),
            dish_components: vec!["Chole".to_string(), "Bhature".to_string()],
            calories: 450.0,
            protein: 14.0,
            fat: 18.0,
            carbs: 55.0,
            fiber_g: 8.0,
            sugar_g: 5.0,
            sodium_mg: 700.0,
            health_score: 58,
            quantity_g: 350.0,
            serving_size: 100.0,
            serving_unit: "g".to_string(),
            recommended_serving: "See individual components".to_string(),
        }
    }

    #[test]
    fn test_csv_report_roundtrip_shape() {
        let file = NamedTempFile::new().unwrap();
        write_csv_report(file.path(), &[sample_record()]).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("dish,components,calories"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("Chole Bhature,Chole + Bhature,450.0"));
    }

    #[test]
    fn test_read_batch_requests_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "dish,serving_size,serving_unit").unwrap();
        writeln!(file, "Dal Tadka,200,g").unwrap();
        writeln!(file, "Naan,,").unwrap();

        let requests = read_batch_requests(file.path()).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].dish, "Dal Tadka");
        assert_eq!(requests[0].serving_size, Some(200.0));
        assert_eq!(requests[1].dish, "Naan");
        assert!(requests[1].serving_size.is_none());
        assert!(requests[1].serving_unit.is_none());
    }

    #[test]
    fn test_json_report_is_readable_back() {
        let file = NamedTempFile::new().unwrap();
        write_json_report(file.path(), &sample_record()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let parsed: NutritionRecord = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.dish_name, "Chole Bhature");
        assert_eq!(parsed.health_score, 58);
    }

    #[test]
    fn test_clean_dish_name_strips_identifier_phrases() {
        assert_eq!(clean_dish_name("This is Butter Chicken."), "Butter Chicken");
        assert_eq!(
            clean_dish_name("the dish is dal makhani, served hot"),
            "Dal Makhani"
        );
        assert_eq!(clean_dish_name("\"Palak Paneer\""), "Palak Paneer");
        assert_eq!(clean_dish_name("masala dosa"), "Masala Dosa");
    }

    #[test]
    fn test_clean_dish_name_keeps_plain_names() {
        assert_eq!(clean_dish_name("Rajma Chawal"), "Rajma Chawal");
        // A prefix word without trailing text is not stripped.
        assert_eq!(clean_dish_name("it is"), "It Is");
    }
}
