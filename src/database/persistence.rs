use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::FoodEntry;

/// Load food entries from a JSON file, preserving file order.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<FoodEntry>> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<FoodEntry> = serde_json::from_str(&content)?;
    Ok(entries)
}

/// Save food entries to a JSON file.
pub fn save_entries<P: AsRef<Path>>(path: P, entries: &[FoodEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"name": "Dal Tadka", "calories": 140, "protein": 7, "fat": 4, "carbs": 20, "fiber_g": 5, "sugar_g": 2, "sodium_mg": 380, "quantity_g": 200}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Dal Tadka");
        assert_eq!(entries[0].quantity_g, Some(200.0));

        let out_file = NamedTempFile::new().unwrap();
        save_entries(out_file.path(), &entries).unwrap();

        let reloaded = load_entries(out_file.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].name, "Dal Tadka");
    }

    #[test]
    fn test_load_preserves_file_order() {
        let json = r#"[
            {"name": "Rice", "calories": 180, "protein": 4, "fat": 1, "carbs": 40},
            {"name": "Dal", "calories": 140, "protein": 7, "fat": 4, "carbs": 20},
            {"name": "Naan", "calories": 280, "protein": 9, "fat": 5, "carbs": 48}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let entries = load_entries(file.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Rice", "Dal", "Naan"]);
    }
}
