pub mod food;
pub mod record;

pub use food::FoodEntry;
pub use record::NutritionRecord;
