pub mod cli;
pub mod database;
pub mod error;
pub mod interface;
pub mod models;
pub mod report;
pub mod resolver;

pub use database::FoodDatabase;
pub use error::{NutriError, Result};
pub use models::{FoodEntry, NutritionRecord};
pub use resolver::NutrientResolver;
