mod catalog;
mod persistence;

pub use catalog::FoodDatabase;
pub use persistence::{load_entries, save_entries};
