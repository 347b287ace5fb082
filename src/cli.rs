use clap::{Parser, Subcommand};

/// NutriEstimator — resolves dish names into nutrition estimates, with
/// combination decomposition and a heuristic fallback for unknown dishes.
#[derive(Parser, Debug)]
#[command(name = "nutri_estimator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food database JSON file.
    #[arg(short, long, default_value = "food_db.json")]
    pub database: String,

    /// Seed for the estimation fallback, for reproducible draws.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate nutrition for a dish (interactive when no dish is given).
    Estimate {
        /// Dish name; prompts interactively when omitted.
        dish: Option<String>,

        /// Serving size in the chosen unit.
        #[arg(long, default_value_t = 100.0)]
        serving_size: f64,

        /// Serving unit (nutrients scale only for "g").
        #[arg(long, default_value = "g")]
        serving_unit: String,

        /// Write the resolved record to a JSON report file.
        #[arg(long)]
        report: Option<String>,
    },

    /// Resolve a CSV of dishes and write a CSV nutrition report.
    Batch {
        /// Input CSV with a dish[,serving_size][,serving_unit] header.
        input: String,

        /// Output CSV path.
        #[arg(short, long, default_value = "nutrition_report.csv")]
        output: String,

        /// Treat the dish column as raw identifier output and clean it
        /// (strip lead-in phrases, truncate at punctuation, title-case).
        #[arg(long)]
        clean: bool,
    },

    /// List the food database entries.
    Foods,
}

impl Default for Command {
    fn default() -> Self {
        Command::Estimate {
            dish: None,
            serving_size: 100.0,
            serving_unit: "g".to_string(),
            report: None,
        }
    }
}
