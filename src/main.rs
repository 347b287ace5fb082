use clap::Parser;
use std::path::Path;

use nutri_estimator_rs::cli::{Cli, Command};
use nutri_estimator_rs::database::{load_entries, FoodDatabase};
use nutri_estimator_rs::error::{NutriError, Result};
use nutri_estimator_rs::interface::{
    collect_estimate_request, display_food_list, display_record, prompt_yes_no,
};
use nutri_estimator_rs::report::{
    clean_dish_name, read_batch_requests, write_csv_report, write_json_report,
};
use nutri_estimator_rs::NutrientResolver;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Estimate {
            dish,
            serving_size,
            serving_unit,
            report,
        } => cmd_estimate(&cli.database, cli.seed, dish, serving_size, &serving_unit, report),
        Command::Batch {
            input,
            output,
            clean,
        } => cmd_batch(&cli.database, cli.seed, &input, &output, clean),
        Command::Foods => cmd_foods(&cli.database),
    }
}

/// Load the database file, treating a missing file as an empty database.
///
/// An empty database is a supported configuration: resolution degrades to
/// heuristic estimation.
fn load_database(file_path: &str) -> Result<FoodDatabase> {
    let path = Path::new(file_path);

    if !path.exists() {
        println!(
            "Food database not found at {}; estimates will be heuristic only.",
            file_path
        );
        return Ok(FoodDatabase::empty());
    }

    let entries = load_entries(path)?;
    Ok(FoodDatabase::new(entries))
}

fn build_resolver(db: FoodDatabase, seed: Option<u64>) -> NutrientResolver {
    match seed {
        Some(seed) => NutrientResolver::with_seed(db, seed),
        None => NutrientResolver::new(db),
    }
}

/// Estimate nutrition for one dish.
fn cmd_estimate(
    db_path: &str,
    seed: Option<u64>,
    dish: Option<String>,
    serving_size: f64,
    serving_unit: &str,
    report: Option<String>,
) -> Result<()> {
    let db = load_database(db_path)?;
    if !db.is_empty() {
        println!("Loaded {} foods", db.len());
    }

    let interactive = dish.is_none();
    let (dish, serving_size, serving_unit) = match dish {
        Some(dish) => (dish, serving_size, serving_unit.to_string()),
        None => {
            let names = db.names();
            collect_estimate_request(&names)?
        }
    };

    if serving_size <= 0.0 {
        return Err(NutriError::InvalidInput(
            "Serving size must be positive".to_string(),
        ));
    }

    let mut resolver = build_resolver(db, seed);
    let record = resolver.resolve(&dish, serving_size, &serving_unit);

    display_record(&record);

    if let Some(report_path) = report {
        write_json_report(&report_path, &record)?;
        println!("Report saved to {}", report_path);
    } else if interactive {
        let save = prompt_yes_no("Save JSON report?", false)?;
        if save {
            let report_path = "nutrition_report.json";
            write_json_report(report_path, &record)?;
            println!("Report saved to {}", report_path);
        }
    }

    Ok(())
}

/// Resolve every dish in a CSV file and write a CSV report.
fn cmd_batch(
    db_path: &str,
    seed: Option<u64>,
    input: &str,
    output: &str,
    clean: bool,
) -> Result<()> {
    if !Path::new(input).exists() {
        eprintln!("Batch input file not found: {}", input);
        return Ok(());
    }

    let db = load_database(db_path)?;
    let mut resolver = build_resolver(db, seed);

    let requests = read_batch_requests(input)?;
    if requests.is_empty() {
        println!("No dishes in {}.", input);
        return Ok(());
    }

    let mut records = Vec::with_capacity(requests.len());
    for request in &requests {
        let dish = if clean {
            clean_dish_name(&request.dish)
        } else {
            request.dish.clone()
        };
        let serving_size = request.serving_size.unwrap_or(100.0);
        let serving_unit = request.serving_unit.as_deref().unwrap_or("g");

        if serving_size <= 0.0 {
            eprintln!("Skipping '{}': serving size must be positive", request.dish);
            continue;
        }

        records.push(resolver.resolve(&dish, serving_size, serving_unit));
    }

    write_csv_report(output, &records)?;
    println!("Resolved {} of {} dishes into {}", records.len(), requests.len(), output);

    Ok(())
}

/// List the food database entries.
fn cmd_foods(db_path: &str) -> Result<()> {
    let path = Path::new(db_path);

    if !path.exists() {
        eprintln!("Food database file not found: {}", db_path);
        return Ok(());
    }

    let db = FoodDatabase::new(load_entries(path)?);
    let entries: Vec<_> = db.iter().collect();
    display_food_list(&entries, "Food database");

    Ok(())
}
