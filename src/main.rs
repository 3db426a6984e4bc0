use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_estimator_rs::cli::{Cli, Command};
use meal_estimator_rs::document::{generic_plan, load_plan, save_meal_csv, save_plan};
use meal_estimator_rs::error::Result;
use meal_estimator_rs::estimator::estimate;
use meal_estimator_rs::interface::{
    compose_plan, display_grams, display_lookup, display_summary, prompt_yes_no,
};

fn main() {
    // Logs on stderr, plan and summary output on stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("meal_estimator_rs=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Estimate { json, csv } => cmd_estimate(&cli.file, json, csv.as_deref()),
        Command::Sample { output } => cmd_sample(output.as_deref()),
        Command::Lookup { name } => {
            display_lookup(&name);
            Ok(())
        }
        Command::Grams { unit, quantity } => {
            display_grams(quantity.as_deref(), &unit);
            Ok(())
        }
        Command::Compose { output } => cmd_compose(output.as_deref().unwrap_or(&cli.file)),
    }
}

/// Estimate a plan file and display or print the summary.
fn cmd_estimate(path: &Path, json: bool, csv: Option<&Path>) -> Result<()> {
    if !path.exists() {
        eprintln!("Meal plan file not found: {}", path.display());
        eprintln!("Use 'sample --output {}' to create an example plan.", path.display());
        return Ok(());
    }

    let plan = load_plan(path)?;
    let summary = estimate(&plan);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Loaded {} meals ({} items)", plan.meals.len(), plan.item_count());
        display_summary(&summary);
    }

    if let Some(csv_path) = csv {
        save_meal_csv(csv_path, &summary)?;
        eprintln!("Per-meal breakdown written to {}", csv_path.display());
    }

    Ok(())
}

/// Print or write the built-in example plan.
fn cmd_sample(output: Option<&Path>) -> Result<()> {
    let plan = generic_plan();
    match output {
        Some(path) => {
            save_plan(path, &plan)?;
            println!("Example plan written to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}

/// Compose a plan interactively, estimate it and optionally save it.
fn cmd_compose(path: &Path) -> Result<()> {
    let plan = compose_plan()?;

    if plan.meals.is_empty() {
        println!("No meals entered.");
        return Ok(());
    }

    display_summary(&estimate(&plan));

    let save = prompt_yes_no(&format!("Save plan to {}?", path.display()), true)?;
    if save {
        save_plan(path, &plan)?;
        println!("Meal plan saved.");
    }

    Ok(())
}
