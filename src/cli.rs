use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// MealEstimator: estimates calories and macronutrients for a meal plan.
#[derive(Parser, Debug)]
#[command(name = "meal_estimator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal plan JSON file.
    #[arg(short, long, default_value = "meal_plan.json", global = true)]
    pub file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate the meal plan and display the summary.
    Estimate {
        /// Print the summary as JSON instead of a table.
        #[arg(long)]
        json: bool,

        /// Also write the per-meal breakdown to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Print the built-in example plan as JSON.
    Sample {
        /// Write the plan to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the reference profile a food name resolves to.
    Lookup {
        /// Food name, e.g. "Pão integral".
        name: String,
    },

    /// Convert a household measure to grams.
    Grams {
        /// Unit text, e.g. "fatia" or "colher de sopa".
        unit: String,

        /// Quantity; defaults to 1.
        #[arg(short, long)]
        quantity: Option<String>,
    },

    /// Build a meal plan interactively and estimate it.
    Compose {
        /// Save the plan here instead of the `--file` path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Estimate {
            json: false,
            csv: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_estimate() {
        let cli = Cli::try_parse_from(["meal_estimator"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(
            cli.command.unwrap_or_default(),
            Command::Estimate { json: false, csv: None }
        ));
        assert_eq!(cli.file, PathBuf::from("meal_plan.json"));
    }

    #[test]
    fn test_compose_output() {
        let cli = Cli::try_parse_from(["meal_estimator", "compose", "--output", "dia.json"]).unwrap();
        match cli.command {
            Some(Command::Compose { output }) => {
                assert_eq!(output, Some(PathBuf::from("dia.json")))
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["meal_estimator", "compose", "-f", "plano.json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Compose { output: None })));
        assert_eq!(cli.file, PathBuf::from("plano.json"));
    }
}
