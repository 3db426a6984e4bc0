use dialoguer::{Confirm, Input, Select};

use crate::error::{EstimatorError, Result};
use crate::estimator::{match_reference, suggest_keyword};
use crate::models::{Item, Meal, MealPlan};

/// Units offered in the composer, in the same vocabulary the estimator knows.
const COMMON_UNITS: &[&str] = &[
    "g",
    "ml",
    "unidade",
    "fatia",
    "colher de sopa",
    "colher de servir",
    "concha",
    "xícara",
    "pote 170g",
];

fn optional_text(prompt: &str) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    Ok(if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    })
}

/// Prompt for a serving time such as "07:30"; empty leaves it unset.
pub fn prompt_time(meal_name: &str) -> Result<Option<String>> {
    let time = optional_text(&format!("Suggested time for '{}' (HH:MM, Enter to skip)", meal_name))?;
    if let Some(t) = &time {
        if !looks_like_time(t) {
            return Err(EstimatorError::InvalidInput(format!("'{}' is not a HH:MM time", t)));
        }
    }
    Ok(time)
}

/// Loose `H:MM` / `HH:MM` check used by the composer only.
pub fn looks_like_time(text: &str) -> bool {
    let Some((h, m)) = text.split_once(':') else {
        return false;
    };
    let hour_ok = matches!(h.parse::<u32>(), Ok(v) if v < 24) && (1..=2).contains(&h.len());
    let minute_ok = matches!(m.parse::<u32>(), Ok(v) if v < 60) && m.len() == 2;
    hour_ok && minute_ok
}

/// Prompt for a unit, offering the known household measures first.
pub fn prompt_unit() -> Result<Option<String>> {
    let mut options: Vec<&str> = COMMON_UNITS.to_vec();
    options.push("other...");
    options.push("none");

    let selection = Select::new()
        .with_prompt("Unit")
        .items(&options)
        .default(0)
        .interact()?;

    match selection {
        i if i < COMMON_UNITS.len() => Ok(Some(COMMON_UNITS[i].to_string())),
        i if i == COMMON_UNITS.len() => optional_text("Unit (free text)"),
        _ => Ok(None),
    }
}

/// Prompt for the items of one meal until an empty name is entered.
pub fn prompt_items() -> Result<Vec<Item>> {
    let mut items = Vec::new();

    loop {
        let Some(name) = optional_text("Food (or press Enter to finish)")? else {
            break;
        };

        if match_reference(&name).is_none() {
            match suggest_keyword(&name) {
                Some((keyword, _)) => println!(
                    "No reference entry for '{}', generic values will be used (closest: '{}')",
                    name, keyword
                ),
                None => println!("No reference entry for '{}', generic values will be used", name),
            }
        }

        let quantity = optional_text("Quantity (Enter for 1)")?;
        let unit = prompt_unit()?;

        items.push(Item {
            name,
            quantity,
            unit,
        });
    }

    Ok(items)
}

/// Interactively compose a meal plan.
pub fn compose_plan() -> Result<MealPlan> {
    let mut meals = Vec::new();

    loop {
        let Some(name) = optional_text("Meal name (or press Enter to finish)")? else {
            break;
        };

        let suggested_time = prompt_time(&name)?;
        let description = optional_text("Description (optional)")?.unwrap_or_default();
        let items = prompt_items()?;

        if items.is_empty() {
            println!("No items for '{}', the meal will be estimated from its name.", name);
        }

        meals.push(Meal {
            name,
            suggested_time,
            description,
            notes: None,
            items: if items.is_empty() { None } else { Some(items) },
        });
    }

    Ok(MealPlan::new(meals))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
