use crate::estimator::{
    GENERIC_PROFILE, UnitRule, match_reference, parse_quantity, resolve_unit, suggest_keyword,
};
use crate::models::{NutrientProfile, NutritionSummary};

/// Width of the longest per-meal bar.
const BAR_WIDTH: usize = 30;

/// A bar proportional to `kcal / max_kcal`, at least one cell for non-zero meals.
pub fn kcal_bar(kcal: u64, max_kcal: u64, width: usize) -> String {
    if kcal == 0 || max_kcal == 0 {
        return String::new();
    }
    let cells = (kcal as f64 / max_kcal as f64 * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

/// Display a nutrition summary with totals, macros and per-meal bars.
pub fn display_summary(summary: &NutritionSummary) {
    let totals = &summary.totals;

    println!();
    println!("=== Nutrition Estimate ===");
    println!();
    println!("Total calories: {} kcal", totals.total_kcal);
    println!(
        "Protein: {:>4} g ({:>3}%)  Carbs: {:>4} g ({:>3}%)  Fat: {:>4} g ({:>3}%)",
        totals.protein_g,
        totals.protein_pct,
        totals.carb_g,
        totals.carb_pct,
        totals.fat_g,
        totals.fat_pct
    );
    println!();

    if summary.per_meal.is_empty() {
        println!("No meals in plan.");
        println!();
        return;
    }

    let max_name_len = summary.per_meal.iter().map(|m| m.name.chars().count()).max().unwrap_or(10);
    let max_kcal = summary.max_meal_kcal();

    for meal in &summary.per_meal {
        println!(
            "{:<width$}  {:>5}  {:>5} kcal {:>3}%  {}",
            meal.name,
            meal.suggested_time.as_deref().unwrap_or("-"),
            meal.kcal,
            meal.percent_of_day,
            kcal_bar(meal.kcal, max_kcal, BAR_WIDTH),
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Meals: {}", summary.meal_count);
    println!(
        "Serving window: {}",
        summary.serving_window().unwrap_or_else(|| "—".to_string())
    );
    println!();
}

fn profile_line(profile: &NutrientProfile) -> String {
    format!(
        "{} kcal, P:{} C:{} F:{} per 100 g",
        profile.kcal, profile.protein_g, profile.carb_g, profile.fat_g
    )
}

/// Display which reference group a food name resolves to.
pub fn display_lookup(item_name: &str) {
    let lowered = item_name.to_lowercase();
    match match_reference(item_name) {
        Some(group) => {
            let keyword = group.matching_keyword(&lowered).unwrap_or_default();
            println!("{} -> matched '{}' [{}]", item_name, keyword, group.keywords.join(", "));
            println!("  {}", profile_line(&group.profile));
        }
        None => {
            println!("{} -> no keyword matched, generic profile", item_name);
            println!("  {}", profile_line(&GENERIC_PROFILE));
            if let Some((keyword, _)) = suggest_keyword(item_name) {
                println!("  Closest keyword: '{}'", keyword);
            }
        }
    }
}

/// Display the unit rule and resulting grams for a measure.
pub fn display_grams(quantity: Option<&str>, unit: &str) {
    let q = parse_quantity(quantity);
    let rule = resolve_unit(Some(unit));
    let grams = rule.grams(q);

    let how = match rule {
        UnitRule::PerUnit(g) => format!("{} × {} g", q, g),
        UnitRule::Fixed(g) => format!("fixed {} g", g),
    };
    println!("{} {} -> {} ({:.1} g)", quantity.unwrap_or("1"), unit, how, grams);
}
