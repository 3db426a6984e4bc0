use tracing::debug;

use crate::estimator::constants::*;
use crate::estimator::meal::estimate_meal;
use crate::models::{MacroTotals, MealCalories, MealPlan, NutritionSummary};

/// Macro-energy percentages from rounded gram totals.
///
/// Returns the fixed default split when the grams carry no energy.
pub fn macro_percentages(protein_g: u64, carb_g: u64, fat_g: u64) -> (u64, u64, u64) {
    let from_protein = protein_g as f64 * KCAL_PER_G_PROTEIN;
    let from_carb = carb_g as f64 * KCAL_PER_G_CARB;
    let from_fat = fat_g as f64 * KCAL_PER_G_FAT;
    let total = from_protein + from_carb + from_fat;

    if total <= 0.0 {
        return (DEFAULT_PROTEIN_PCT, DEFAULT_CARB_PCT, DEFAULT_FAT_PCT);
    }

    (
        round_nonneg(from_protein / total * 100.0),
        round_nonneg(from_carb / total * 100.0),
        round_nonneg(from_fat / total * 100.0),
    )
}

/// Estimate a whole plan in a single pass over its meals.
///
/// The day total saturates at `u64::MAX` rather than overflowing.
pub fn estimate(plan: &MealPlan) -> NutritionSummary {
    let mut total_kcal: u64 = 0;
    let (mut protein, mut carb, mut fat) = (0.0_f64, 0.0_f64, 0.0_f64);
    let mut per_meal = Vec::with_capacity(plan.meals.len());

    for meal in &plan.meals {
        let est = estimate_meal(meal);
        total_kcal = total_kcal.saturating_add(est.kcal);
        protein += est.protein_g;
        carb += est.carb_g;
        fat += est.fat_g;

        per_meal.push(MealCalories {
            name: meal.name.clone(),
            suggested_time: meal.time().map(str::to_string),
            kcal: est.kcal,
            percent_of_day: 0,
        });
    }

    for row in &mut per_meal {
        row.percent_of_day = if total_kcal > 0 {
            round_nonneg(row.kcal as f64 / total_kcal as f64 * 100.0)
        } else {
            0
        };
    }

    let protein_g = round_nonneg(protein);
    let carb_g = round_nonneg(carb);
    let fat_g = round_nonneg(fat);
    let (protein_pct, carb_pct, fat_pct) = macro_percentages(protein_g, carb_g, fat_g);

    let mut times = plan.meals.iter().filter_map(|m| m.time());
    let start_time = times.next().map(str::to_string);
    let end_time = times.last().map(str::to_string).or_else(|| start_time.clone());

    debug!(
        meals = plan.meals.len(),
        total_kcal, protein_g, carb_g, fat_g, "estimated plan"
    );

    NutritionSummary {
        totals: MacroTotals {
            total_kcal,
            protein_g,
            carb_g,
            fat_g,
            protein_pct,
            carb_pct,
            fat_pct,
        },
        per_meal,
        meal_count: plan.meals.len(),
        start_time,
        end_time,
    }
}
