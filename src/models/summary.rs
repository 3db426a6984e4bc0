use serde::Serialize;

/// Estimate for a single meal.
///
/// `kcal` is already rounded; the gram values are not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MealEstimate {
    pub kcal: u64,
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
}

/// Day totals with the macro-energy split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MacroTotals {
    pub total_kcal: u64,
    pub protein_g: u64,
    pub carb_g: u64,
    pub fat_g: u64,
    pub protein_pct: u64,
    pub carb_pct: u64,
    pub fat_pct: u64,
}

impl MacroTotals {
    /// Sum of the three macro percentages (99..=101 after rounding).
    pub fn pct_sum(&self) -> u64 {
        self.protein_pct + self.carb_pct + self.fat_pct
    }
}

/// One row of the per-meal calorie breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealCalories {
    pub name: String,
    pub suggested_time: Option<String>,
    pub kcal: u64,
    pub percent_of_day: u64,
}

/// Output of the estimator for a whole plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NutritionSummary {
    pub totals: MacroTotals,
    pub per_meal: Vec<MealCalories>,
    pub meal_count: usize,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl NutritionSummary {
    /// Largest single-meal kcal, at least 1 so it can divide bar widths.
    pub fn max_meal_kcal(&self) -> u64 {
        self.per_meal.iter().map(|m| m.kcal).max().unwrap_or(0).max(1)
    }

    /// Serving window as `start – end`, when both ends are known.
    pub fn serving_window(&self) -> Option<String> {
        match (&self.start_time, &self.end_time) {
            (Some(start), Some(end)) => Some(format!("{} – {}", start, end)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_meal_kcal_never_zero() {
        let summary = NutritionSummary::default();
        assert_eq!(summary.max_meal_kcal(), 1);
    }

    #[test]
    fn test_serving_window() {
        let mut summary = NutritionSummary::default();
        assert_eq!(summary.serving_window(), None);

        summary.start_time = Some("07:00".to_string());
        summary.end_time = Some("19:30".to_string());
        assert_eq!(summary.serving_window().as_deref(), Some("07:00 – 19:30"));
    }
}
