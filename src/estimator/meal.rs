use tracing::{debug, trace};

use crate::estimator::constants::*;
use crate::estimator::reference::lookup_nutrients;
use crate::estimator::units::grams_for;
use crate::models::{Meal, MealEstimate, NutrientProfile};

/// Default kcal per canonical meal slot, matched by substring in this order.
pub static MEAL_SLOT_KCAL: &[(&str, f64)] = &[
    ("café da manhã", 380.0),
    ("lanche da manhã", 150.0),
    ("almoço", 650.0),
    ("lanche da tarde", 200.0),
    ("jantar", 520.0),
];

/// Heuristic kcal for a meal without items, from its name alone.
pub fn slot_kcal(meal_name: &str) -> f64 {
    let lowered = meal_name.to_lowercase();
    MEAL_SLOT_KCAL
        .iter()
        .find(|(slot, _)| lowered.contains(slot))
        .map(|(_, kcal)| *kcal)
        .unwrap_or(DEFAULT_MEAL_KCAL)
}

/// Macro grams for an energy amount under the fixed 25/50/25 split.
pub fn split_macros(kcal: f64) -> (f64, f64, f64) {
    (
        kcal * FALLBACK_PROTEIN_SHARE / KCAL_PER_G_PROTEIN,
        kcal * FALLBACK_CARB_SHARE / KCAL_PER_G_CARB,
        kcal * FALLBACK_FAT_SHARE / KCAL_PER_G_FAT,
    )
}

/// Estimate one meal.
///
/// Item-bearing meals sum their scaled reference profiles; others use the
/// meal-slot heuristic. Only kcal is rounded.
pub fn estimate_meal(meal: &Meal) -> MealEstimate {
    let items = meal.items();

    let raw = if items.is_empty() {
        let kcal = slot_kcal(&meal.name);
        debug!(meal = %meal.name, kcal, "meal has no items, using slot heuristic");
        let (protein_g, carb_g, fat_g) = split_macros(kcal);
        NutrientProfile::new(kcal, protein_g, carb_g, fat_g)
    } else {
        items.iter().fold(NutrientProfile::new(0.0, 0.0, 0.0, 0.0), |acc, item| {
            let grams = grams_for(item.quantity.as_deref(), item.unit.as_deref());
            let part = lookup_nutrients(&item.name).scaled(grams);
            trace!(item = %item.name, grams, kcal = part.kcal, "estimated item");
            NutrientProfile::new(
                acc.kcal + part.kcal,
                acc.protein_g + part.protein_g,
                acc.carb_g + part.carb_g,
                acc.fat_g + part.fat_g,
            )
        })
    };

    MealEstimate {
        kcal: round_nonneg(raw.kcal),
        protein_g: raw.protein_g,
        carb_g: raw.carb_g,
        fat_g: raw.fat_g,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    #[test]
    fn test_slot_kcal() {
        assert_eq!(slot_kcal("Café da manhã"), 380.0);
        assert_eq!(slot_kcal("LANCHE DA MANHÃ"), 150.0);
        assert_eq!(slot_kcal("Almoço de domingo"), 650.0);
        assert_eq!(slot_kcal("Lanche da tarde"), 200.0);
        assert_eq!(slot_kcal("Jantar"), 520.0);
        assert_eq!(slot_kcal("Ceia"), DEFAULT_MEAL_KCAL);
    }

    #[test]
    fn test_lunch_without_items() {
        let estimate = estimate_meal(&Meal::new("Almoço"));
        assert_eq!(estimate.kcal, 650);
        assert!((estimate.protein_g - 40.625).abs() < 1e-9);
        assert!((estimate.carb_g - 81.25).abs() < 1e-9);
        assert!((estimate.fat_g - 18.0556).abs() < 1e-3);
    }

    #[test]
    fn test_empty_item_list_uses_heuristic() {
        let mut meal = Meal::new("Jantar");
        meal.items = Some(Vec::new());
        assert_eq!(estimate_meal(&meal).kcal, 520);
    }

    #[test]
    fn test_breakfast_items() {
        let meal = Meal::new("Café da manhã")
            .with_item(Item::new("Pão integral", "2", "fatia"))
            .with_item(Item::new("Banana", "1", "unidade"));

        let estimate = estimate_meal(&meal);
        assert_eq!(estimate.kcal, 219);
        // 60 g bread + 100 g banana
        assert!((estimate.protein_g - 6.4).abs() < 1e-9);
        assert!((estimate.carb_g - 44.4).abs() < 1e-9);
        assert!((estimate.fat_g - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_food_100g() {
        let meal = Meal::new("Ceia").with_item(Item::new("xyz-unrecognized-food", "100", "g"));
        let estimate = estimate_meal(&meal);
        assert_eq!(estimate.kcal, 120);
        assert!((estimate.protein_g - 5.0).abs() < 1e-9);
        assert!((estimate.carb_g - 15.0).abs() < 1e-9);
        assert!((estimate.fat_g - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_kcal_is_rounded() {
        // 200 ml juice: 204 g * 0.45 = 91.8 kcal
        let meal = Meal::new("Lanche").with_item(Item::new("Suco de uva", "200", "ml"));
        assert_eq!(estimate_meal(&meal).kcal, 92);
    }
}
