use crate::models::NutrientProfile;

/// Energy density of protein (kcal per gram).
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// Energy density of carbohydrate (kcal per gram).
pub const KCAL_PER_G_CARB: f64 = 4.0;

/// Energy density of fat (kcal per gram).
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Fallbacks
// ─────────────────────────────────────────────────────────────────────────────

/// Profile used when no keyword group matches a food name.
pub const GENERIC_PROFILE: NutrientProfile = NutrientProfile::new(120.0, 5.0, 15.0, 4.0);

/// Meal kcal when neither items nor a known meal-slot name are present.
pub const DEFAULT_MEAL_KCAL: f64 = 400.0;

/// Share of energy attributed to protein in the no-items heuristic.
pub const FALLBACK_PROTEIN_SHARE: f64 = 0.25;

/// Share of energy attributed to carbohydrate in the no-items heuristic.
pub const FALLBACK_CARB_SHARE: f64 = 0.50;

/// Share of energy attributed to fat in the no-items heuristic.
pub const FALLBACK_FAT_SHARE: f64 = 0.25;

/// Macro percentages reported when the plan yields no macro energy at all.
pub const DEFAULT_PROTEIN_PCT: u64 = 33;
pub const DEFAULT_CARB_PCT: u64 = 44;
pub const DEFAULT_FAT_PCT: u64 = 23;

// ─────────────────────────────────────────────────────────────────────────────
// Units
// ─────────────────────────────────────────────────────────────────────────────

/// Quantity assumed when the quantity text is absent, unparsable or not positive.
pub const DEFAULT_QUANTITY: f64 = 1.0;

/// Grams per unit when the unit matches no rule ("average serving").
pub const FALLBACK_GRAMS_PER_UNIT: f64 = 50.0;

/// Approximate density applied to millilitres.
pub const GRAMS_PER_ML: f64 = 1.02;

/// Fixed mass of a 170 g yogurt pot.
pub const POT_170_GRAMS: f64 = 170.0;

/// Round to the nearest integer, halves up, clamped to `0..=u64::MAX`.
pub fn round_nonneg(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}
