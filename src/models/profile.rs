use serde::Serialize;

/// Energy and macronutrients per 100 g of a food.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientProfile {
    pub kcal: f64,
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
}

impl NutrientProfile {
    pub const fn new(kcal: f64, protein_g: f64, carb_g: f64, fat_g: f64) -> Self {
        Self {
            kcal,
            protein_g,
            carb_g,
            fat_g,
        }
    }

    /// Scale the per-100 g values to an actual mass in grams.
    pub fn scaled(&self, grams: f64) -> Self {
        let f = grams / 100.0;
        Self {
            kcal: self.kcal * f,
            protein_g: self.protein_g * f,
            carb_g: self.carb_g * f,
            fat_g: self.fat_g * f,
        }
    }
}
