pub mod plan;
pub mod profile;
pub mod summary;

pub use plan::{Item, Meal, MealPlan};
pub use profile::NutrientProfile;
pub use summary::{MacroTotals, MealCalories, MealEstimate, NutritionSummary};
