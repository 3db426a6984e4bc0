pub mod cli;
pub mod document;
pub mod error;
pub mod estimator;
pub mod interface;
pub mod models;

pub use error::{EstimatorError, Result};
pub use estimator::{estimate, estimate_meal, grams_for, lookup_nutrients};
pub use models::{Item, Meal, MealPlan, NutrientProfile, NutritionSummary};
