use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::MealPlan;

/// Load a meal plan from a JSON file.
///
/// Shape errors (missing `refeicoes`, non-string quantities) surface as
/// JSON errors; unknown foods and units are left to the estimator.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<MealPlan> {
    let content = fs::read_to_string(path.as_ref())?;
    let plan = parse_plan(&content)?;
    debug!(path = %path.as_ref().display(), meals = plan.meals.len(), "loaded plan");
    Ok(plan)
}

/// Parse a meal plan from JSON text.
pub fn parse_plan(json: &str) -> Result<MealPlan> {
    Ok(serde_json::from_str(json)?)
}

/// Save a meal plan as pretty JSON.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &MealPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
