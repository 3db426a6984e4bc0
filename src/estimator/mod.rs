pub mod aggregate;
pub mod constants;
pub mod meal;
pub mod reference;
pub mod units;

pub use aggregate::{estimate, macro_percentages};
pub use constants::*;
pub use meal::{estimate_meal, slot_kcal, split_macros, MEAL_SLOT_KCAL};
pub use reference::{
    lookup_nutrients, match_reference, suggest_keyword, ReferenceGroup, REFERENCE_TABLE,
};
pub use units::{grams_for, parse_quantity, resolve_unit, UnitMatcher, UnitRule, UNIT_RULES};
