pub mod prompts;
pub mod render;

pub use prompts::{compose_plan, prompt_items, prompt_time, prompt_unit, prompt_yes_no};
pub use render::{display_grams, display_lookup, display_summary, kcal_bar};
