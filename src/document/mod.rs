mod export;
mod persistence;
mod sample;

pub use export::{MEAL_CSV_HEADER, save_meal_csv, write_meal_csv};
pub use persistence::{load_plan, parse_plan, save_plan};
pub use sample::generic_plan;
