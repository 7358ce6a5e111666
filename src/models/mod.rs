pub mod meal;

pub use meal::Meal;
