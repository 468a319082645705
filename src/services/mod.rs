pub mod imagery;
pub mod locators;
pub mod normalizer;
pub mod prompt;
pub mod providers;
pub mod recommendations;

pub use recommendations::{fetch_recommendations, find_nearby};
