//! Presentation state for the search screen: idle, locating, loading, then
//! results or an error message.

pub mod card;
pub mod session;
pub mod state;

pub use card::RecommendationCard;
pub use session::{Completion, SearchSession};
pub use state::SearchState;
