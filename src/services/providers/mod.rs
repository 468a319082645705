//! Generative grounding provider abstraction
//!
//! The recommendation flow only needs one thing from a model: the grounding chunks
//! it attaches to an answer. Providers own transport, auth, and response decoding.

use crate::{
    error::AppResult,
    models::{Coordinates, GroundingChunk},
};

pub mod gemini;

pub use gemini::GeminiClient;

/// Trait for location-grounded generative models
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GroundingClient: Send + Sync {
    /// Sends `prompt` with map grounding biased to `coords`
    ///
    /// Returns the grounding chunks of the first candidate, or an empty list when
    /// the response carries none. Any transport or upstream failure is
    /// `AppError::UpstreamRequestFailed`.
    async fn grounded_places(
        &self,
        prompt: &str,
        coords: Coordinates,
    ) -> AppResult<Vec<GroundingChunk>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
