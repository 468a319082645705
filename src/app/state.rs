use crate::{app::card::RecommendationCard, models::SearchOptions};

/// Shown while waiting for a position
pub const LOCATING_MESSAGE: &str = "正在獲取您的位置...";

/// Where a search is in its lifecycle
///
/// Only one of loading, error, or results is ever shown; an error never carries
/// partial results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Locating,
    Loading { message: String },
    Results(Vec<RecommendationCard>),
    Failed { message: String },
}

impl SearchState {
    pub fn is_busy(&self) -> bool {
        matches!(self, SearchState::Locating | SearchState::Loading { .. })
    }

    /// Progress text for the spinner, if a search is in flight
    pub fn progress_message(&self) -> Option<&str> {
        match self {
            SearchState::Locating => Some(LOCATING_MESSAGE),
            SearchState::Loading { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Progress text once the position is known and the model is being queried
pub fn loading_message(options: &SearchOptions) -> String {
    let style = if options.style.is_empty() {
        String::new()
    } else {
        format!("「{}」", options.style)
    };
    format!("AI 正在搜尋附近的{}{}地點...", options.time, style)
}
