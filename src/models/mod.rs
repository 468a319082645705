use serde::{Deserialize, Serialize};

pub mod grounding;

pub use grounding::{
    Candidate, GenerateContentRequest, GenerateContentResponse, GroundingChunk,
    GroundingMetadata, MapsPlace,
};

/// A single resolved position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// User-chosen filters for one search
///
/// `time` is a meal period label (e.g. "午餐"); `style` is free text. Either may be
/// empty, in which case the prompt falls back to its default clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub time: String,
    pub style: String,
}

impl SearchOptions {
    pub fn new(time: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            style: style.into(),
        }
    }

    /// Builds options from a meal period id and a style, as the search form does
    pub fn from_selection(period_id: &str, style: impl Into<String>) -> Self {
        let time = MealPeriod::from_id(period_id)
            .map(|p| p.label().to_string())
            .unwrap_or_default();
        Self {
            time,
            style: style.into(),
        }
    }
}

/// Meal periods offered by the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealPeriod {
    Breakfast,
    Brunch,
    #[default]
    Lunch,
    Afternoon,
    Dinner,
    Latenight,
}

impl MealPeriod {
    /// All periods in display order
    pub const ALL: [MealPeriod; 6] = [
        MealPeriod::Breakfast,
        MealPeriod::Brunch,
        MealPeriod::Lunch,
        MealPeriod::Afternoon,
        MealPeriod::Dinner,
        MealPeriod::Latenight,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MealPeriod::Breakfast => "breakfast",
            MealPeriod::Brunch => "brunch",
            MealPeriod::Lunch => "lunch",
            MealPeriod::Afternoon => "afternoon",
            MealPeriod::Dinner => "dinner",
            MealPeriod::Latenight => "latenight",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealPeriod::Breakfast => "早餐",
            MealPeriod::Brunch => "早午餐",
            MealPeriod::Lunch => "午餐",
            MealPeriod::Afternoon => "下午茶",
            MealPeriod::Dinner => "晚餐",
            MealPeriod::Latenight => "宵夜",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }
}

/// One unique place returned by a search. `uri` is the dedup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub uri: String,
    /// Never populated by grounding extraction yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Outcome of a single search call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Always empty: the prompt asks the model for no prose
    pub summary: String,
    pub recommendations: Vec<Recommendation>,
}
