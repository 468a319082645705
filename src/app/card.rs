use crate::{models::Recommendation, services::imagery};

/// Badge shown on every card: each place comes from Maps grounding
pub const VERIFIED_BADGE: &str = "Google Maps 已驗證地點";

/// Label of the card's link
pub const LINK_LABEL: &str = "查看地圖與評論";

/// What one result card displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCard {
    pub title: String,
    pub uri: String,
    pub image_url: &'static str,
    pub badge: &'static str,
}

impl From<&Recommendation> for RecommendationCard {
    fn from(rec: &Recommendation) -> Self {
        Self {
            title: rec.title.clone(),
            uri: rec.uri.clone(),
            image_url: imagery::select_image(&rec.title),
            badge: VERIFIED_BADGE,
        }
    }
}

/// Cards in recommendation order
pub fn cards_for(recommendations: &[Recommendation]) -> Vec<RecommendationCard> {
    recommendations.iter().map(RecommendationCard::from).collect()
}
