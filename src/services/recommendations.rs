use crate::{
    error::{AppError, AppResult},
    models::{Coordinates, RecommendationResult, SearchOptions},
    services::{locators::Locator, normalizer, prompt, providers::GroundingClient},
};

/// Fetches grounded place recommendations near `coords`
///
/// Makes exactly one upstream call: builds the prompt, asks the model for
/// map-grounded places, and normalizes the returned chunks. An empty normalized
/// list is `NoResultsFound`; any upstream failure is `UpstreamRequestFailed`.
pub async fn fetch_recommendations(
    client: &dyn GroundingClient,
    coords: Coordinates,
    options: &SearchOptions,
) -> AppResult<RecommendationResult> {
    let prompt = prompt::build_prompt(&coords, options);

    let chunks = client
        .grounded_places(&prompt, coords)
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                provider = client.name(),
                "Error fetching recommendations"
            );
            match e {
                AppError::UpstreamRequestFailed(_) => e,
                other => AppError::UpstreamRequestFailed(other.to_string()),
            }
        })?;

    let recommendations = normalizer::normalize(&chunks);

    tracing::info!(
        latitude = coords.latitude,
        longitude = coords.longitude,
        time = %options.time,
        style = %options.style,
        chunks = chunks.len(),
        results = recommendations.len(),
        provider = client.name(),
        "Recommendations fetched"
    );

    if recommendations.is_empty() {
        return Err(AppError::NoResultsFound);
    }

    Ok(RecommendationResult {
        summary: String::new(),
        recommendations,
    })
}

/// Locates the caller, then fetches recommendations for that position
///
/// The model is never called when location fails.
pub async fn find_nearby(
    locator: &dyn Locator,
    client: &dyn GroundingClient,
    options: &SearchOptions,
) -> AppResult<RecommendationResult> {
    let coords = locator.acquire().await.map_err(|e| {
        tracing::warn!(error = %e, locator = locator.name(), "Location lookup failed");
        AppError::from(e)
    })?;

    fetch_recommendations(client, coords, options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::GeolocationError,
        models::GroundingChunk,
        services::{locators::MockLocator, providers::MockGroundingClient},
    };
    use mockall::predicate::{always, eq};

    fn taipei() -> Coordinates {
        Coordinates::new(25.03, 121.56)
    }

    fn client_returning(chunks: Vec<GroundingChunk>) -> MockGroundingClient {
        let mut client = MockGroundingClient::new();
        client.expect_name().return_const("mock");
        client
            .expect_grounded_places()
            .with(always(), eq(taipei()))
            .times(1)
            .returning(move |_, _| Ok(chunks.clone()));
        client
    }

    #[tokio::test]
    async fn test_lunch_search_dedups_in_first_seen_order() {
        let client = client_returning(vec![
            GroundingChunk::maps("鼎泰豐", "https://maps.google.com/?cid=1"),
            GroundingChunk::maps("春水堂", "https://maps.google.com/?cid=2"),
            GroundingChunk::maps("鼎泰豐 101", "https://maps.google.com/?cid=1"),
        ]);

        let result = fetch_recommendations(&client, taipei(), &SearchOptions::new("午餐", ""))
            .await
            .unwrap();

        assert_eq!(result.summary, "");
        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.recommendations[0].title, "鼎泰豐");
        assert_eq!(result.recommendations[1].title, "春水堂");
    }

    #[tokio::test]
    async fn test_prompt_carries_filters() {
        let mut client = MockGroundingClient::new();
        client.expect_name().return_const("mock");
        client
            .expect_grounded_places()
            .withf(|prompt, _| prompt.contains("「午餐」") && prompt.contains("「拉麵」"))
            .times(1)
            .returning(|_, _| Ok(vec![GroundingChunk::maps("一蘭", "uri-1")]));

        let result =
            fetch_recommendations(&client, taipei(), &SearchOptions::new("午餐", "拉麵")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_no_valid_chunks_is_no_results() {
        let client = client_returning(vec![GroundingChunk { maps: None }]);

        let result = fetch_recommendations(&client, taipei(), &SearchOptions::default()).await;

        assert!(matches!(result, Err(AppError::NoResultsFound)));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_surfaced() {
        let mut client = MockGroundingClient::new();
        client.expect_name().return_const("mock");
        client
            .expect_grounded_places()
            .times(1)
            .returning(|_, _| Err(AppError::UpstreamRequestFailed("503".to_string())));

        let result = fetch_recommendations(&client, taipei(), &SearchOptions::default()).await;

        match result {
            Err(AppError::UpstreamRequestFailed(msg)) => assert_eq!(msg, "503"),
            other => panic!("expected upstream failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_permission_denied_skips_model_call() {
        let mut locator = MockLocator::new();
        locator.expect_name().return_const("mock");
        locator
            .expect_acquire()
            .times(1)
            .returning(|| Err(GeolocationError::PermissionDenied));

        let mut client = MockGroundingClient::new();
        client.expect_name().return_const("mock");
        client.expect_grounded_places().never();

        let result = find_nearby(&locator, &client, &SearchOptions::default()).await;

        assert!(matches!(
            result,
            Err(AppError::Geolocation(GeolocationError::PermissionDenied))
        ));
    }

    #[tokio::test]
    async fn test_find_nearby_passes_located_coordinates() {
        let mut locator = MockLocator::new();
        locator.expect_name().return_const("mock");
        locator.expect_acquire().times(1).returning(|| Ok(taipei()));

        let client = client_returning(vec![GroundingChunk::maps("春水堂", "uri-2")]);

        let result = find_nearby(&locator, &client, &SearchOptions::default())
            .await
            .unwrap();

        assert_eq!(result.recommendations.len(), 1);
    }
}
