use std::sync::Arc;

use find_food::{
    app::{card::LINK_LABEL, SearchSession, SearchState},
    config::{Config, LocatorKind},
    models::SearchOptions,
    services::{
        locators::{FixedLocator, IpApiLocator, Locator},
        providers::GeminiClient,
    },
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let locator: Arc<dyn Locator> = match config.locator {
        LocatorKind::Fixed => Arc::new(FixedLocator::from_parts(
            config.latitude,
            config.longitude,
        )),
        LocatorKind::Ip => Arc::new(IpApiLocator::new(config.ip_locator_url.clone())),
    };
    let client = Arc::new(GeminiClient::new(
        config.api_key.clone(),
        config.gemini_api_url.clone(),
        config.gemini_model.clone(),
    ));

    let session = SearchSession::new(locator, client);
    let options = SearchOptions::from_selection(&config.search_time, config.search_style.clone());

    tracing::info!(time = %options.time, style = %options.style, "Starting search");
    session.search(options).await;

    match session.state().await {
        SearchState::Results(cards) => {
            println!("為您推薦的精選地點");
            for card in cards {
                println!();
                println!("{}", card.title);
                println!("  {}", card.badge);
                println!("  {}: {}", LINK_LABEL, card.uri);
                println!("  {}", card.image_url);
            }
        }
        SearchState::Failed { message } => {
            eprintln!("發生錯誤: {}", message);
            std::process::exit(1);
        }
        state @ (SearchState::Locating | SearchState::Loading { .. }) => {
            tracing::warn!(state = ?state, "Search still in flight after completion");
        }
        SearchState::Idle => {
            tracing::warn!("Search was reset before it finished");
        }
    }

    Ok(())
}
