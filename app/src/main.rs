use std::time::Duration;

use app::app::App;
use client::ApiClient;
use common::{config::Config, logger};
use log::{info, warn};
use url::Url;

#[tokio::main]
async fn main() {
    let config = Config::init(".env");
    logger::init_logger(&config.log_level, &config.log_file);

    let base_url = Url::parse(&config.api_base_url).expect("API_BASE_URL must be a valid URL");
    let api = ApiClient::new(base_url);

    println!("{} ({})", config.project_name, config.api_base_url);

    // One startup probe; the pages work (and fail) the same either way.
    match api.health().await {
        Ok(health) => info!("api reachable, status: {}", health.status),
        Err(err) => warn!("api health probe failed: {err}"),
    }

    let mut app = App::new(
        api,
        Duration::from_millis(config.redirect_delay_ms),
        Duration::from_millis(config.prompt_delay_ms),
    );
    if let Err(err) = app.run().await {
        warn!("terminal session ended: {err}");
    }
}
