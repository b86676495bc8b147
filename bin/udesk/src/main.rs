//! Terminal front end for the user management service

use udk_app::{App, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    udk_app::tracing::init_tracing(config.env);

    App::new(&config).run().await?;

    Ok(())
}
