//! Admin console entry point.
//!
//! Logs in with the configured credentials, bootstraps the content store and
//! prints a per-section summary of the managed collections.

use unlsh_admin::api::ApiClient;
use unlsh_admin::auth::SessionStore;
use unlsh_admin::config::Config;
use unlsh_admin::sections::ADMIN_SECTIONS;
use unlsh_admin::store::ContentStore;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting UNLSH admin console");
    tracing::info!("API base URL: {}", config.api_base_url);

    let session = SessionStore::new();
    let api = ApiClient::new(&config.api_base_url, session.clone());

    // Log in when credentials are configured; content reads may still work
    // unauthenticated depending on the backend.
    match (&config.admin_email, &config.admin_password) {
        (Some(email), Some(password)) => {
            let auth = api.login(email, password).await?;
            tracing::info!("Logged in as {} ({})", auth.user.email, auth.user.role);
        }
        _ => {
            tracing::warn!(
                "No admin credentials configured (UNLSH_ADMIN_EMAIL / UNLSH_ADMIN_PASSWORD). \
                 Requests will be unauthenticated."
            );
        }
    }

    let store = ContentStore::new(api);
    store.fetch_collections().await?;

    let collections = store.collections();
    println!("Content overview");
    for section in ADMIN_SECTIONS {
        println!(
            "  {:<20} {:>3} records - {}",
            section.title,
            collections.len_of(section.id),
            section.description
        );
    }

    Ok(())
}
