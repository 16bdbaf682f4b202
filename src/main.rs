use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bloodbank_client::headless::HeadlessPage;
use bloodbank_client::storage::FileStore;
use bloodbank_client::{BloodBankClient, ClientConfig, FormController, FormTimings, ThemeToggle};

const THEME_FILE_VAR: &str = "BLOODBANK_THEME_FILE";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let timings = match FormTimings::from_env() {
        Ok(timings) => timings,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match BloodBankClient::from_config(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // Load the page the way a browser would on DOMContentLoaded
    let page = Arc::new(HeadlessPage::new());
    let theme_file = env::var(THEME_FILE_VAR)
        .map(Into::into)
        .unwrap_or_else(|_| env::temp_dir().join("bloodbank-theme.json"));
    let store = Arc::new(FileStore::new(&theme_file));
    info!("Theme preferences stored at {}", store.path().display());
    let toggle = ThemeToggle::install(page.clone(), store);
    info!("Theme: {:?}", toggle.mode());

    let controller = FormController::new(client, page).with_timings(timings);
    info!("Checking backend at {}", config.base_url);

    match controller.page_ready().await {
        Ok(result) if result.success() => {
            info!("Backend healthy: {}", result.data().cloned().unwrap_or_default());
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("Health check task failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
