use std::sync::Arc;

use anyhow::Result;

use estatelist::api::HttpPortalApi;
use estatelist::config::Config;
use estatelist::logger::init_file_logger;
use estatelist::service::PortalService;
use estatelist::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    // Check that a portal is configured before touching the terminal
    let Some(base_url) = config.endpoints.effective_base_url() else {
        eprintln!("{}", estatelist::constants::ERROR_NO_BASE_URL);
        eprintln!("\nTo use this app:");
        eprintln!("1. Set the base URL of your portal: export ESTATELIST_BASE_URL=https://portal.example.com");
        eprintln!("   (or set base_url in estatelist.toml under [endpoints])");
        eprintln!("2. Set the property id in estatelist.toml: property_id = <id>");
        eprintln!("3. Run the app again to manage your property!");
        return Ok(());
    };

    if config.logging.enabled {
        init_file_logger(&config.logging.file)?;
    }

    let api = Arc::new(HttpPortalApi::new(base_url, config.endpoints.clone()));
    let service = PortalService::new(api);

    // Run the TUI application
    ui::run_app(service, config).await?;

    Ok(())
}
