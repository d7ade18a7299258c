use folio_server::api::setup::setup_logging;
use folio_server::start_main_server;
use folio_settings::{FolioServerConfig, LoggingSettings};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // setup logging first so config warnings are captured, soft fail if it fails
    if let Err(e) = setup_logging(&LoggingSettings::default()).await {
        eprintln!("Failed to setup logging: {e:?}");
    }

    let config = FolioServerConfig::default();

    start_main_server(config).await
}
