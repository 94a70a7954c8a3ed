use crate::config::Config;
use crate::error::Result;
use crate::sheets::SheetsRecorder;
use crate::vendor::VendorClient;
use crate::warranty::{RunConfig, WarrantyEngine};
use tracing::info;

pub async fn execute(config: Config) -> Result<()> {
    let vendor_client = VendorClient::new(config.normalized_base_url())?;
    let recorder = SheetsRecorder::new(&config).await?;
    let url = recorder.spreadsheet_url();

    let mut engine = WarrantyEngine::new(RunConfig::from(&config), vendor_client, recorder);
    let summary = engine.run().await?;

    info!(
        url = url,
        rows = summary.rows_written,
        unresolved = summary.unresolved,
        "Warranty collection completed"
    );

    Ok(())
}
