use super::SheetOperations;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::RichCell;
use crate::sheets::auth::create_and_verify_authenticator;
use crate::sheets::formatting::update_row_request;
use async_trait::async_trait;
use google_sheets4::api::{BatchUpdateSpreadsheetRequest, Scope, Sheets};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use tracing::{debug, error, instrument};

// Read/write access to spreadsheets the service account can see
pub(crate) const AUTH_SCOPE: Scope = Scope::Spreadsheet;

/// Next row to write. Only moves forward, and only after a successful write.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct RowCursor(i32);

impl RowCursor {
    pub(super) fn row(&self) -> i32 {
        self.0
    }

    pub(super) fn advance(&mut self) {
        self.0 += 1;
    }
}

/// Sends one batch update to the target spreadsheet.
#[async_trait]
pub trait BatchUpdate {
    async fn batch_update(&self, request: BatchUpdateSpreadsheetRequest) -> Result<()>;
}

pub struct SheetsHub {
    hub: Sheets<HttpsConnector<HttpConnector>>,
    spreadsheet_id: String,
}

#[async_trait]
impl BatchUpdate for SheetsHub {
    async fn batch_update(&self, request: BatchUpdateSpreadsheetRequest) -> Result<()> {
        self.hub
            .spreadsheets()
            .batch_update(request, &self.spreadsheet_id)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| {
                error!(file_id = %self.spreadsheet_id, error = %e, "Failed to update spreadsheet");
                AppError::Sheets(format!("Failed to update spreadsheet: {}", e))
            })?;
        Ok(())
    }
}

pub struct SheetsRecorder<U = SheetsHub> {
    updater: U,
    sheet_id: Option<i32>,
    cursor: RowCursor,
}

impl SheetsRecorder<SheetsHub> {
    /// Create a new SheetsRecorder with authenticated access
    #[instrument(name = "Authenticating to Google Sheets", skip_all)]
    pub async fn new(config: &Config) -> Result<Self> {
        let auth = create_and_verify_authenticator(&config.google_credentials).await?;

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .map_err(|e| AppError::Sheets(format!("Failed to load native roots: {}", e)))?
            .https_or_http()
            .enable_http1()
            .build();

        let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(connector);

        let updater = SheetsHub {
            hub: Sheets::new(client, auth),
            spreadsheet_id: config.file_id.clone(),
        };

        Ok(Self::with_updater(updater, config.sheet_id))
    }

    pub fn spreadsheet_url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}",
            self.updater.spreadsheet_id
        )
    }
}

impl<U> SheetsRecorder<U> {
    fn with_updater(updater: U, sheet_id: Option<i32>) -> Self {
        Self {
            updater,
            sheet_id,
            cursor: RowCursor::default(),
        }
    }
}

#[async_trait]
impl<U> SheetOperations for SheetsRecorder<U>
where
    U: BatchUpdate + Send + Sync,
{
    #[instrument(name = "Writing row", skip_all)]
    async fn put_rich(&mut self, cells: &[RichCell]) -> Result<()> {
        let row = self.cursor.row();
        let batch_update = BatchUpdateSpreadsheetRequest {
            requests: Some(vec![update_row_request(self.sheet_id, row, cells)]),
            ..Default::default()
        };

        self.updater.batch_update(batch_update).await?;

        debug!(row, "Row written");
        self.cursor.advance();

        Ok(())
    }
}
