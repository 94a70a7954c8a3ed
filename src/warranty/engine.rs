use crate::config::{Config, FooterConfig};
use crate::error::{AppError, Result};
use crate::models::RichCell;
use crate::sheets::SheetOperations;
use crate::vendor::VendorOperations;
use crate::warranty::{RowSchema, WarrantyResolver};
use chrono::{DateTime, Utc};
use indicatif::ProgressStyle;
use std::time::Duration;
use tracing::{Span, error, info, instrument, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct RunConfig {
    pub product_codes: Vec<String>,
    pub delay: Duration,
    pub schema: RowSchema,
    pub footer: FooterConfig,
}

impl From<&Config> for RunConfig {
    fn from(config: &Config) -> Self {
        RunConfig {
            product_codes: config.product_codes.clone(),
            delay: config.delay(),
            schema: RowSchema::from_config(config.include_prices),
            footer: config.footer.clone(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_written: usize,
    pub unresolved: usize,
    pub aborted: bool,
    pub trailer_complete: bool,
}

pub struct WarrantyEngine<VC, SC> {
    config: RunConfig,
    resolver: WarrantyResolver<VC>,
    recorder: SC,
}

impl<VC, SC> WarrantyEngine<VC, SC>
where
    VC: VendorOperations + Sync,
    SC: SheetOperations + Send,
{
    pub fn new(config: RunConfig, vendor_client: VC, recorder: SC) -> Self {
        Self {
            config,
            resolver: WarrantyResolver::new(vendor_client),
            recorder,
        }
    }

    /// Header, one row per product code in order, then start/end time and footer.
    #[instrument(name = "Collecting warranties", skip_all)]
    pub async fn run(&mut self) -> Result<RunSummary> {
        let span = Span::current();
        span.pb_set_style(
            &ProgressStyle::with_template(
                "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
            )
            .map_err(|e| AppError::Other(e.into()))?,
        );
        span.pb_set_length(self.config.product_codes.len() as u64);
        span.pb_set_message("Fetching warranties");

        let mut summary = RunSummary::default();
        let start_at = Utc::now();

        let header = self.config.schema.header_row();
        match self.recorder.put_rich(&header).await {
            Ok(()) => {
                summary.rows_written += 1;
                self.pace().await;
            }
            Err(e) => error!(error = %e, "Failed to record header"),
        }

        for code in &self.config.product_codes {
            let resolution = self.resolver.fetch_by_code(code).await;
            if let Some(e) = &resolution.error {
                summary.unresolved += 1;
                warn!(error = %e, product_code = %code, "Failed to fetch warranty by code");
            }

            let row = self.config.schema.data_row(&resolution.record);
            if let Err(e) = self.recorder.put_rich(&row).await {
                error!(error = %e, product_code = %code, "Failed to record warranty row");
                summary.aborted = true;
                break;
            }
            summary.rows_written += 1;
            span.pb_inc(1);
            self.pace().await;
        }

        let end_at = Utc::now();
        self.write_trailer(start_at, end_at, &mut summary).await;

        info!(?summary, "Run finished");
        Ok(summary)
    }

    async fn write_trailer(
        &mut self,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
        summary: &mut RunSummary,
    ) {
        let trailer = [
            ("start time", timestamp_row("Start at: ", start_at)),
            ("end time", timestamp_row("End at: ", end_at)),
            ("footer", self.footer_row()),
        ];
        let last = trailer.len() - 1;

        for (idx, (name, row)) in trailer.into_iter().enumerate() {
            if let Err(e) = self.recorder.put_rich(&row).await {
                error!(error = %e, "Failed to record {}", name);
                return;
            }
            summary.rows_written += 1;
            if idx < last {
                self.pace().await;
            }
        }

        summary.trailer_complete = true;
    }

    fn footer_row(&self) -> Vec<RichCell> {
        let footer = &self.config.footer;
        vec![
            RichCell::text(&footer.label),
            RichCell::link(&footer.link_text, &footer.link_url),
        ]
    }

    async fn pace(&self) {
        if !self.config.delay.is_zero() {
            tokio::time::sleep(self.config.delay).await;
        }
    }
}

fn timestamp_row(label: &str, at: DateTime<Utc>) -> Vec<RichCell> {
    vec![
        RichCell::text(label),
        RichCell::text(at.format(TIMESTAMP_FORMAT).to_string()).bold(),
    ]
}
