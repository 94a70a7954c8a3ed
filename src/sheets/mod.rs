mod auth;
mod client;
mod formatting;

pub use client::SheetsRecorder;

use crate::error::Result;
use crate::models::RichCell;
use async_trait::async_trait;

#[async_trait]
pub trait SheetOperations {
    /// Write one row of cells at the current cursor row, starting at column 0.
    async fn put_rich(&mut self, cells: &[RichCell]) -> Result<()>;
}
