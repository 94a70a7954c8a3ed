use crate::error::AppError;
use crate::models::warranty::{UNKNOWN, format_price};
use crate::models::WarrantyRecord;
use crate::vendor::VendorOperations;
use tracing::{debug, error, instrument};

/// A record is always produced; `error` says why parts of it are defaulted.
#[derive(Debug)]
pub struct Resolution {
    pub record: WarrantyRecord,
    pub error: Option<AppError>,
}

pub struct WarrantyResolver<VC> {
    client: VC,
}

impl<VC> WarrantyResolver<VC>
where
    VC: VendorOperations + Sync,
{
    pub fn new(client: VC) -> Self {
        Self { client }
    }

    #[instrument(name = "Resolving warranty", skip(self))]
    pub async fn fetch_by_code(&self, code: &str) -> Resolution {
        let mut record = WarrantyRecord::unresolved(code);

        let product = match self.client.fetch_autocomplete_product(code).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                return Resolution {
                    record,
                    error: Some(AppError::ProductNotFound(code.to_string())),
                };
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch autocomplete product");
                return Resolution {
                    record,
                    error: Some(e),
                };
            }
        };
        debug!(id = product.id, "Product found");

        record.title = product.name.display_title().unwrap_or(UNKNOWN).to_string();
        record.id = product.id;

        match self.client.get_warranty(product.id).await {
            Ok(Some(text)) if !text.is_empty() => record.warranty = text,
            Ok(_) => {}
            Err(e) => error!(error = %e, "Failed to fetch product warranty"),
        }

        record.old_price = format_price(product.price_old);
        record.new_price = format_price(product.price_new);

        Resolution {
            record,
            error: None,
        }
    }
}
