pub const UNKNOWN: &str = "unknown";
pub const UNRESOLVED_ID: i64 = -1;

/// Resolved warranty data for one product code, defaults filling the gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct WarrantyRecord {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub warranty: String,
    pub old_price: String,
    pub new_price: String,
}

impl WarrantyRecord {
    pub fn unresolved(code: &str) -> Self {
        WarrantyRecord {
            id: UNRESOLVED_ID,
            code: code.to_string(),
            title: UNKNOWN.to_string(),
            warranty: UNKNOWN.to_string(),
            old_price: UNKNOWN.to_string(),
            new_price: UNKNOWN.to_string(),
        }
    }
}

/// Rounds on the exact binary value, so 2.675 renders as "2.67".
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("{:.2}", price),
        None => UNKNOWN.to_string(),
    }
}
