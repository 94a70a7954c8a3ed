use crate::models::{CellColor, RichCell, WarrantyRecord};

pub struct Column {
    pub header: &'static str,
    pub value: fn(&WarrantyRecord) -> String,
}

/// Ordered output columns, shared by the header row and every data row.
pub struct RowSchema {
    columns: Vec<Column>,
}

impl RowSchema {
    pub fn warranty() -> Self {
        Self {
            columns: vec![
                Column {
                    header: "ID",
                    value: |r| r.id.to_string(),
                },
                Column {
                    header: "Product Code",
                    value: |r| r.code.clone(),
                },
                Column {
                    header: "Title",
                    value: |r| r.title.clone(),
                },
                Column {
                    header: "Warranty",
                    value: |r| r.warranty.clone(),
                },
            ],
        }
    }

    pub fn warranty_with_prices() -> Self {
        let mut schema = Self::warranty();
        schema.columns.extend([
            Column {
                header: "Old Price",
                value: |r| r.old_price.clone(),
            },
            Column {
                header: "New Price",
                value: |r| r.new_price.clone(),
            },
        ]);
        schema
    }

    pub fn from_config(include_prices: bool) -> Self {
        match include_prices {
            true => Self::warranty_with_prices(),
            false => Self::warranty(),
        }
    }

    pub fn header_row(&self) -> Vec<RichCell> {
        self.columns
            .iter()
            .map(|c| {
                RichCell::text(c.header)
                    .bold()
                    .with_background(CellColor::YELLOW)
            })
            .collect()
    }

    pub fn data_row(&self, record: &WarrantyRecord) -> Vec<RichCell> {
        self.columns
            .iter()
            .map(|c| RichCell::text((c.value)(record)))
            .collect()
    }
}
