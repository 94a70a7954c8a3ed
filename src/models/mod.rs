pub mod product;
pub mod rich_cell;
pub mod warranty;

pub use product::Product;
pub use rich_cell::{CellColor, RichCell};
pub use warranty::WarrantyRecord;
