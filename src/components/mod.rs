//! UI Components
//!
//! Dashboard views and reusable controls.

mod error_banner;
mod inventory_list;
mod item_detail;
mod quantity_control;

pub use error_banner::ErrorBanner;
pub use inventory_list::InventoryList;
pub use item_detail::ItemDetail;
pub use quantity_control::QuantityControl;
