pub mod holding;
pub mod holdings_data;
pub mod summary;

pub use holding::Holding;
pub use holdings_data::HoldingsData;
pub use summary::Summary;
