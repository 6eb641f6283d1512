//! Business logic services for the Mini Inventory server

pub mod product;
pub mod summary;
pub mod transaction;

pub use product::ProductService;
pub use summary::SummaryService;
pub use transaction::TransactionService;
