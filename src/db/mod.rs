pub mod memory;
pub mod pool;
pub mod queries;
pub mod store;

pub use memory::MemorySalesStore;
pub use pool::create_pool;
pub use queries::PgSalesStore;
pub use store::SalesStore;
