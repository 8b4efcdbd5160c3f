pub mod filter;
pub mod invoice;
pub mod query;
pub mod report;
pub mod sale;

pub use filter::FilterCriteria;
pub use invoice::{Invoice, InvoiceGroups};
pub use query::{Comparison, FilterValue, OrderBy, Predicate, SalesQuery};
pub use report::{
    InvoiceView, LineView, SearchOutcome, Suggestions, NO_RECORDS_MESSAGE, SEARCH_FAILED_MESSAGE,
};
pub use sale::{format_money, SaleColumn, SaleLine, TextColumn};
