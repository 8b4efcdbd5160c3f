pub mod export;
pub mod grouper;
pub mod report;
pub mod session;

pub use export::write_csv;
pub use grouper::group_invoices;
pub use report::ReportService;
pub use session::{ReportSession, SearchTicket};
