pub mod calculated;
pub mod company;
pub mod company_filter;
pub mod period;
pub mod work_entry;

pub use calculated::CalculatedEntry;
pub use company::{Company, NewCompany};
pub use company_filter::CompanyFilter;
pub use period::YearMonth;
pub use work_entry::{NewWorkEntry, WorkEntry};
