//! In-memory job listing with search, chip filters, a salary range and the
//! available/applied tab split.

mod board;
pub mod criteria;
pub mod domain;
pub mod salary;

pub use board::{BoardTab, BoardView, JobBoard};
pub use criteria::{FilterCriteria, SalaryBounds};
pub use domain::{seed_postings, JobPosting};
pub use salary::parse_leading_salary;
