pub mod csv;
pub mod json;

pub use csv::{write_response, write_response_file};
pub use json::{write_summary, write_summary_file, ResponseSummary};
