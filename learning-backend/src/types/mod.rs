pub mod datetime;
pub mod response;

pub use datetime::ReportTimeZone;
pub use response::ApiResponse;
