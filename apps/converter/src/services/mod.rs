pub mod convert;
pub mod report;
