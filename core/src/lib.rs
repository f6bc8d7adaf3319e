pub mod probe;
pub mod report;
pub mod resolve;
pub mod sweep;
