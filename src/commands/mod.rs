pub mod analyze;
pub mod serve;
