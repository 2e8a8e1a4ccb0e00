pub mod config;
pub mod constants;
pub mod employee;
pub mod logging;
pub mod report;
pub mod session;
pub mod source;
pub mod stats;
pub mod store;
