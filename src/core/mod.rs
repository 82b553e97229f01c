pub mod accounting;
pub mod attendance;
pub mod config;
pub mod log;
pub mod session;
pub mod summary;
