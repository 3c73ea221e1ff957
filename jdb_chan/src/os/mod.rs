//! Platform specific descriptors
//! 平台特定描述符

mod unix;

pub use unix::OsFd;
