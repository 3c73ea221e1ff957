//! Constants, generated by build.rs
//! 常量，由 build.rs 生成
//!
//! `BUF_SIZE` defaults to 4096, override with `JDB_CHAN_BUF_SIZE` at build time.

include!(concat!(env!("OUT_DIR"), "/consts.rs"));
