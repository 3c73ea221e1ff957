#![cfg_attr(docsrs, feature(doc_cfg))]

//! jdb_chan - Single-buffer cached channel over a raw descriptor
//! 基于原始描述符的单缓冲通道
//!
//! One [`Chan`] wraps one descriptor opened in exactly one [`Dir`] and keeps
//! one [`BUF_SIZE`] cache described by three offsets: `start <= pos <= end`.
//! 一个通道包装一个单向描述符，用三个偏移描述一块缓存。

pub mod chan;
pub mod consts;
pub mod dir;
pub mod error;
pub mod fd;
#[cfg(unix)]
pub mod open;
#[cfg(unix)]
pub mod os;

pub use chan::Chan;
pub use consts::BUF_SIZE;
pub use dir::Dir;
pub use error::{Error, Result};
pub use fd::Fd;
#[cfg(unix)]
pub use open::open;
#[cfg(unix)]
pub use os::OsFd;

/// Absolute file offset / 文件绝对偏移
pub type Pos = u64;
