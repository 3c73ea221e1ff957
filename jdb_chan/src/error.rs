//! Error types for jdb_chan
//! jdb_chan 错误类型

use std::path::PathBuf;

use thiserror::Error;

use crate::{Dir, Pos};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
  /// Underlying primitive failed / 底层调用失败
  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  /// Operation not allowed on this direction / 方向不匹配
  #[error("{op} on {dir} channel")]
  InvalidDirection { op: &'static str, dir: Dir },

  /// Descriptor took fewer bytes than buffered / 刷盘写入不足
  #[error("short flush: want {want}, got {got}")]
  ShortFlush { want: usize, got: usize },

  /// Reposition landed elsewhere / 定位结果不符
  #[error("seek: want {want}, got {got}")]
  Seek { want: Pos, got: Pos },

  /// Opening by path failed / 按路径打开失败
  #[error("open {path:?}: {source}")]
  Open {
    path: PathBuf,
    source: std::io::Error,
  },
}

impl From<Error> for std::io::Error {
  fn from(e: Error) -> Self {
    use std::io::ErrorKind;

    match e {
      Error::Io(e) => e,
      e => {
        let kind = match &e {
          Error::Open { source, .. } => source.kind(),
          Error::InvalidDirection { .. } => ErrorKind::Unsupported,
          Error::ShortFlush { .. } => ErrorKind::WriteZero,
          _ => ErrorKind::Other,
        };
        std::io::Error::new(kind, e)
      }
    }
  }
}

impl Error {
  /// Underlying io error if any / 底层 io 错误
  pub fn io(&self) -> Option<&std::io::Error> {
    match self {
      Error::Io(e) | Error::Open { source: e, .. } => Some(e),
      _ => None,
    }
  }
}
