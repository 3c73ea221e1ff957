//! Open channels by path
//! 按路径打开通道

use std::{fs::File, os::unix::fs::OpenOptionsExt, path::Path};

use crate::{Chan, Dir, Error, OsFd, Result};

/// Open file for reading
/// 打开文件用于读取
#[inline]
pub fn open_read(path: impl AsRef<Path>) -> std::io::Result<File> {
  std::fs::OpenOptions::new().read(true).open(path)
}

/// Open file for writing, create or truncate, mode 0666 before umask
/// 打开文件用于写入，不存在则创建，存在则截断
#[inline]
pub fn open_write_create(path: impl AsRef<Path>) -> std::io::Result<File> {
  std::fs::OpenOptions::new()
    .write(true)
    .create(true)
    .truncate(true)
    .mode(0o666)
    .open(path)
}

/// Open `path` in one direction, `None` falls back to stdin or stdout.
///
/// Failure carries the path, the caller decides whether it is fatal.
/// 打开路径，`None` 时读用 stdin、写用 stdout。
pub fn open(path: Option<&Path>, dir: Dir) -> Result<Chan<OsFd>> {
  let fd = match path {
    Some(path) => {
      let file = match dir {
        Dir::Read => open_read(path),
        Dir::Write => open_write_create(path),
      }
      .map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
      })?;
      OsFd::from(file)
    }
    None => match dir {
      Dir::Read => OsFd::stdin(),
      Dir::Write => OsFd::stdout(),
    },
  };
  log::trace!("open {path:?} for {dir}");
  Ok(Chan::new(fd, dir))
}
