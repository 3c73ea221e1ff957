//! Raw unix descriptor

use std::{
  fs::File,
  io,
  mem::MaybeUninit,
  os::fd::{AsRawFd, IntoRawFd, RawFd},
};

use crate::{Fd, Pos};

/// Owned raw descriptor, one libc call per primitive
/// 原始描述符，每个原语一次 libc 调用
#[derive(Debug)]
pub struct OsFd {
  fd: RawFd,
  /// Closed on drop / drop 时关闭
  owned: bool,
}

impl OsFd {
  /// Take ownership of an open descriptor / 接管已打开的描述符
  #[inline]
  pub const fn new(fd: RawFd) -> Self {
    Self { fd, owned: true }
  }

  /// Process stdin, borrowed: drop leaves it open
  /// 借用进程 stdin，drop 不关闭
  #[inline]
  pub const fn stdin() -> Self {
    Self::borrowed(libc::STDIN_FILENO)
  }

  /// Process stdout, borrowed: drop leaves it open
  /// 借用进程 stdout，drop 不关闭
  #[inline]
  pub const fn stdout() -> Self {
    Self::borrowed(libc::STDOUT_FILENO)
  }

  #[inline]
  const fn borrowed(fd: RawFd) -> Self {
    Self { fd, owned: false }
  }

  /// Whether drop closes the descriptor / drop 是否关闭描述符
  #[inline(always)]
  pub const fn is_owned(&self) -> bool {
    self.owned
  }

  /// Raw descriptor number, -1 once closed
  /// 原始描述符编号，关闭后为 -1
  #[inline(always)]
  pub const fn raw(&self) -> RawFd {
    self.fd
  }

  #[inline(always)]
  fn open_fd(&self) -> io::Result<RawFd> {
    if self.fd < 0 {
      return Err(io::Error::from_raw_os_error(libc::EBADF));
    }
    Ok(self.fd)
  }
}

impl Fd for OsFd {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let fd = self.open_fd()?;
    let n = unsafe { libc::read(fd, buf.as_mut_ptr().cast(), buf.len()) };
    if n < 0 {
      return Err(io::Error::last_os_error());
    }
    Ok(n as usize)
  }

  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let fd = self.open_fd()?;
    let n = unsafe { libc::write(fd, buf.as_ptr().cast(), buf.len()) };
    if n < 0 {
      return Err(io::Error::last_os_error());
    }
    Ok(n as usize)
  }

  fn seek(&mut self, pos: Pos) -> io::Result<Pos> {
    let fd = self.open_fd()?;
    let off = libc::off_t::try_from(pos)
      .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "offset overflows off_t"))?;
    let r = unsafe { libc::lseek(fd, off, libc::SEEK_SET) };
    if r < 0 {
      return Err(io::Error::last_os_error());
    }
    Ok(r as Pos)
  }

  fn close(&mut self) -> io::Result<()> {
    if self.fd < 0 {
      return Ok(());
    }
    let r = unsafe { libc::close(self.fd) };
    self.fd = -1;
    if r < 0 {
      return Err(io::Error::last_os_error());
    }
    Ok(())
  }

  fn size(&self) -> Option<u64> {
    if self.fd < 0 {
      return None;
    }
    let mut stat = MaybeUninit::<libc::stat>::uninit();
    if unsafe { libc::fstat(self.fd, stat.as_mut_ptr()) } < 0 {
      return None;
    }
    let stat = unsafe { stat.assume_init() };
    if (stat.st_mode & libc::S_IFMT) == libc::S_IFREG {
      Some(stat.st_size as u64)
    } else {
      None
    }
  }
}

impl AsRawFd for OsFd {
  #[inline]
  fn as_raw_fd(&self) -> RawFd {
    self.fd
  }
}

impl From<File> for OsFd {
  #[inline]
  fn from(file: File) -> Self {
    Self::new(file.into_raw_fd())
  }
}

impl Drop for OsFd {
  fn drop(&mut self) {
    if self.owned {
      let _ = self.close();
    }
  }
}
