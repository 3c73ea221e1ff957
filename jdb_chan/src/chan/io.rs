//! std::io adapters for Chan
//! Chan 的 std::io 适配

use std::io::{self, SeekFrom};

use super::Chan;
use crate::{Fd, Pos};

impl<F: Fd> io::Read for Chan<F> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    Ok(Chan::read(self, buf)?)
  }
}

impl<F: Fd> io::Write for Chan<F> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    Ok(Chan::write(self, buf)?)
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    Ok(Chan::flush(self)?)
  }
}

impl<F: Fd> io::Seek for Chan<F> {
  fn seek(&mut self, from: SeekFrom) -> io::Result<u64> {
    let to: Option<Pos> = match from {
      SeekFrom::Start(n) => Some(n),
      SeekFrom::Current(d) => self.pos.checked_add_signed(d),
      SeekFrom::End(d) => {
        // Size on disk must include pending writes
        // 磁盘大小需包含未刷盘数据
        Chan::flush(self)?;
        let size = self
          .size()
          .ok_or_else(|| io::Error::new(io::ErrorKind::Unsupported, "size unknown"))?;
        size.checked_add_signed(d)
      }
    };
    let to = to.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "seek out of range"))?;
    Chan::seek(self, to)?;
    Ok(to)
  }

  #[inline]
  fn stream_position(&mut self) -> io::Result<u64> {
    Ok(self.pos)
  }
}
