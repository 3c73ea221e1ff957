//! Write side: single byte, bulk, flush
//! 写：单字节、批量、刷盘

use super::Chan;
use crate::{BUF_SIZE, Dir, Error, Fd, Pos, Result};

impl<F: Fd> Chan<F> {
  /// Buffer one byte, flushing first when full
  /// 写入一个字节，满时先刷盘
  pub fn write_byte(&mut self, b: u8) -> Result<()> {
    self.expect(Dir::Write, "write_byte")?;
    self.check();
    if self.off() == BUF_SIZE {
      self.flush()?;
    }
    let off = self.off();
    self.buf[off] = b;
    self.pos += 1;
    self.end = self.pos;
    self.check();
    Ok(())
  }

  /// Buffer `data`, flushing whenever the buffer fills.
  ///
  /// A flush failure stops the loop: error if nothing was taken yet,
  /// otherwise the short count.
  /// 刷盘失败时停止：尚未写入则返回错误，否则返回已写入字节数。
  pub fn write(&mut self, data: &[u8]) -> Result<usize> {
    self.expect(Dir::Write, "write")?;
    self.check();
    let mut total = 0;
    while total < data.len() {
      if self.off() == BUF_SIZE
        && let Err(e) = self.flush()
      {
        if total == 0 {
          return Err(e);
        }
        log::warn!("short write {total}/{}: {e}", data.len());
        break;
      }
      let off = self.off();
      let n = (data.len() - total).min(BUF_SIZE - off);
      self.buf[off..off + n].copy_from_slice(&data[total..total + n]);
      self.pos += n as Pos;
      self.end = self.pos;
      total += n;
    }
    self.check();
    Ok(total)
  }

  /// Write buffered bytes to the descriptor.
  ///
  /// No-op for a read channel. On a short or failed write the buffer is
  /// left untouched so the caller may retry. A retry after
  /// [`Error::ShortFlush`] resends the whole buffer, so the `got` bytes the
  /// descriptor already took are written again.
  /// 读通道无操作；写入失败时缓冲保持原样，可重试。短写后重试会重发整个缓冲。
  pub fn flush(&mut self) -> Result<()> {
    self.check();
    if self.dir.is_read() {
      return Ok(());
    }
    let want = self.off();
    if want == 0 {
      return Ok(());
    }
    let got = self.fd.write(&self.buf[..want])?;
    if got != want {
      return Err(Error::ShortFlush { want, got });
    }
    log::trace!("flush {want} at {}", self.start);
    self.start = self.pos;
    self.check();
    Ok(())
  }
}
