//! Read side: fill, single byte, bulk
//! 读：填充、单字节、批量

use super::Chan;
use crate::{BUF_SIZE, Dir, Fd, Pos, Result};

impl<F: Fd> Chan<F> {
  /// Discard the window and read up to `BUF_SIZE` bytes at `end`.
  ///
  /// Returns bytes read, 0 = EOF. On error the window stays empty.
  /// 丢弃窗口并从 `end` 读取，0 表示 EOF。
  pub fn fill(&mut self) -> Result<usize> {
    self.expect(Dir::Read, "fill")?;
    self.check();
    self.start = self.end;
    self.pos = self.end;
    let n = self.fd.read(&mut self.buf)?;
    debug_assert!(n <= BUF_SIZE);
    self.end += n as Pos;
    log::trace!("fill {n} at {}", self.start);
    self.check();
    Ok(n)
  }

  /// Next byte, `None` at end of file
  /// 下一个字节，EOF 返回 None
  pub fn read_byte(&mut self) -> Result<Option<u8>> {
    self.expect(Dir::Read, "read_byte")?;
    self.check();
    if self.pos == self.end && self.fill()? == 0 {
      return Ok(None);
    }
    let b = self.buf[self.off()];
    self.pos += 1;
    self.check();
    Ok(Some(b))
  }

  /// Read up to `out.len()` bytes.
  ///
  /// Short reads are normal. `Ok(0)` is EOF, an error is returned only when
  /// nothing was copied before it.
  /// 可能短读；0 表示 EOF；只有未读到任何字节时才返回错误。
  pub fn read(&mut self, out: &mut [u8]) -> Result<usize> {
    self.expect(Dir::Read, "read")?;
    self.check();
    let mut total = 0;
    while total < out.len() {
      if self.pos == self.end {
        match self.fill() {
          Ok(0) => break,
          Ok(_) => {}
          Err(e) => {
            if total == 0 {
              return Err(e);
            }
            log::warn!("short read {total}/{}: {e}", out.len());
            break;
          }
        }
      }
      let off = self.off();
      let n = (out.len() - total).min((self.end - self.pos) as usize);
      out[total..total + n].copy_from_slice(&self.buf[off..off + n]);
      self.pos += n as Pos;
      total += n;
    }
    self.check();
    Ok(total)
  }
}
