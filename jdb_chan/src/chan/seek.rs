//! Seek reconciliation between cache and descriptor
//! 缓存与描述符之间的定位

use super::Chan;
use crate::{BUF_SIZE, Dir, Error, Fd, Pos, Result};

impl<F: Fd> Chan<F> {
  /// Move the cursor to absolute offset `to`.
  ///
  /// Read: a hit inside `[start, end)` costs no I/O, otherwise the block
  /// holding `to` is loaded from its `BUF_SIZE` aligned start.
  /// Write: pending bytes are flushed, then the descriptor moves.
  ///
  /// 读：窗口内命中无 I/O，否则按 BUF_SIZE 对齐加载；写：先刷盘再定位。
  pub fn seek(&mut self, to: Pos) -> Result<()> {
    self.check();
    match self.dir {
      Dir::Read => self.seek_read(to)?,
      Dir::Write => self.seek_write(to)?,
    }
    self.check();
    Ok(())
  }

  fn seek_read(&mut self, to: Pos) -> Result<()> {
    if self.start <= to && to < self.end {
      self.pos = to;
      return Ok(());
    }

    let aligned = to - to % BUF_SIZE as Pos;
    if let Err(e) = self.reposition(aligned) {
      // A failed call leaves the descriptor at `end`
      // 调用失败时描述符仍在 `end`
      if !matches!(e, Error::Seek { .. }) {
        self.start = self.end;
        self.pos = self.end;
      }
      return Err(e);
    }
    self.start = aligned;
    self.pos = aligned;
    self.end = aligned;
    log::trace!("seek {to} reload at {aligned}");
    self.fill()?;

    if to <= self.end {
      self.pos = to;
      return Ok(());
    }

    // Past EOF: park an empty window at `to`
    // 超过 EOF：在 `to` 处放置空窗口
    self.reposition(to)?;
    self.start = to;
    self.pos = to;
    self.end = to;
    Ok(())
  }

  fn seek_write(&mut self, to: Pos) -> Result<()> {
    self.flush()?;
    self.reposition(to)?;
    self.start = to;
    self.pos = to;
    self.end = to;
    Ok(())
  }
}
