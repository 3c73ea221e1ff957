//! Buffered channel over one directional descriptor
//! 单向描述符上的缓冲通道
//!
//! The cache window is `[start, end)` in absolute file offsets, `pos` is the
//! logical cursor. Byte at offset `o` lives at `buf[o - start]`.
//! 缓存窗口为 `[start, end)`，`pos` 为逻辑游标。

mod io;
mod read;
mod seek;
mod write;

use crate::{BUF_SIZE, Dir, Error, Fd, Pos, Result};

/// Single-buffer cached channel
/// 单缓冲通道
pub struct Chan<F: Fd> {
  fd: F,
  dir: Dir,
  buf: Box<[u8]>,
  /// Offset of `buf[0]` / `buf[0]` 的偏移
  start: Pos,
  /// Next byte to read or write / 下一个读写位置
  pos: Pos,
  /// One past the last valid byte / 最后有效字节之后
  end: Pos,
}

impl<F: Fd> Chan<F> {
  /// Wrap an open descriptor, no I/O
  /// 包装已打开的描述符，不做 I/O
  pub fn new(fd: F, dir: Dir) -> Self {
    Self {
      fd,
      dir,
      buf: vec![0; BUF_SIZE].into_boxed_slice(),
      start: 0,
      pos: 0,
      end: 0,
    }
  }

  #[inline(always)]
  pub fn dir(&self) -> Dir {
    self.dir
  }

  /// Logical cursor / 逻辑游标
  #[inline(always)]
  pub fn pos(&self) -> Pos {
    self.pos
  }

  #[inline(always)]
  pub fn start(&self) -> Pos {
    self.start
  }

  #[inline(always)]
  pub fn end(&self) -> Pos {
    self.end
  }

  /// Bytes held in the window; unflushed bytes for a write channel
  /// 窗口内字节数；写通道即未刷盘字节数
  #[inline(always)]
  pub fn buffered(&self) -> usize {
    (self.end - self.start) as usize
  }

  #[inline(always)]
  pub fn fd(&self) -> &F {
    &self.fd
  }

  /// Size of the backing file, `None` for pipes and sockets
  /// 文件大小，管道等返回 None
  #[inline]
  pub fn size(&self) -> Option<u64> {
    self.fd.size()
  }

  /// Flush pending writes then release the descriptor.
  ///
  /// Release is attempted even if the flush failed; the flush error wins.
  /// 先刷盘再释放；刷盘失败仍会释放，并优先返回刷盘错误。
  pub fn close(mut self) -> Result<()> {
    self.check();
    let flushed = self.flush();
    // Nothing left for Drop to retry
    // Drop 不再重试
    self.start = self.pos;
    let closed = self.fd.close();
    flushed?;
    closed?;
    Ok(())
  }

  #[inline(always)]
  fn check(&self) {
    debug_assert!(
      self.start <= self.pos && self.pos <= self.end,
      "cursor out of window: {} {} {}",
      self.start,
      self.pos,
      self.end
    );
    debug_assert!(self.end - self.start <= BUF_SIZE as Pos);
    debug_assert!(self.dir.is_read() || self.pos == self.end);
  }

  #[inline(always)]
  fn expect(&self, dir: Dir, op: &'static str) -> Result<()> {
    if self.dir == dir {
      Ok(())
    } else {
      Err(Error::InvalidDirection { op, dir: self.dir })
    }
  }

  /// Cursor index into `buf` / 游标在 buf 中的下标
  #[inline(always)]
  fn off(&self) -> usize {
    (self.pos - self.start) as usize
  }

  /// Move the descriptor to `to`. When it lands elsewhere the window is
  /// parked empty at `got`, where the next fill or flush will happen.
  /// Callers only reposition with no unflushed bytes.
  /// 定位描述符；落点不符时空窗口停在 `got`。
  fn reposition(&mut self, to: Pos) -> Result<()> {
    let got = self.fd.seek(to)?;
    if got != to {
      self.start = got;
      self.pos = got;
      self.end = got;
      return Err(Error::Seek { want: to, got });
    }
    Ok(())
  }
}

impl<F: Fd> Drop for Chan<F> {
  #[cold]
  fn drop(&mut self) {
    if self.dir.is_write() && self.pos > self.start {
      let pending = self.pos - self.start;
      if let Err(e) = self.flush() {
        log::warn!("Chan dropped with {pending} unflushed bytes: {e}");
      }
    }
  }
}
