//! Primitive descriptor contract
//! 描述符原语

use std::io;

use crate::Pos;

/// Raw byte source or sink a [`Chan`](crate::Chan) sits on.
///
/// Each call maps to exactly one underlying primitive, short results are
/// legitimate and never retried here. Anything honouring this contract
/// (regular file, pipe, socket, in-memory store) can back a channel.
///
/// 每个方法对应一次底层调用，短读写是合法结果。
pub trait Fd {
  /// Read up to `buf.len()` bytes at the implicit position, 0 = EOF
  /// 从当前位置读取，0 表示 EOF
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

  /// Write at the implicit position, returns bytes actually taken
  /// 在当前位置写入，返回实际写入字节数
  fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

  /// Reposition to absolute `pos`, returns the new position
  /// 定位到绝对偏移
  fn seek(&mut self, pos: Pos) -> io::Result<Pos>;

  /// Release the descriptor / 释放描述符
  fn close(&mut self) -> io::Result<()>;

  /// Byte size, `None` when indeterminate (pipe, socket)
  /// 文件大小，管道等返回 None
  fn size(&self) -> Option<u64>;
}

impl<T: Fd + ?Sized> Fd for &mut T {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    (**self).read(buf)
  }

  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    (**self).write(buf)
  }

  #[inline]
  fn seek(&mut self, pos: Pos) -> io::Result<Pos> {
    (**self).seek(pos)
  }

  #[inline]
  fn close(&mut self) -> io::Result<()> {
    (**self).close()
  }

  #[inline]
  fn size(&self) -> Option<u64> {
    (**self).size()
  }
}
