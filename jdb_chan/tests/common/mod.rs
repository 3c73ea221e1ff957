//! In-memory descriptor with call counters and fault injection
//! 带计数与故障注入的内存描述符

#![allow(dead_code)]

use std::{
  cell::{RefCell, RefMut},
  io,
  rc::Rc,
};

use jdb_chan::{Fd, Pos};

#[derive(Default)]
pub struct State {
  pub data: Vec<u8>,
  pub pos: usize,
  pub reads: usize,
  pub writes: usize,
  pub seeks: usize,
  pub closes: usize,
  /// 1-based read calls that fail / 失败的读调用序号
  pub fail_reads: Vec<usize>,
  /// 1-based write calls that fail / 失败的写调用序号
  pub fail_writes: Vec<usize>,
  pub fail_seek: bool,
  /// Seek lands at most at the data end / 定位不超过数据末尾
  pub clamp_seek: bool,
  /// Max bytes per read, pipe-like / 每次最多读取字节数
  pub read_cap: Option<usize>,
  /// Max bytes per write / 每次最多写入字节数
  pub write_cap: Option<usize>,
  /// No size, like a pipe / 无大小，类似管道
  pub pipe: bool,
}

/// Clone shares state, keep one handle to inspect after moving into a Chan
/// 克隆共享状态
#[derive(Clone, Default)]
pub struct MemFd(Rc<RefCell<State>>);

impl MemFd {
  pub fn new(data: impl Into<Vec<u8>>) -> Self {
    let fd = Self::default();
    fd.state().data = data.into();
    fd
  }

  pub fn state(&self) -> RefMut<'_, State> {
    self.0.borrow_mut()
  }

  pub fn data(&self) -> Vec<u8> {
    self.0.borrow().data.clone()
  }

  pub fn reads(&self) -> usize {
    self.0.borrow().reads
  }

  pub fn writes(&self) -> usize {
    self.0.borrow().writes
  }

  pub fn seeks(&self) -> usize {
    self.0.borrow().seeks
  }

  pub fn closes(&self) -> usize {
    self.0.borrow().closes
  }
}

fn injected(what: &str) -> io::Error {
  io::Error::other(format!("injected {what} failure"))
}

impl Fd for MemFd {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let mut s = self.state();
    s.reads += 1;
    if s.fail_reads.contains(&s.reads) {
      return Err(injected("read"));
    }
    // Past the end reads as EOF
    // 超过末尾视为 EOF
    let pos = s.pos.min(s.data.len());
    let avail = s.data.len() - pos;
    let n = buf.len().min(avail).min(s.read_cap.unwrap_or(usize::MAX));
    buf[..n].copy_from_slice(&s.data[pos..pos + n]);
    s.pos += n;
    Ok(n)
  }

  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let mut s = self.state();
    s.writes += 1;
    if s.fail_writes.contains(&s.writes) {
      return Err(injected("write"));
    }
    let n = buf.len().min(s.write_cap.unwrap_or(usize::MAX));
    let pos = s.pos;
    if s.data.len() < pos + n {
      s.data.resize(pos + n, 0);
    }
    s.data[pos..pos + n].copy_from_slice(&buf[..n]);
    s.pos += n;
    Ok(n)
  }

  fn seek(&mut self, pos: Pos) -> io::Result<Pos> {
    let mut s = self.state();
    s.seeks += 1;
    if s.fail_seek {
      return Err(injected("seek"));
    }
    let pos = if s.clamp_seek {
      (pos as usize).min(s.data.len())
    } else {
      pos as usize
    };
    s.pos = pos;
    Ok(pos as Pos)
  }

  fn close(&mut self) -> io::Result<()> {
    self.state().closes += 1;
    Ok(())
  }

  fn size(&self) -> Option<u64> {
    let s = self.0.borrow();
    if s.pipe {
      None
    } else {
      Some(s.data.len() as u64)
    }
  }
}

/// Deterministic test bytes / 确定性测试数据
pub fn pattern(len: usize) -> Vec<u8> {
  (0..len).map(|i| (i * 31 + 7) as u8).collect()
}
