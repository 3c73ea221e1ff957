//! Channel direction / 通道方向

use std::fmt;

/// Fixed at creation, never changes
/// 创建时确定，不可更改
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
  Read,
  Write,
}

impl Dir {
  #[inline(always)]
  pub const fn is_read(self) -> bool {
    matches!(self, Dir::Read)
  }

  #[inline(always)]
  pub const fn is_write(self) -> bool {
    matches!(self, Dir::Write)
  }
}

impl fmt::Display for Dir {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Dir::Read => "read",
      Dir::Write => "write",
    })
  }
}
