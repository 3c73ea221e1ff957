//! Invariant and model properties over random operation sequences
//! 随机操作序列下的不变式与模型性质

mod common;

use common::{MemFd, pattern};
use jdb_chan::{BUF_SIZE, Chan, Dir, Fd, Pos};
use proptest::prelude::*;

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[derive(Debug, Clone)]
enum ReadOp {
  Byte,
  Bulk(usize),
  Seek(Pos),
  Flush,
}

#[derive(Debug, Clone)]
enum WriteOp {
  Byte(u8),
  Bulk(Vec<u8>),
  Seek(Pos),
  Flush,
}

fn read_op() -> impl Strategy<Value = ReadOp> {
  prop_oneof![
    Just(ReadOp::Byte),
    (0..3 * BUF_SIZE).prop_map(ReadOp::Bulk),
    (0..4 * BUF_SIZE as Pos).prop_map(ReadOp::Seek),
    Just(ReadOp::Flush),
  ]
}

fn write_op() -> impl Strategy<Value = WriteOp> {
  prop_oneof![
    any::<u8>().prop_map(WriteOp::Byte),
    prop::collection::vec(any::<u8>(), 0..2 * BUF_SIZE).prop_map(WriteOp::Bulk),
    (0..3 * BUF_SIZE as Pos).prop_map(WriteOp::Seek),
    Just(WriteOp::Flush),
  ]
}

fn assert_window<F: Fd>(c: &Chan<F>) -> Result<(), TestCaseError> {
  prop_assert!(c.start() <= c.pos());
  prop_assert!(c.pos() <= c.end());
  prop_assert!(c.end() - c.start() <= BUF_SIZE as Pos);
  if c.dir() == Dir::Write {
    prop_assert_eq!(c.pos(), c.end());
  }
  Ok(())
}

/// Write `data` at `pos` in a growable model file
/// 在可增长模型文件中写入
fn model_write(file: &mut Vec<u8>, pos: usize, data: &[u8]) {
  let end = pos + data.len();
  if file.len() < end {
    file.resize(end, 0);
  }
  file[pos..end].copy_from_slice(data);
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  #[test]
  fn prop_read_matches_model(
    len in 0..3 * BUF_SIZE,
    ops in prop::collection::vec(read_op(), 1..40),
  ) {
    let data = pattern(len);
    let mut c = Chan::new(MemFd::new(data.clone()), Dir::Read);
    let mut cur = 0usize;
    assert_window(&c)?;

    for op in ops {
      match op {
        ReadOp::Byte => {
          let got = c.read_byte().unwrap();
          prop_assert_eq!(got, data.get(cur).copied());
          if got.is_some() {
            cur += 1;
          }
        }
        ReadOp::Bulk(n) => {
          let mut buf = vec![0u8; n];
          let got = c.read(&mut buf).unwrap();
          let want = &data[cur.min(len)..(cur + n).min(len)];
          prop_assert_eq!(&buf[..got], want);
          cur += got;
        }
        ReadOp::Seek(to) => {
          c.seek(to).unwrap();
          cur = to as usize;
        }
        ReadOp::Flush => c.flush().unwrap(),
      }
      prop_assert_eq!(c.pos(), cur as Pos);
      assert_window(&c)?;
    }
  }

  #[test]
  fn prop_write_matches_model(ops in prop::collection::vec(write_op(), 1..30)) {
    let fd = MemFd::default();
    let mut c = Chan::new(fd.clone(), Dir::Write);
    let mut file = Vec::new();
    let mut cur = 0usize;
    assert_window(&c)?;

    for op in ops {
      match op {
        WriteOp::Byte(b) => {
          c.write_byte(b).unwrap();
          model_write(&mut file, cur, &[b]);
          cur += 1;
        }
        WriteOp::Bulk(data) => {
          prop_assert_eq!(c.write(&data).unwrap(), data.len());
          model_write(&mut file, cur, &data);
          cur += data.len();
        }
        WriteOp::Seek(to) => {
          c.seek(to).unwrap();
          cur = to as usize;
        }
        WriteOp::Flush => {
          c.flush().unwrap();
          prop_assert_eq!(c.buffered(), 0);
        }
      }
      prop_assert_eq!(c.pos(), cur as Pos);
      assert_window(&c)?;
    }

    c.close().unwrap();
    // A seek alone never extends the file, only bytes landing past the end do
    // 仅定位不扩展文件
    prop_assert_eq!(fd.data(), file);
  }
}
