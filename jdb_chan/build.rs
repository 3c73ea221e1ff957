use std::{env, fs, path::Path};

use anyhow::{Context, Result, bail};

fn get(key: &str, default: usize) -> Result<(String, String)> {
  println!("cargo:rerun-if-env-changed={}", key);
  match env::var(key) {
    Ok(val) => {
      let n = val
        .parse::<usize>()
        .with_context(|| format!("{} must be a number, get: {}", key, val))?;
      if n == 0 {
        bail!("{} must be positive", key);
      }
      Ok((key.to_string(), val))
    }
    Err(_) => Ok((key.to_string(), default.to_string())),
  }
}

fn save(filename: &str, configs: &[(String, String)]) -> Result<()> {
  let out_dir = env::var_os("OUT_DIR").context("OUT_DIR not found")?;
  let dest_path = Path::new(&out_dir).join(filename);

  let content = configs
    .iter()
    .map(|(k, v)| {
      let name = k.trim_start_matches("JDB_CHAN_");
      format!("pub const {}: usize = {};", name, v)
    })
    .collect::<Vec<_>>()
    .join("\n");

  if let Ok(current) = fs::read_to_string(&dest_path)
    && current == content
  {
    return Ok(());
  }

  fs::write(&dest_path, content).with_context(|| format!("Failed to write {}", filename))?;
  Ok(())
}

fn main() -> Result<()> {
  println!("cargo:rerun-if-changed=build.rs");
  save("consts.rs", &[get("JDB_CHAN_BUF_SIZE", 4096)?])?;
  Ok(())
}
