use std::path::{Path, PathBuf};

use anyhow::Context;

/// `day{N}.in` for the full input, `day{N}test{M}.in` for the puzzle's examples.
pub fn input_path(dir: &Path, day: u8, test: Option<u8>) -> PathBuf {
    match test {
        Some(test) => dir.join(format!("day{}test{}.in", day, test)),
        None => dir.join(format!("day{}.in", day)),
    }
}

pub fn load(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("cannot read input file {}", path.display()))
}
