use itertools::Itertools;

use crate::InputError;

pub fn find_marker(signal: &[u8], size: usize) -> Option<usize> {
    signal.windows(size).position(|window| window.iter().all_unique()).map(|at| at + size)
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let size = if part == 1 {4} else {14};
    let marker = find_marker(input.trim().as_bytes(), size).ok_or(InputError::NoSolution)?;
    Ok(marker.to_string())
}
