use itertools::Itertools;

use crate::InputError;

fn elf_totals(input: &str) -> anyhow::Result<Vec<u64>> {
    input.trim().split("\n\n").map(|group| {
        group.lines().map(|line| {
            line.trim().parse::<u64>().map_err(|_| InputError::line(line))
        }).sum::<Result<u64, _>>()
    }).collect::<Result<_, _>>().map_err(Into::into)
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let input = input.replace("\r\n", "\n");
    if input.trim().is_empty() {
        return Err(InputError::Empty.into());
    }
    let totals = elf_totals(&input)?;
    if part == 1 {
        Ok(totals.iter().max().copied().unwrap_or_default().to_string())
    } else {
        if totals.len() < 3 {
            return Err(InputError::Missing("three elves").into());
        }
        Ok(totals.iter().sorted_unstable_by(|a, b| b.cmp(a)).take(3).sum::<u64>().to_string())
    }
}
