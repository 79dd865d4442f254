use itertools::Itertools;

use crate::InputError;

fn item_set(items: &[u8]) -> Result<u64, InputError> {
    items.iter().try_fold(0u64, |set, &item| match item {
        b'a' ..= b'z' => Ok(set | 1 << (item - b'a' + 1)),
        b'A' ..= b'Z' => Ok(set | 1 << (item - b'A' + 27)),
        _ => Err(InputError::BadChar(item as char)),
    })
}

/// The bit index of the single shared item is its priority.
fn priority(shared: u64) -> u32 {
    if shared == 0 {0} else {shared.trailing_zeros()}
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let sacks = input.trim().lines().map(|line| line.trim().as_bytes()).collect::<Vec<_>>();
    let total = if part == 1 {
        sacks.iter().map(|sack| {
            let (left, right) = sack.split_at(sack.len() / 2);
            Ok(priority(item_set(left)? & item_set(right)?))
        }).sum::<Result<u32, InputError>>()?
    } else {
        if sacks.len() % 3 != 0 {
            return Err(InputError::Missing("complete groups of three").into());
        }
        sacks.iter().tuples().map(|(a, b, c)| {
            Ok(priority(item_set(a)? & item_set(b)? & item_set(c)?))
        }).sum::<Result<u32, InputError>>()?
    };
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "157");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "70");
    }

    #[test]
    fn priorities() {
        assert_eq!(priority(item_set(b"a").unwrap()), 1);
        assert_eq!(priority(item_set(b"z").unwrap()), 26);
        assert_eq!(priority(item_set(b"A").unwrap()), 27);
        assert_eq!(priority(item_set(b"Z").unwrap()), 52);
    }

    #[test]
    fn incomplete_group() {
        assert!(solve(2, "ab\ncd\n").is_err());
    }
}
