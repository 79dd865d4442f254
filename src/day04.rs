use crate::InputError;

type Range = (u32, u32);

fn parse_line(line: &str) -> Option<(Range, Range)> {
    let (left, right) = line.trim().split_once(',')?;
    let range = |s: &str| -> Option<Range> {
        let (lo, hi) = s.split_once('-')?;
        Some((lo.parse().ok()?, hi.parse().ok()?))
    };
    Some((range(left)?, range(right)?))
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let pairs = input.trim().lines().map(|line|
        parse_line(line).ok_or_else(|| InputError::line(line))
    ).collect::<Result<Vec<_>, _>>()?;

    Ok(pairs.iter().filter(|&&((a, b), (c, d))| {
        if part == 1 {
            a <= c && d <= b || c <= a && b <= d
        } else {
            a <= d && c <= b
        }
    }).count().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "2-4,6-8\n2-3,4-5\n5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8\n";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "2");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "4");
    }

    #[test]
    fn identical_ranges_contain_each_other() {
        assert_eq!(solve(1, "3-5,3-5").unwrap(), "1");
    }

    #[test]
    fn bad_line() {
        assert!(solve(1, "2-4;6-8").is_err());
    }
}
