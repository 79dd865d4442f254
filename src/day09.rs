use rustc_hash::FxHashSet;

use crate::InputError;

fn parse(input: &str) -> Result<Vec<((i32, i32), u32)>, InputError> {
    input.trim().lines().map(|line| {
        let (dir, steps) = line.trim().split_once(' ').ok_or_else(|| InputError::line(line))?;
        let dir = match dir {
            "L" => (-1, 0), "R" => (1, 0), "U" => (0, 1), "D" => (0, -1),
            _ => return Err(InputError::line(line)),
        };
        Ok((dir, steps.parse().map_err(|_| InputError::line(line))?))
    }).collect()
}

pub fn simulate(knots: usize, moves: &[((i32, i32), u32)]) -> usize {
    let mut rope = vec![(0i32, 0i32); knots];
    let mut visited = FxHashSet::default();
    visited.insert((0, 0));
    for &((dx, dy), steps) in moves {
        for _ in 0 .. steps {
            rope[0].0 += dx;
            rope[0].1 += dy;
            for i in 1 .. knots {
                let (lead_x, lead_y) = rope[i - 1];
                let knot = &mut rope[i];
                let (off_x, off_y) = (lead_x - knot.0, lead_y - knot.1);
                if off_x.abs() > 1 || off_y.abs() > 1 {
                    knot.0 += off_x.signum();
                    knot.1 += off_y.signum();
                }
            }
            visited.insert(rope[knots - 1]);
        }
    }
    visited.len()
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let moves = parse(input)?;
    Ok(simulate(if part == 1 {2} else {10}, &moves).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n";
    const LARGER_EXAMPLE: &str = "R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20\n";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "13");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "1");
    }

    #[test]
    fn larger_example() {
        assert_eq!(solve(2, LARGER_EXAMPLE).unwrap(), "36");
    }

    #[test]
    fn unknown_direction() {
        assert!(solve(1, "X 3").is_err());
    }
}
