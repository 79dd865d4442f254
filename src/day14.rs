use bitvec::prelude::*;
use itertools::Itertools;

use crate::InputError;

const SOURCE_X: usize = 500;

/// Occupied cells (rock or resting sand) within reach of the source.
/// Column `c` is `x + floor - 500`, so the part 2 pyramid spans `0 ..= 2 * floor`.
struct Cave {
    blocked: BitVec,
    width: usize,
    floor: usize,
}

impl Cave {
    fn parse(input: &str) -> Result<Self, InputError> {
        let paths = input.trim().lines().map(|line| {
            line.split("->").map(|point| {
                let (x, y) = point.trim().split_once(',').ok_or_else(|| InputError::line(line))?;
                Ok((
                    x.parse::<usize>().map_err(|_| InputError::line(line))?,
                    y.parse::<usize>().map_err(|_| InputError::line(line))?,
                ))
            }).collect::<Result<Vec<_>, _>>()
        }).collect::<Result<Vec<_>, _>>()?;

        let max_y = paths.iter().flatten().map(|&(_, y)| y).max().ok_or(InputError::Empty)?;
        let floor = max_y + 2;
        // sand never spreads further sideways than it falls
        let width = 2 * floor + 1;
        let mut cave = Cave {blocked: bitvec![0; width * floor], width, floor};
        for path in &paths {
            for (&(x1, y1), &(x2, y2)) in path.iter().tuple_windows() {
                if x1 != x2 && y1 != y2 {
                    return Err(InputError::Missing("axis-aligned rock segments"));
                }
                for x in x1.min(x2) ..= x1.max(x2) {
                    // out of the sand's reach
                    let Some(col) = (x + floor).checked_sub(SOURCE_X).filter(|&col| col < width)
                        else {continue};
                    for y in y1.min(y2) ..= y1.max(y2) {
                        cave.set(col, y);
                    }
                }
            }
        }
        Ok(cave)
    }

    fn is_blocked(&self, col: usize, y: usize) -> bool {
        y >= self.floor || self.blocked[y * self.width + col]
    }

    fn set(&mut self, col: usize, y: usize) {
        self.blocked.set(y * self.width + col, true);
    }

    /// Pours sand until it either drops past `abyss` or clogs the source.
    /// Keeps the path of the falling grain, so each grain resumes where the last one rested.
    fn pour(&mut self, abyss: Option<usize>) -> usize {
        let mut rested = 0;
        let mut path = vec![(self.floor, 0)];
        while let Some(&(col, y)) = path.last() {
            if abyss.is_some_and(|abyss| y > abyss) {break};
            // a grain at depth y < floor is at most y columns from the source, so col >= 1
            match [col, col - 1, col + 1].into_iter().find(|&next| !self.is_blocked(next, y + 1)) {
                Some(next) => path.push((next, y + 1)),
                None => {
                    self.set(col, y);
                    rested += 1;
                    path.pop();
                }
            }
        }
        rested
    }
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let mut cave = Cave::parse(input)?;
    let abyss = (part == 1).then_some(cave.floor - 2);
    Ok(cave.pour(abyss).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "498,4 -> 498,6 -> 496,6\n503,4 -> 502,4 -> 502,9 -> 494,9\n";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "24");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "93");
    }

    #[test]
    fn lone_floor_fills_a_pyramid() {
        // rock at y = 0 puts the floor at 2, so only a 1 + 3 pyramid fits
        assert_eq!(solve(2, "600,0 -> 601,0").unwrap(), "4");
        assert_eq!(solve(1, "600,0 -> 601,0").unwrap(), "0");
    }

    #[test]
    fn deep_rock_widens_the_pyramid() {
        // floor at 602: a full pyramid of 602 rows minus the two rock cells
        assert_eq!(solve(2, "500,600 -> 501,600\n").unwrap(), (602 * 602 - 2).to_string());
        assert_eq!(solve(1, "500,600 -> 501,600\n").unwrap(), "0");
    }

    #[test]
    fn unreachable_rock_is_ignored() {
        let input = format!("{}400,5 -> 401,5\n", EXAMPLE);
        assert_eq!(solve(1, &input).unwrap(), "24");
        assert_eq!(solve(2, &input).unwrap(), "93");
    }

    #[test]
    fn diagonal_rock() {
        assert!(solve(1, "498,4 -> 500,6").is_err());
    }
}
