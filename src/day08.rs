use crate::InputError;

fn parse(input: &str) -> Result<Vec<Vec<u8>>, InputError> {
    let grid = input.trim().lines().map(|line| {
        line.trim().bytes().map(|c| match c {
            b'0' ..= b'9' => Ok(c - b'0'),
            _ => Err(InputError::BadChar(c as char)),
        }).collect::<Result<Vec<_>, _>>()
    }).collect::<Result<Vec<_>, _>>()?;
    if grid.is_empty() {return Err(InputError::Empty)};
    if grid.iter().any(|row| row.len() != grid[0].len()) {
        return Err(InputError::Missing("rectangular grid"));
    }
    Ok(grid)
}

/// The trees seen looking from (ri, ci) in each direction, nearest first.
fn sight_lines(grid: &[Vec<u8>], ri: usize, ci: usize) -> [Vec<u8>; 4] {
    let row = &grid[ri];
    [
        row[.. ci].iter().rev().copied().collect(),
        row[ci + 1 ..].iter().copied().collect(),
        grid[.. ri].iter().rev().map(|r| r[ci]).collect(),
        grid[ri + 1 ..].iter().map(|r| r[ci]).collect(),
    ]
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let grid = parse(input)?;
    let cells = (0 .. grid.len()).flat_map(|ri| (0 .. grid[0].len()).map(move |ci| (ri, ci)));
    if part == 1 {
        Ok(cells.filter(|&(ri, ci)| {
            let tree = grid[ri][ci];
            sight_lines(&grid, ri, ci).iter().any(|line| line.iter().all(|&other| other < tree))
        }).count().to_string())
    } else {
        Ok(cells.map(|(ri, ci)| {
            let tree = grid[ri][ci];
            sight_lines(&grid, ri, ci).iter().map(|line|
                line.iter().position(|&other| other >= tree).map_or(line.len(), |at| at + 1)
            ).product::<usize>()
        }).max().unwrap_or_default().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "30373\n25512\n65332\n33549\n35390\n";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "21");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "8");
    }

    #[test]
    fn edges_are_always_visible() {
        assert_eq!(solve(1, "999\n919\n999").unwrap(), "8");
        assert_eq!(solve(2, "999\n919\n999").unwrap(), "1");
    }

    #[test]
    fn ragged_grid() {
        assert!(solve(1, "123\n12\n").is_err());
    }
}
