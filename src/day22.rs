use std::collections::VecDeque;

use regex::Regex;

use crate::InputError;

/// Row/column deltas for facings right, down, left, up; the index is the facing's score.
const DELTAS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {Forward(u32), Left, Right}

type Pos = (usize, usize);

struct Board {tiles: Vec<Vec<u8>>}

impl Board {
    fn tile(&self, r: isize, c: isize) -> u8 {
        if r < 0 || c < 0 {return b' '};
        self.tiles.get(r as usize).and_then(|row| row.get(c as usize)).copied().unwrap_or(b' ')
    }

    fn start(&self) -> Option<Pos> {
        self.tiles.first()?.iter().position(|&t| t == b'.').map(|c| (0, c))
    }

    /// Follows `path`, letting `wrap` decide where a step off the map lands.
    fn walk(&self, path: &[Step], wrap: impl Fn(Pos, usize) -> (Pos, usize)) -> Option<usize> {
        let (mut pos, mut facing) = (self.start()?, 0);
        for &step in path {
            match step {
                Step::Left => facing = (facing + 3) % 4,
                Step::Right => facing = (facing + 1) % 4,
                Step::Forward(n) => for _ in 0 .. n {
                    let (dr, dc) = DELTAS[facing];
                    let (nr, nc) = (pos.0 as isize + dr, pos.1 as isize + dc);
                    let (next, next_facing) = if self.tile(nr, nc) == b' ' {
                        wrap(pos, facing)
                    } else {
                        ((nr as usize, nc as usize), facing)
                    };
                    if self.tile(next.0 as isize, next.1 as isize) == b'#' {break};
                    (pos, facing) = (next, next_facing);
                },
            }
        }
        Some(1000 * (pos.0 + 1) + 4 * (pos.1 + 1) + facing)
    }

    /// Walks backwards to the far edge of the current row or column.
    fn flat_wrap(&self, pos: Pos, facing: usize) -> (Pos, usize) {
        let (dr, dc) = DELTAS[facing];
        let (mut r, mut c) = (pos.0 as isize, pos.1 as isize);
        while self.tile(r - dr, c - dc) != b' ' {
            r -= dr;
            c -= dc;
        }
        ((r as usize, c as usize), facing)
    }
}

type Vec3 = [i32; 3];

fn neg(v: Vec3) -> Vec3 {v.map(|x| -x)}
fn dot(a: Vec3, b: Vec3) -> i32 {a.iter().zip(b).map(|(x, y)| x * y).sum()}
fn add_scaled(acc: Vec3, v: Vec3, k: i32) -> Vec3 {[acc[0] + k * v[0], acc[1] + k * v[1], acc[2] + k * v[2]]}

/// A face of the folded cube: where it sits in the net and how it is oriented in space.
#[derive(Debug, Clone, Copy)]
struct Face {
    block: Pos,
    normal: Vec3,
    right: Vec3,
    down: Vec3,
}

impl Face {
    fn direction(&self, facing: usize) -> Vec3 {
        match facing {
            0 => self.right,
            1 => self.down,
            2 => neg(self.right),
            _ => neg(self.down),
        }
    }
}

/// The board's net folded into a cube. Cell centres live on a lattice where the cube spans
/// `-side ..= side` and every in-face coordinate is odd.
struct Cube {side: usize, faces: Vec<Face>}

impl Cube {
    fn fold(board: &Board) -> Result<Self, InputError> {
        let tiles = board.tiles.iter().flatten().filter(|&&t| t != b' ').count();
        let side = ((tiles / 6) as f64).sqrt().round() as usize;
        if side == 0 || 6 * side * side != tiles {
            return Err(InputError::Missing("six square cube faces"));
        }

        let blocks = (0 .. board.tiles.len() / side).flat_map(|br| {
            let width = board.tiles[br * side].len();
            (0 .. width / side).map(move |bc| (br, bc))
        }).filter(|&(br, bc)| board.tile((br * side) as isize, (bc * side) as isize) != b' ')
          .collect::<Vec<_>>();
        let first = *blocks.first().ok_or(InputError::Empty)?;

        // roll the first face's frame across the net
        let mut faces = vec![Face {block: first, normal: [0, 0, 1], right: [1, 0, 0], down: [0, 1, 0]}];
        let mut queue = VecDeque::from([0]);
        while let Some(fi) = queue.pop_front() {
            let Face {block: (br, bc), normal: n, right: r, down: d} = faces[fi];
            // neighbour block, then its (normal, right, down)
            let rolled = [
                ((br, bc + 1), (r, neg(n), d)),
                ((br + 1, bc), (d, r, neg(n))),
                ((br, bc.wrapping_sub(1)), (neg(r), n, d)),
                ((br.wrapping_sub(1), bc), (neg(d), r, n)),
            ];
            for (block, (normal, right, down)) in rolled {
                if blocks.contains(&block) && faces.iter().all(|f| f.block != block) {
                    faces.push(Face {block, normal, right, down});
                    queue.push_back(faces.len() - 1);
                }
            }
        }
        if faces.len() != 6 {
            return Err(InputError::Missing("a connected net of six faces"));
        }
        tracing::debug!(side, "folded cube");
        Ok(Cube {side, faces})
    }

    /// Crosses the cube edge in front of `pos`, returning the landing cell and the new facing.
    fn wrap(&self, pos: Pos, facing: usize) -> (Pos, usize) {
        let side = self.side as i32;
        let block = (pos.0 / self.side, pos.1 / self.side);
        let Some(face) = self.faces.iter().find(|f| f.block == block) else {return (pos, facing)};
        let (lr, lc) = ((pos.0 % self.side) as i32, (pos.1 % self.side) as i32);
        let centre = add_scaled(
            add_scaled(add_scaled([0; 3], face.normal, side), face.right, 2 * lc + 1 - side),
            face.down, 2 * lr + 1 - side,
        );
        let heading = face.direction(facing);
        let Some(target) = self.faces.iter().find(|f| f.normal == heading) else {return (pos, facing)};
        // one step over the edge: up to the new face's plane, down off the old one
        let landed = add_scaled(add_scaled(centre, heading, 1), face.normal, -1);
        let new_heading = neg(face.normal);
        let new_facing = (0 .. 4).find(|&f| target.direction(f) == new_heading).unwrap_or(facing);
        let local = |axis: Vec3| ((dot(landed, axis) + side - 1) / 2) as usize;
        let (nr, nc) = (local(target.down), local(target.right));
        ((target.block.0 * self.side + nr, target.block.1 * self.side + nc), new_facing)
    }
}

fn parse(input: &str) -> Result<(Board, Vec<Step>), InputError> {
    let input = input.replace("\r\n", "\n");
    let (map, path) = input.trim_start_matches('\n').trim_end()
        .split_once("\n\n").ok_or(InputError::Missing("blank line before the path"))?;
    let tiles = map.lines().map(|line| {
        match line.bytes().find(|t| !matches!(t, b' ' | b'.' | b'#')) {
            Some(t) => Err(InputError::BadChar(t as char)),
            None => Ok(line.as_bytes().to_vec()),
        }
    }).collect::<Result<Vec<_>, _>>()?;

    let path = path.trim();
    let token = Regex::new(r"\d+|[LR]").expect("valid regex");
    let steps = token.find_iter(path).map(|m| match m.as_str() {
        "L" => Ok(Step::Left),
        "R" => Ok(Step::Right),
        n => n.parse().map(Step::Forward).map_err(|_| InputError::line(path)),
    }).collect::<Result<Vec<_>, _>>()?;
    if token.find_iter(path).map(|m| m.len()).sum::<usize>() != path.len() {
        return Err(InputError::line(path));
    }
    Ok((Board {tiles}, steps))
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let (board, path) = parse(input)?;
    let password = if part == 1 {
        board.walk(&path, |pos, facing| board.flat_wrap(pos, facing))
    } else {
        let cube = Cube::fold(&board)?;
        board.walk(&path, |pos, facing| cube.wrap(pos, facing))
    };
    Ok(password.ok_or(InputError::Missing("an open tile on the top row"))?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = concat!(
        "        ...#\n",
        "        .#..\n",
        "        #...\n",
        "        ....\n",
        "...#.......#\n",
        "........#...\n",
        "..#....#....\n",
        "..........#.\n",
        "        ...#....\n",
        "        .....#..\n",
        "        .#......\n",
        "        ......#.\n",
        "\n",
        "10R5L5R10L4R5L5\n",
    );

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "6032");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "5031");
    }

    #[test]
    fn parses_path() {
        let (board, path) = parse(EXAMPLE).unwrap();
        assert_eq!(&path[.. 4], [Step::Forward(10), Step::Right, Step::Forward(5), Step::Left]);
        assert_eq!(board.start(), Some((0, 8)));
    }

    #[test]
    fn cube_edges_turn_the_walker() {
        let (board, _) = parse(EXAMPLE).unwrap();
        let cube = Cube::fold(&board).unwrap();
        assert_eq!(cube.side, 4);
        // heading right off the middle band lands on the top of the lower right face
        assert_eq!(cube.wrap((5, 11), 0), ((8, 14), 1));
        // and walking back up from there returns to the same edge
        assert_eq!(cube.wrap((8, 14), 3), ((5, 11), 2));
    }

    #[test]
    fn flat_wrap_reenters_the_row() {
        let (board, _) = parse(EXAMPLE).unwrap();
        assert_eq!(board.flat_wrap((6, 11), 0), ((6, 0), 0));
        assert_eq!(board.flat_wrap((0, 8), 3), ((11, 8), 3));
    }

    #[test]
    fn rejects_bad_path() {
        let input = EXAMPLE.replace("10R5L5R10L4R5L5", "10X5");
        assert!(solve(1, &input).is_err());
    }
}
