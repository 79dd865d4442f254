use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::InputError;

type Cube = [i32; 3];

const FACES: [Cube; 6] = [[1, 0, 0], [-1, 0, 0], [0, 1, 0], [0, -1, 0], [0, 0, 1], [0, 0, -1]];

fn neighbours([x, y, z]: Cube) -> impl Iterator<Item = Cube> {
    FACES.into_iter().map(move |[dx, dy, dz]| [x + dx, y + dy, z + dz])
}

fn parse(input: &str) -> Result<FxHashSet<Cube>, InputError> {
    input.trim().lines().map(|line| {
        let coords = line.trim().split(',').map(|c| c.parse::<i32>()).collect::<Vec<_>>();
        match coords[..] {
            [Ok(x), Ok(y), Ok(z)] => Ok([x, y, z]),
            _ => Err(InputError::line(line)),
        }
    }).collect()
}

/// Faces touched by steam spreading in from a box one cell larger than the droplet.
fn exterior_surface(lava: &FxHashSet<Cube>) -> usize {
    let (mut lo, mut hi) = ([i32::MAX; 3], [i32::MIN; 3]);
    for cube in lava {
        for axis in 0 .. 3 {
            lo[axis] = lo[axis].min(cube[axis] - 1);
            hi[axis] = hi[axis].max(cube[axis] + 1);
        }
    }
    let inside = |c: &Cube| (0 .. 3).all(|axis| (lo[axis] ..= hi[axis]).contains(&c[axis]));

    let mut seen = FxHashSet::from_iter([lo]);
    let mut queue = VecDeque::from([lo]);
    let mut faces = 0;
    while let Some(steam) = queue.pop_front() {
        for next in neighbours(steam).filter(|c| inside(c)) {
            if lava.contains(&next) {
                faces += 1;
            } else if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    faces
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let lava = parse(input)?;
    if lava.is_empty() {return Err(InputError::Empty.into())};
    let area = if part == 1 {
        lava.iter().flat_map(|&cube| neighbours(cube)).filter(|n| !lava.contains(n)).count()
    } else {
        exterior_surface(&lava)
    };
    Ok(area.to_string())
}
