use arrayvec::ArrayVec;
use rustc_hash::FxHashMap;

use crate::InputError;

const PART1_ROCKS: u64 = 2022;
const PART2_ROCKS: u64 = 1_000_000_000_000;
/// Rows of the tower surface remembered when looking for a repeat.
const PROFILE_DEPTH: usize = 32;
const LEFT_WALL: u8 = 0b000_0001;
const RIGHT_WALL: u8 = 0b100_0000;

type Rock = ArrayVec<u8, 4>;

/// Rows listed bottom up, bit 0 is the leftmost column, already two in from the wall.
fn rocks() -> [Rock; 5] {
    [
        [0b011_1100].into_iter().collect(),
        [0b000_1000, 0b001_1100, 0b000_1000].into_iter().collect(),
        [0b001_1100, 0b001_0000, 0b001_0000].into_iter().collect(),
        [0b000_0100; 4].into_iter().collect(),
        [0b000_1100; 2].into_iter().collect(),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Jet {Left, Right}

struct Chamber {
    rows: Vec<u8>,
    jets: Vec<Jet>,
    next_jet: usize,
    rocks: [Rock; 5],
    dropped: u64,
}

impl Chamber {
    fn new(jets: Vec<Jet>) -> Self {
        Chamber {rows: vec![], jets, next_jet: 0, rocks: rocks(), dropped: 0}
    }

    fn height(&self) -> usize {
        self.rows.len()
    }

    fn collides(&self, rock: &Rock, y: usize) -> bool {
        rock.iter().enumerate().any(|(dy, &row)| {
            self.rows.get(y + dy).is_some_and(|&settled| settled & row != 0)
        })
    }

    fn drop_rock(&mut self) {
        let mut rock = self.rocks[(self.dropped % 5) as usize].clone();
        let mut y = self.height() + 3;
        loop {
            let jet = self.jets[self.next_jet];
            self.next_jet = (self.next_jet + 1) % self.jets.len();
            let pushed = match jet {
                Jet::Left if rock.iter().all(|&row| row & LEFT_WALL == 0) => {
                    Some(rock.iter().map(|&row| row >> 1).collect::<Rock>())
                },
                Jet::Right if rock.iter().all(|&row| row & RIGHT_WALL == 0) => {
                    Some(rock.iter().map(|&row| row << 1).collect::<Rock>())
                },
                _ => None,
            };
            if let Some(pushed) = pushed.filter(|pushed| !self.collides(pushed, y)) {
                rock = pushed;
            }
            if y == 0 || self.collides(&rock, y - 1) {break};
            y -= 1;
        }

        for (dy, &row) in rock.iter().enumerate() {
            match self.rows.get_mut(y + dy) {
                Some(settled) => *settled |= row,
                None => self.rows.push(row),
            }
        }
        self.dropped += 1;
    }

    fn profile(&self) -> [u8; PROFILE_DEPTH] {
        let mut profile = [0; PROFILE_DEPTH];
        for (slot, &row) in profile.iter_mut().zip(self.rows.iter().rev()) {
            *slot = row;
        }
        profile
    }
}

fn parse(input: &str) -> Result<Vec<Jet>, InputError> {
    let jets = input.trim().chars().map(|c| match c {
        '<' => Ok(Jet::Left),
        '>' => Ok(Jet::Right),
        _ => Err(InputError::BadChar(c)),
    }).collect::<Result<Vec<_>, _>>()?;
    if jets.is_empty() {return Err(InputError::Empty)};
    Ok(jets)
}

/// Tower height after `total` rocks; once the (rock, jet, surface) state repeats,
/// whole cycles are skipped arithmetically.
fn tower_height(jets: Vec<Jet>, total: u64) -> u64 {
    let mut chamber = Chamber::new(jets);
    let mut seen = FxHashMap::default();
    let mut skipped = 0;
    while chamber.dropped < total {
        chamber.drop_rock();
        if skipped > 0 || chamber.height() < PROFILE_DEPTH {continue};
        let key = ((chamber.dropped % 5) as usize, chamber.next_jet, chamber.profile());
        if let Some(&(then_dropped, then_height)) = seen.get(&key) {
            let period = chamber.dropped - then_dropped;
            let growth = chamber.height() as u64 - then_height;
            let cycles = (total - chamber.dropped) / period;
            tracing::debug!(period, growth, cycles, "tower repeats");
            skipped = cycles * growth;
            chamber.dropped += cycles * period;
        } else {
            seen.insert(key, (chamber.dropped, chamber.height() as u64));
        }
    }
    chamber.height() as u64 + skipped
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let jets = parse(input)?;
    Ok(tower_height(jets, if part == 1 {PART1_ROCKS} else {PART2_ROCKS}).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>\n";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "3068");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "1514285714288");
    }

    #[test]
    fn first_rocks() {
        let jets = parse(EXAMPLE).unwrap();
        // the first horizontal bar lands flat on the floor
        assert_eq!(tower_height(jets.clone(), 1), 1);
        // the plus stacks on top of it
        assert_eq!(tower_height(jets, 2), 4);
    }

    #[test]
    fn rejects_other_characters() {
        assert!(solve(1, "<>x").is_err());
        assert!(solve(1, "").is_err());
    }
}
