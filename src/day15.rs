use itertools::Itertools;
use regex::Regex;

use crate::InputError;

const TUNING_MULTIPLIER: i64 = 4_000_000;

#[derive(Debug, Clone, Copy)]
struct Sensor {
    pos: (i64, i64),
    beacon: (i64, i64),
    range: i64,
}

fn distance(a: (i64, i64), b: (i64, i64)) -> i64 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

impl Sensor {
    fn covers(&self, point: (i64, i64)) -> bool {
        distance(self.pos, point) <= self.range
    }

    /// Columns covered on row `y`, inclusive.
    fn coverage(&self, y: i64) -> Option<(i64, i64)> {
        let reach = self.range - (self.pos.1 - y).abs();
        (reach >= 0).then_some((self.pos.0 - reach, self.pos.0 + reach))
    }

    /// Points at distance `range + 1`, where a lone uncovered cell has to sit.
    fn boundary(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        let d = self.range + 1;
        let (sx, sy) = self.pos;
        (0 .. d).flat_map(move |i| {
            let j = d - i;
            [(sx + i, sy - j), (sx + j, sy + i), (sx - i, sy + j), (sx - j, sy - i)]
        })
    }
}

fn parse(input: &str) -> Result<Vec<Sensor>, InputError> {
    let re = Regex::new(r"x=(-?\d+), y=(-?\d+)").expect("valid regex");
    input.trim().lines().map(|line| {
        let coords = re.captures_iter(line).map(|caps| {
            (caps[1].parse::<i64>(), caps[2].parse::<i64>())
        }).collect::<Vec<_>>();
        match coords[..] {
            [(Ok(sx), Ok(sy)), (Ok(bx), Ok(by))] => Ok(Sensor {
                pos: (sx, sy), beacon: (bx, by), range: distance((sx, sy), (bx, by)),
            }),
            _ => Err(InputError::line(line)),
        }
    }).collect()
}

fn covered_on_row(sensors: &[Sensor], y: i64) -> i64 {
    let merged = sensors.iter().filter_map(|s| s.coverage(y)).sorted_unstable()
        .coalesce(|(a0, a1), (b0, b1)| {
            if b0 <= a1 + 1 {Ok((a0, a1.max(b1)))} else {Err(((a0, a1), (b0, b1)))}
        }).collect::<Vec<_>>();
    let span = merged.iter().map(|(lo, hi)| hi - lo + 1).sum::<i64>();
    let beacons = sensors.iter().map(|s| s.beacon).filter(|&(bx, by)| {
        by == y && merged.iter().any(|&(lo, hi)| (lo ..= hi).contains(&bx))
    }).unique().count();
    span - beacons as i64
}

fn find_gap(sensors: &[Sensor], bound: i64) -> Option<(i64, i64)> {
    sensors.iter().flat_map(|s| s.boundary())
        .filter(|&(x, y)| (0 ..= bound).contains(&x) && (0 ..= bound).contains(&y))
        .find(|&point| sensors.iter().all(|s| !s.covers(point)))
}

/// Part 1 counts row `row`; part 2 searches `[0, bound]` in both axes.
pub fn solve_with(part: u8, input: &str, row: i64, bound: i64) -> anyhow::Result<String> {
    let sensors = parse(input)?;
    if part == 1 {
        Ok(covered_on_row(&sensors, row).to_string())
    } else {
        let (x, y) = find_gap(&sensors, bound).ok_or(InputError::NoSolution)?;
        tracing::debug!("distress beacon at x={}, y={}", x, y);
        Ok((x * TUNING_MULTIPLIER + y).to_string())
    }
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let sensors = parse(input)?;
    let extent = sensors.iter().flat_map(|s| [s.pos.0, s.pos.1]).map(i64::abs).max().unwrap_or(0);
    // the puzzle's example is laid out on a tiny grid
    let (row, bound) = if extent <= 100 {(10, 20)} else {(2_000_000, 4_000_000)};
    tracing::info!("using row {} and search bound {}", row, bound);
    solve_with(part, input, row, bound)
}
