use std::collections::VecDeque;

use crate::InputError;

struct HeightMap {
    heights: Vec<Vec<u8>>,
    start: (usize, usize),
    end: (usize, usize),
}

fn parse(input: &str) -> Result<HeightMap, InputError> {
    let mut start = None;
    let mut end = None;
    let heights = input.trim().lines().enumerate().map(|(ri, line)| {
        line.trim().bytes().enumerate().map(|(ci, c)| match c {
            b'S' => {start = Some((ri, ci)); Ok(0)},
            b'E' => {end = Some((ri, ci)); Ok(25)},
            b'a' ..= b'z' => Ok(c - b'a'),
            _ => Err(InputError::BadChar(c as char)),
        }).collect::<Result<Vec<_>, _>>()
    }).collect::<Result<Vec<_>, _>>()?;
    Ok(HeightMap {
        heights,
        start: start.ok_or(InputError::Missing("start marker S"))?,
        end: end.ok_or(InputError::Missing("end marker E"))?,
    })
}

/// Breadth-first search downhill from the end, so one pass serves every start.
/// Stops at the first cell accepted by `is_goal`.
fn steps_from_end(map: &HeightMap, is_goal: impl Fn((usize, usize)) -> bool) -> Option<usize> {
    let heights = &map.heights;
    let mut dist = heights.iter().map(|row| vec![usize::MAX; row.len()]).collect::<Vec<_>>();
    let mut queue = VecDeque::from([map.end]);
    dist[map.end.0][map.end.1] = 0;
    while let Some((ri, ci)) = queue.pop_front() {
        if is_goal((ri, ci)) {return Some(dist[ri][ci])};
        let neighbours = [
            (ri.wrapping_sub(1), ci), (ri + 1, ci), (ri, ci.wrapping_sub(1)), (ri, ci + 1)
        ];
        for (rj, cj) in neighbours {
            let Some(&height) = heights.get(rj).and_then(|row| row.get(cj)) else {continue};
            // reversed edge: we may step from (rj, cj) up to (ri, ci) by at most one
            if height + 1 >= heights[ri][ci] && dist[rj][cj] == usize::MAX {
                dist[rj][cj] = dist[ri][ci] + 1;
                queue.push_back((rj, cj));
            }
        }
    }
    None
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let map = parse(input)?;
    let steps = if part == 1 {
        steps_from_end(&map, |cell| cell == map.start)
    } else {
        steps_from_end(&map, |(ri, ci)| map.heights[ri][ci] == 0)
    };
    Ok(steps.ok_or(InputError::NoSolution)?.to_string())
}
