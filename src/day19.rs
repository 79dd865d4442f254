use regex::Regex;

use crate::InputError;

const ORE: usize = 0;
const CLAY: usize = 1;
const OBSIDIAN: usize = 2;
const GEODE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    pub id: u32,
    /// `costs[robot][resource]`
    costs: [[u32; 4]; 4],
    /// No point in producing more of a resource per minute than any robot costs.
    max_useful: [u32; 4],
}

impl Blueprint {
    fn new(id: u32, ore: u32, clay: u32, obsidian: (u32, u32), geode: (u32, u32)) -> Self {
        let mut costs = [[0; 4]; 4];
        costs[ORE][ORE] = ore;
        costs[CLAY][ORE] = clay;
        costs[OBSIDIAN][ORE] = obsidian.0;
        costs[OBSIDIAN][CLAY] = obsidian.1;
        costs[GEODE][ORE] = geode.0;
        costs[GEODE][OBSIDIAN] = geode.1;
        let mut max_useful = [u32::MAX; 4];
        for resource in [ORE, CLAY, OBSIDIAN] {
            max_useful[resource] = costs.iter().map(|cost| cost[resource]).max().unwrap_or(0);
        }
        Blueprint {id, costs, max_useful}
    }

    pub fn max_geodes(&self, minutes: u32) -> u32 {
        let mut best = 0;
        self.search(minutes, [1, 0, 0, 0], [0; 4], &mut best);
        best
    }

    /// Branches on which robot to build next, fast-forwarding the minutes spent saving up for it.
    fn search(&self, time_left: u32, robots: [u32; 4], stock: [u32; 4], best: &mut u32) {
        let idle = stock[GEODE] + robots[GEODE] * time_left;
        *best = (*best).max(idle);
        // even a new geode robot every remaining minute would not beat the best
        if idle + time_left * time_left.saturating_sub(1) / 2 <= *best {return};

        for robot in (ORE ..= GEODE).rev() {
            if robots[robot] >= self.max_useful[robot] {continue};
            let cost = self.costs[robot];
            let Some(wait) = (ORE ..= OBSIDIAN).try_fold(0, |wait, resource| {
                if stock[resource] >= cost[resource] {
                    Some(wait)
                } else if robots[resource] == 0 {
                    None
                } else {
                    Some(wait.max((cost[resource] - stock[resource]).div_ceil(robots[resource])))
                }
            }) else {continue};
            if wait + 1 >= time_left {continue};

            let mut next_stock = stock;
            for resource in ORE ..= GEODE {
                next_stock[resource] += robots[resource] * (wait + 1);
                next_stock[resource] -= cost[resource];
            }
            let mut next_robots = robots;
            next_robots[robot] += 1;
            self.search(time_left - wait - 1, next_robots, next_stock, best);
        }
    }
}

pub fn parse(input: &str) -> Result<Vec<Blueprint>, InputError> {
    let number = Regex::new(r"\d+").expect("valid regex");
    input.split("Blueprint").map(str::trim).filter(|chunk| !chunk.is_empty()).map(|chunk| {
        let numbers = number.find_iter(chunk)
            .map(|m| m.as_str().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| InputError::line(chunk))?;
        match numbers[..] {
            [id, ore, clay, obs_ore, obs_clay, geode_ore, geode_obs] => {
                Ok(Blueprint::new(id, ore, clay, (obs_ore, obs_clay), (geode_ore, geode_obs)))
            },
            _ => Err(InputError::line(chunk)),
        }
    }).collect()
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let blueprints = parse(input)?;
    if blueprints.is_empty() {return Err(InputError::Empty.into())};
    if part == 1 {
        Ok(blueprints.iter().map(|bp| {
            let geodes = bp.max_geodes(24);
            tracing::debug!(id = bp.id, geodes, "blueprint evaluated");
            bp.id * geodes
        }).sum::<u32>().to_string())
    } else {
        Ok(blueprints.iter().take(3).map(|bp| bp.max_geodes(32)).product::<u32>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. Each obsidian robot costs 3 ore and 14 clay. Each geode robot costs 2 ore and 7 obsidian.
Blueprint 2: Each ore robot costs 2 ore. Each clay robot costs 3 ore. Each obsidian robot costs 3 ore and 8 clay. Each geode robot costs 3 ore and 12 obsidian.
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "33");
    }

    #[test]
    fn example_long_run() {
        let blueprints = parse(EXAMPLE).unwrap();
        assert_eq!(blueprints[0].max_geodes(32), 56);
        assert_eq!(blueprints[1].max_geodes(32), 62);
        assert_eq!(solve(2, EXAMPLE).unwrap(), (56 * 62).to_string());
    }

    #[test]
    fn wrapped_blueprint_text() {
        let wrapped = EXAMPLE.replace(". ", ".\n  ");
        assert_eq!(parse(&wrapped).unwrap(), parse(EXAMPLE).unwrap());
    }

    #[test]
    fn per_blueprint_geodes() {
        let blueprints = parse(EXAMPLE).unwrap();
        assert_eq!(blueprints[0].max_geodes(24), 9);
        assert_eq!(blueprints[1].max_geodes(24), 12);
    }
}
