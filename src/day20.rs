use crate::InputError;

const DECRYPTION_KEY: i64 = 811_589_153;
const COORDINATE_OFFSETS: [usize; 3] = [1000, 2000, 3000];

/// Mixes `numbers` `rounds` times. The ring holds indices into `numbers`,
/// so duplicates keep their identity.
pub fn mix(numbers: &[i64], rounds: usize) -> Vec<i64> {
    let len = numbers.len();
    let mut ring = (0 .. len).collect::<Vec<_>>();
    if len < 2 {return numbers.to_vec()};
    for _ in 0 .. rounds {
        for (id, &value) in numbers.iter().enumerate() {
            let at = ring.iter().position(|&x| x == id).unwrap_or_default();
            ring.remove(at);
            // moving a full lap minus itself lands back in the same place
            let to = (at as i64 + value).rem_euclid(len as i64 - 1) as usize;
            ring.insert(to, id);
        }
    }
    ring.into_iter().map(|id| numbers[id]).collect()
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let mut numbers = input.trim().lines().map(|line| {
        line.trim().parse::<i64>().map_err(|_| InputError::line(line))
    }).collect::<Result<Vec<_>, _>>()?;
    let rounds = if part == 1 {1} else {10};
    if part == 2 {
        numbers.iter_mut().for_each(|n| *n *= DECRYPTION_KEY);
    }

    let mixed = mix(&numbers, rounds);
    let zero = mixed.iter().position(|&n| n == 0).ok_or(InputError::Missing("zero"))?;
    Ok(COORDINATE_OFFSETS.iter().map(|offset| mixed[(zero + offset) % mixed.len()]).sum::<i64>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "1\n2\n-3\n3\n-2\n0\n4\n";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "3");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "1623178306");
    }

    #[test]
    fn single_round_order() {
        // same cyclic order as the puzzle's walkthrough: 1, 2, -3, 4, 0, 3, -2
        let mixed = mix(&[1, 2, -3, 3, -2, 0, 4], 1);
        let start = mixed.iter().position(|&n| n == 1).unwrap();
        let rotated = mixed[start ..].iter().chain(&mixed[.. start]).copied().collect::<Vec<_>>();
        assert_eq!(rotated, [1, 2, -3, 4, 0, 3, -2]);
    }

    #[test]
    fn duplicates_are_tracked_separately() {
        let mixed = mix(&[0, 1, 1], 1);
        assert_eq!(mixed.len(), 3);
        assert_eq!(mixed.iter().filter(|&&n| n == 1).count(), 2);
    }

    #[test]
    fn needs_a_zero() {
        assert!(solve(1, "1\n2\n3").is_err());
    }
}
