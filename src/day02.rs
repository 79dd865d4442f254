use crate::InputError;

// Shapes and outcomes are both 0..3: rock/paper/scissors, lose/draw/win.
fn parse(input: &str) -> Result<Vec<(u8, u8)>, InputError> {
    input.trim().lines().map(|line| {
        match line.trim().as_bytes() {
            &[them @ b'A' ..= b'C', b' ', you @ b'X' ..= b'Z'] => Ok((them - b'A', you - b'X')),
            _ => Err(InputError::line(line)),
        }
    }).collect()
}

fn score(shape: u8, outcome: u8) -> u32 {
    (shape + 1) as u32 + 3 * outcome as u32
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    Ok(parse(input)?.into_iter().map(|(them, you)| {
        if part == 1 {
            // paper beats rock, scissors beat paper, rock beats scissors
            score(you, (you + 4 - them) % 3)
        } else {
            score((them + you + 2) % 3, you)
        }
    }).sum::<u32>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "A Y\nB X\nC Z\n";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "15");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "12");
    }

    #[test]
    fn every_pairing() {
        // draws score shape + 3
        assert_eq!(solve(1, "A X\nB Y\nC Z").unwrap(), (4 + 5 + 6).to_string());
        // wins score shape + 6
        assert_eq!(solve(1, "C X\nA Y\nB Z").unwrap(), (7 + 8 + 9).to_string());
        // part 2: "lose" against rock means scissors
        assert_eq!(solve(2, "A X").unwrap(), "3");
    }

    #[test]
    fn rejects_unknown_letters() {
        assert!(solve(1, "D X").is_err());
    }
}
