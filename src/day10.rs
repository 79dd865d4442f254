use crate::InputError;

const WIDTH: usize = 40;
const HEIGHT: usize = 6;

/// X during each cycle; `history[0]` is cycle 1.
fn register_history(input: &str) -> Result<Vec<i64>, InputError> {
    let mut x = 1;
    let mut history = vec![];
    for line in input.trim().lines().map(str::trim) {
        match line.split_once(' ') {
            None if line == "noop" => history.push(x),
            Some(("addx", v)) => {
                history.extend([x, x]);
                x += v.parse::<i64>().map_err(|_| InputError::line(line))?;
            },
            _ => return Err(InputError::line(line)),
        }
    }
    history.push(x);
    Ok(history)
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let history = register_history(input)?;
    // X keeps its final value once the program has run out
    let x_at = |index: usize| history.get(index).or(history.last()).copied().unwrap_or(1);
    if part == 1 {
        Ok((20 ..= 220).step_by(40).map(|cycle| cycle as i64 * x_at(cycle - 1)).sum::<i64>().to_string())
    } else {
        Ok((0 .. HEIGHT).map(|row| {
            (0 .. WIDTH).map(|col| {
                if (col as i64 - x_at(row * WIDTH + col)).abs() <= 1 {'#'} else {'.'}
            }).collect::<String>()
        }).collect::<Vec<_>>().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
addx 15
addx -11
addx 6
addx -3
addx 5
addx -1
addx -8
addx 13
addx 4
noop
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx -35
addx 1
addx 24
addx -19
addx 1
addx 16
addx -11
noop
noop
addx 21
addx -15
noop
noop
addx -3
addx 9
addx 1
addx -3
addx 8
addx 1
addx 5
noop
noop
noop
noop
noop
addx -36
noop
addx 1
addx 7
noop
noop
noop
addx 2
addx 6
noop
noop
noop
noop
noop
addx 1
noop
noop
addx 7
addx 1
noop
addx -13
addx 13
addx 7
noop
addx 1
addx -33
noop
noop
noop
addx 2
noop
noop
noop
addx 8
noop
addx -1
addx 2
addx 1
noop
addx 17
addx -9
addx 1
addx 1
addx -3
addx 11
noop
noop
addx 1
noop
addx 1
noop
noop
addx -13
addx -19
addx 1
addx 3
addx 26
addx -30
addx 12
addx -1
addx 3
addx 1
noop
noop
noop
addx -9
addx 18
addx 1
addx 2
noop
noop
addx 9
noop
noop
noop
addx -1
addx 2
addx -37
addx 1
addx 3
noop
addx 15
addx -21
addx 22
addx -6
addx 1
noop
addx 2
addx 1
noop
addx -10
noop
noop
addx 20
addx 1
addx 2
addx 2
addx -6
addx -11
noop
noop
noop
";

    const SCREEN: &str = "\
##..##..##..##..##..##..##..##..##..##..
###...###...###...###...###...###...###.
####....####....####....####....####....
#####.....#####.....#####.....#####.....
######......######......######......####
#######.......#######.......#######.....";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "13140");
        assert_eq!(solve(2, EXAMPLE).unwrap(), SCREEN);
    }

    #[test]
    fn small_program() {
        assert_eq!(register_history("noop\naddx 3\naddx -5\n").unwrap(), [1, 1, 1, 4, 4, -1]);
    }

    #[test]
    fn signal_strength() {
        let idle = "noop\n".repeat(220);
        assert_eq!(solve(1, &idle).unwrap(), (20 + 60 + 100 + 140 + 180 + 220).to_string());

        // X becomes 3 from cycle 3 on
        let program = format!("addx 2\n{}", "noop\n".repeat(218));
        assert_eq!(solve(1, &program).unwrap(), (3 * 720).to_string());
    }

    #[test]
    fn short_program_keeps_last_x() {
        // X is 4 from cycle 3 until the end
        let program = "noop\naddx 3\n";
        assert_eq!(solve(1, program).unwrap(), (4 * (20 + 60 + 100 + 140 + 180 + 220)).to_string());
    }

    #[test]
    fn crt_follows_sprite() {
        let screen = solve(2, &"noop\n".repeat(240)).unwrap();
        let row = format!("###{}", ".".repeat(37));
        assert_eq!(screen, vec![row; 6].join("\n"));
    }

    #[test]
    fn unknown_instruction() {
        assert!(solve(1, "jmp 4").is_err());
    }
}
