use rustc_hash::FxHashMap;

use crate::InputError;

const ROOT: &str = "root";
const HUMAN: &str = "humn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {Add, Sub, Mul, Div}

#[derive(Debug, Clone, Copy)]
enum Job<'a> {
    Number(i64),
    Math(&'a str, Op, &'a str),
}

type Monkeys<'a> = FxHashMap<&'a str, Job<'a>>;

fn parse(input: &str) -> Result<Monkeys<'_>, InputError> {
    input.trim().lines().map(|line| {
        let (name, job) = line.trim().split_once(": ").ok_or_else(|| InputError::line(line))?;
        let job = match job.split_whitespace().collect::<Vec<_>>()[..] {
            [n] => Job::Number(n.parse().map_err(|_| InputError::line(line))?),
            [a, op, b] => Job::Math(a, match op {
                "+" => Op::Add, "-" => Op::Sub, "*" => Op::Mul, "/" => Op::Div,
                _ => return Err(InputError::line(line)),
            }, b),
            _ => return Err(InputError::line(line)),
        };
        Ok((name, job))
    }).collect()
}

fn job<'a>(monkeys: &Monkeys<'a>, name: &str) -> Result<Job<'a>, InputError> {
    monkeys.get(name).copied().ok_or_else(|| InputError::line(name))
}

fn eval(monkeys: &Monkeys, name: &str) -> Result<i64, InputError> {
    Ok(match job(monkeys, name)? {
        Job::Number(n) => n,
        Job::Math(a, op, b) => {
            let (a, b) = (eval(monkeys, a)?, eval(monkeys, b)?);
            match op {
                Op::Add => a + b,
                Op::Sub => a - b,
                Op::Mul => a * b,
                Op::Div => a.checked_div(b).ok_or(InputError::NoSolution)?,
            }
        },
    })
}

fn depends_on_human(monkeys: &Monkeys, name: &str) -> Result<bool, InputError> {
    if name == HUMAN {return Ok(true)};
    match job(monkeys, name)? {
        Job::Number(_) => Ok(false),
        Job::Math(a, _, b) => Ok(depends_on_human(monkeys, a)? || depends_on_human(monkeys, b)?),
    }
}

/// Walks from `name` down to `humn`, undoing each operation so that `name` yields `target`.
fn solve_for_human<'a>(monkeys: &Monkeys<'a>, mut name: &'a str, mut target: i64) -> Result<i64, InputError> {
    while name != HUMAN {
        let Job::Math(a, op, b) = job(monkeys, name)? else {return Err(InputError::NoSolution)};
        let human_left = depends_on_human(monkeys, a)?;
        let (unknown, known) = if human_left {(a, eval(monkeys, b)?)} else {(b, eval(monkeys, a)?)};
        target = match (op, human_left) {
            (Op::Add, _) => target - known,
            (Op::Mul, _) if known != 0 && target % known == 0 => target / known,
            (Op::Sub, true) => target + known,
            (Op::Sub, false) => known - target,
            (Op::Div, true) => target * known,
            (Op::Div, false) if target != 0 && known % target == 0 => known / target,
            _ => return Err(InputError::NoSolution),
        };
        name = unknown;
    }
    Ok(target)
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let monkeys = parse(input)?;
    if part == 1 {
        return Ok(eval(&monkeys, ROOT)?.to_string());
    }
    let Job::Math(a, _, b) = job(&monkeys, ROOT)? else {
        return Err(InputError::Missing("two operands for root").into());
    };
    let (unknown, known) = match (depends_on_human(&monkeys, a)?, depends_on_human(&monkeys, b)?) {
        (true, false) => (a, b),
        (false, true) => (b, a),
        _ => return Err(InputError::NoSolution.into()),
    };
    let target = eval(&monkeys, known)?;
    Ok(solve_for_human(&monkeys, unknown, target)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
root: pppw + sjmn
dbpl: 5
cczh: sllz + lgvd
zczc: 2
ptdq: humn - dvpt
dvpt: 3
lfqf: 4
humn: 5
ljgn: 2
sjmn: drzm * dbpl
sllz: 4
pppw: cczh / lfqf
lgvd: ljgn * ptdq
drzm: hmdt - zczc
hmdt: 32
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "152");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "301");
    }

    #[test]
    fn answer_balances_root() {
        let fixed = EXAMPLE.replace("humn: 5", "humn: 301");
        let monkeys = parse(&fixed).unwrap();
        assert_eq!(eval(&monkeys, "pppw").unwrap(), eval(&monkeys, "sjmn").unwrap());
    }

    #[test]
    fn human_on_the_right_of_a_subtraction() {
        let input = "root: a + b\na: x - humn\nx: 10\nb: 4\nhumn: 0\n";
        assert_eq!(solve(2, input).unwrap(), "6");
    }

    #[test]
    fn missing_monkey() {
        assert!(solve(1, "root: a + b\na: 1\n").is_err());
    }
}
