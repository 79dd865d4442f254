use itertools::Itertools;

use crate::InputError;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Operation {Add(u64), Mul(u64), Square}

impl Operation {
    fn apply(self, old: u64) -> u64 {
        match self {
            Operation::Add(n) => old + n,
            Operation::Mul(n) => old * n,
            Operation::Square => old * old,
        }
    }
}

#[derive(Debug, Clone)]
struct Monkey {
    items: Vec<u64>,
    op: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

fn parse_monkey(block: &str) -> Result<Monkey, InputError> {
    let lines = block.lines().map(str::trim).collect::<Vec<_>>();
    let [_, items, op, test, if_true, if_false] = lines[..] else {
        return Err(InputError::line(block.lines().next().unwrap_or_default()));
    };
    fn field<'a>(line: &'a str, prefix: &str) -> Result<&'a str, InputError> {
        line.strip_prefix(prefix).ok_or_else(|| InputError::line(line))
    }
    fn number(line: &str, prefix: &str) -> Result<u64, InputError> {
        field(line, prefix)?.parse().map_err(|_| InputError::line(line))
    }

    let items = field(items, "Starting items:")?.split(',')
        .map(|item| item.trim().parse().map_err(|_| InputError::line(items)))
        .collect::<Result<_, _>>()?;
    let op = match field(op, "Operation: new = old ")?.split_once(' ') {
        Some(("*", "old")) => Operation::Square,
        Some(("*", n)) => Operation::Mul(n.parse().map_err(|_| InputError::line(op))?),
        Some(("+", n)) => Operation::Add(n.parse().map_err(|_| InputError::line(op))?),
        _ => return Err(InputError::line(op)),
    };
    Ok(Monkey {
        items,
        op,
        divisor: number(test, "Test: divisible by ")?,
        if_true: number(if_true, "If true: throw to monkey ")? as usize,
        if_false: number(if_false, "If false: throw to monkey ")? as usize,
    })
}

fn gcd(a: u64, b: u64) -> u64 {if b == 0 {a} else {gcd(b, a % b)}}
fn lcm(a: u64, b: u64) -> u64 {a / gcd(a, b) * b}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let input = input.replace("\r\n", "\n");
    let mut monkeys = input.trim().split("\n\n").map(parse_monkey).collect::<Result<Vec<_>, _>>()?;
    if monkeys.iter().any(|m| m.if_true >= monkeys.len() || m.if_false >= monkeys.len() || m.divisor == 0) {
        return Err(InputError::Missing("valid monkey targets").into());
    }

    let modulus = monkeys.iter().map(|m| m.divisor).fold(1, lcm);
    let rounds = if part == 1 {20} else {10_000};
    let mut inspections = vec![0u64; monkeys.len()];
    for _ in 0 .. rounds {
        for mi in 0 .. monkeys.len() {
            let items = std::mem::take(&mut monkeys[mi].items);
            inspections[mi] += items.len() as u64;
            let Monkey {op, divisor, if_true, if_false, ..} = monkeys[mi];
            for item in items {
                let worry = if part == 1 {op.apply(item) / 3} else {op.apply(item) % modulus};
                let target = if worry % divisor == 0 {if_true} else {if_false};
                monkeys[target].items.push(worry);
            }
        }
    }
    Ok(inspections.iter().sorted_unstable().rev().take(2).product::<u64>().to_string())
}
