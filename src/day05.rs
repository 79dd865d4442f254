use crate::InputError;

struct Move {count: usize, from: usize, to: usize}

fn parse(input: &str) -> Result<(Vec<Vec<u8>>, Vec<Move>), InputError> {
    let input = input.replace("\r\n", "\n");
    let (drawing, moves) = input.split_once("\n\n").ok_or(InputError::Missing("blank line"))?;
    let mut rows = drawing.lines().rev();
    let labels = rows.next().ok_or(InputError::Missing("stack labels"))?;
    let n_stacks = labels.split_whitespace().count();

    let mut stacks = vec![vec![]; n_stacks];
    for row in rows {
        for (i, stack) in stacks.iter_mut().enumerate() {
            match row.as_bytes().get(4 * i + 1) {
                Some(&label @ b'A' ..= b'Z') => stack.push(label),
                Some(b' ') | None => (),
                Some(&c) => return Err(InputError::BadChar(c as char)),
            }
        }
    }

    let moves = moves.trim().lines().map(|line| {
        let words = line.split_whitespace().collect::<Vec<_>>();
        let ["move", count, "from", from, "to", to] = words[..] else {
            return Err(InputError::line(line));
        };
        let number = |s: &str| s.parse::<usize>().map_err(|_| InputError::line(line));
        let (count, from, to) = (number(count)?, number(from)?, number(to)?);
        if !(1 ..= n_stacks).contains(&from) || !(1 ..= n_stacks).contains(&to) {
            return Err(InputError::line(line));
        }
        Ok(Move {count, from: from - 1, to: to - 1})
    }).collect::<Result<_, _>>()?;

    Ok((stacks, moves))
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let (mut stacks, moves) = parse(input)?;
    for Move {count, from, to} in moves {
        let at = stacks[from].len().checked_sub(count).ok_or(InputError::NoSolution)?;
        let mut lifted = stacks[from].split_off(at);
        if part == 1 {lifted.reverse()};
        stacks[to].extend(lifted);
    }
    Ok(stacks.iter().filter_map(|stack| stack.last().map(|&c| c as char)).collect())
}
