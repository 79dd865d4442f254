use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::InputError;

/// Ordered by the signal rules, so `[[2]]` and `[2]` compare equal.
#[derive(Debug, Clone)]
pub enum Packet {
    Int(u32),
    List(Vec<Packet>),
}

impl Packet {
    fn parse_from(bytes: &[u8], at: &mut usize) -> Option<Packet> {
        match *bytes.get(*at)? {
            b'[' => {
                *at += 1;
                let mut items = vec![];
                if bytes.get(*at) == Some(&b']') {
                    *at += 1;
                    return Some(Packet::List(items));
                }
                loop {
                    items.push(Self::parse_from(bytes, at)?);
                    match bytes.get(*at)? {
                        b',' => *at += 1,
                        b']' => {*at += 1; return Some(Packet::List(items))},
                        _ => return None,
                    }
                }
            },
            b'0' ..= b'9' => {
                let len = bytes[*at ..].iter().take_while(|c| c.is_ascii_digit()).count();
                let n = std::str::from_utf8(&bytes[*at .. *at + len]).ok()?.parse().ok()?;
                *at += len;
                Some(Packet::Int(n))
            },
            _ => None,
        }
    }
}

impl FromStr for Packet {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut at = 0;
        match Packet::parse_from(s.as_bytes(), &mut at) {
            Some(packet) if at == s.len() => Ok(packet),
            _ => Err(InputError::line(s)),
        }
    }
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Int(a), Packet::List(b)) => [Packet::Int(*a)][..].cmp(b.as_slice()),
            (Packet::List(a), Packet::Int(b)) => a.as_slice().cmp(&[Packet::Int(*b)][..]),
        }
    }
}

impl PartialEq for Packet {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Packet {}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Packet::Int(n) => write!(f, "{}", n),
            Packet::List(items) => write!(f, "[{}]", items.iter().join(",")),
        }
    }
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let packets = input.lines().filter(|line| !line.trim().is_empty())
        .map(str::parse::<Packet>).collect::<Result<Vec<_>, _>>()?;
    if part == 1 {
        if packets.len() % 2 != 0 {
            return Err(InputError::Missing("packet pairs").into());
        }
        Ok(packets.iter().tuples().positions(|(left, right)| left <= right)
            .map(|i| i + 1).sum::<usize>().to_string())
    } else {
        let dividers: [Packet; 2] = ["[[2]]".parse()?, "[[6]]".parse()?];
        // a divider's sorted position is one plus the packets that sort before it
        let position = |divider: &Packet, offset: usize| {
            1 + offset + packets.iter().filter(|&packet| packet < divider).count()
        };
        Ok((position(&dividers[0], 0) * position(&dividers[1], 1)).to_string())
    }
}
