pub mod cli;
pub mod error;
pub mod input;
pub mod logger;

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
pub mod day12;
pub mod day13;
pub mod day14;
pub mod day15;
pub mod day17;
pub mod day18;
pub mod day19;
pub mod day20;
pub mod day21;
pub mod day22;

pub use error::InputError;

/// Every day takes the part number (1 or 2) and the raw input text.
pub type Solver = fn(u8, &str) -> anyhow::Result<String>;

pub const DAYS: [Option<Solver>; 25] = [
    Some(day01::solve), Some(day02::solve), Some(day03::solve), Some(day04::solve),
    Some(day05::solve), Some(day06::solve), Some(day07::solve), Some(day08::solve),
    Some(day09::solve), Some(day10::solve), Some(day11::solve), Some(day12::solve),
    Some(day13::solve), Some(day14::solve), Some(day15::solve), None,
    Some(day17::solve), Some(day18::solve), Some(day19::solve), Some(day20::solve),
    Some(day21::solve), Some(day22::solve), None, None, None,
];

pub fn solve(day: u8, part: u8, input: &str) -> anyhow::Result<String> {
    if part != 1 && part != 2 {
        return Err(InputError::BadPart(part).into());
    }
    let solver = (1 ..= 25).contains(&day)
        .then(|| DAYS[day as usize - 1])
        .flatten()
        .ok_or(InputError::UnknownDay(day))?;
    solver(part, input)
}
