use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "aoc2022", about = "Run one day of the 2022 puzzle calendar")]
pub struct Args {
    /// Day number
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Part to solve, 1 or 2
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: u8,

    /// Run against example N (`day{N}test{M}.in`) instead of the full input
    #[arg(short, long)]
    pub test: Option<u8>,

    /// Directory holding the input files
    #[arg(long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Explicit input file, overrides the day/test naming
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Fail unless the answer equals this value
    #[arg(long)]
    pub expect: Option<String>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn input_file(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| {
            crate::input::input_path(&self.input_dir, self.day, self.test)
        })
    }
}
