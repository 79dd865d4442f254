use aoc2022::{cli::Args, input, logger};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let fname = args.input_file();
    tracing::debug!("reading {}", fname.display());
    let input = input::load(&fname)?;
    let time = std::time::Instant::now();
    let answer = aoc2022::solve(args.day, args.part, &input)?;
    println!("{}", answer);
    tracing::info!("{} seconds elapsed", time.elapsed().as_secs_f32());
    if let Some(expected) = &args.expect {
        anyhow::ensure!(answer == *expected, "expected {}, got {}", expected, answer);
    }
    Ok(())
}
