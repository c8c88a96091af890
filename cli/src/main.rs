use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use crossword_core::PuzzleConfig;
use rand::{SeedableRng, rngs::SmallRng};

use session::{Command, Session};

mod render;
mod session;

/// Find the words hidden in a grid of letters.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Words to hide, each argument may also be a comma-separated list
    #[arg(required = true)]
    words: Vec<String>,

    /// Seed for a reproducible puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Print where the words were placed before play starts
    #[arg(long)]
    reveal: bool,

    /// Mark found words with lowercase letters instead of color
    #[arg(long)]
    no_color: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = PuzzleConfig::parse_list(&args.words.join(","))
        .context("Could not set up the puzzle")?;
    if config.words().is_empty() {
        bail!("No words to hide");
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Puzzle seed {}", seed);
    let mut session = Session::new(&config, SmallRng::seed_from_u64(seed))?;

    let mut stdout = io::stdout().lock();
    let color = !args.no_color;
    if args.reveal {
        render::draw_solution(&mut stdout, session.solution())?;
        let report = session.report();
        if !report.is_complete() {
            writeln!(stdout, "Not placed: {}", report.skipped.join(", "))?;
        }
    }
    render::draw(&mut stdout, &session, color)?;
    prompt(&mut stdout)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let message = match Command::parse(&line) {
            Command::Quit => break,
            Command::Undo => match session.undo() {
                Some(_) => "Undone.".to_owned(),
                None => "Nothing to undo.".to_owned(),
            },
            Command::Redo => match session.redo() {
                Some(_) => "Redone.".to_owned(),
                None => "Nothing to redo.".to_owned(),
            },
            Command::Guess(text) => {
                let submission = session.submit(text);
                if submission.is_finished() {
                    render::draw(&mut stdout, &session, color)?;
                    writeln!(stdout, "{}", submission.message())?;
                    return Ok(());
                }
                submission.message()
            }
        };
        render::draw(&mut stdout, &session, color)?;
        writeln!(stdout, "{}", message)?;
        prompt(&mut stdout)?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "Guess (:undo, :redo, :quit)> ")?;
    out.flush()
}
