// Board planner - one planning cycle per invocation
// Reads a get-board response, prints the engine commands to issue

use anyhow::Context;
use board_planner::fetch::{self, BoardSource, FileSource, StaticSource};
use board_planner::logging;
use board_planner::{vlog, Planner, PlannerConfig, RetryPolicy};
use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "planner",
    about = "Plan bomb and stone moves from an engine board snapshot"
)]
struct Args {
    /// File holding the get-board output; stdin when omitted (no retry)
    snapshot: Option<PathBuf>,

    /// Account that receives the first stone lane
    #[arg(long = "player-1")]
    player_1: String,

    /// Account that receives the second stone lane
    #[arg(long = "player-2")]
    player_2: String,

    /// Plan every step against the raw snapshot without simulating earlier moves
    #[arg(long)]
    no_update: bool,

    /// Seconds to wait before re-reading an unavailable board
    #[arg(long, default_value_t = RetryPolicy::DEFAULT_DELAY.as_secs())]
    retry_delay: u64,

    /// Verbose output on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> PlannerConfig {
        let retry = if self.snapshot.is_some() {
            RetryPolicy {
                delay: Duration::from_secs(self.retry_delay),
                ..RetryPolicy::default()
            }
        } else {
            RetryPolicy::no_retry()
        };
        PlannerConfig {
            update_matrix: !self.no_update,
            retry,
            verbose: self.verbose,
        }
    }
}

/// Main function that runs one planning cycle:
/// 1. Fetches the snapshot (with one delayed retry for file input)
/// 2. Parses it into a grid
/// 3. Plans bombs, then stone lanes for both players
/// 4. Prints the resulting engine commands on stdout
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.config();
    if config.verbose {
        logging::enable_verbose_logging();
    }

    let mut source: Box<dyn BoardSource> = match &args.snapshot {
        Some(path) => Box::new(FileSource { path: path.clone() }),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading snapshot from stdin")?;
            Box::new(StaticSource(text))
        }
    };

    let grid = fetch::fetch_and_parse(source.as_mut(), &config.retry)
        .context("could not obtain a board for this planning cycle")?;
    if logging::is_verbose() {
        grid.debug_print();
    }

    let mut planner = Planner::new(grid);
    let plan = planner.plan(&args.player_1, &args.player_2, config.update_matrix);

    // Shortfalls are reported, the caller decides what to do with them
    if plan.bombs.len() < board_planner::BOMBS_PER_PLAYER {
        eprintln!("only {} bomb target(s) available", plan.bombs.len());
    }
    if !plan.stones.is_complete() {
        eprintln!(
            "only {} of 2 players got a stone lane",
            plan.stones.assignments().len()
        );
    }
    vlog!("{} commands planned", plan.commands().len());

    let stdout = io::stdout();
    plan.write_commands(&mut stdout.lock()).context("writing commands")?;
    Ok(())
}
