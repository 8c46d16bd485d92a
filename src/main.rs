use boardplay::console::Console;
use boardplay::{rules_for, GameSession, Variant};
use clap::Parser;

/// Play checkers, chess or fantasy chess against yourself in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Options {
    /// Which game to set up
    #[arg(short, long, value_enum, default_value_t = Variant::Fantasy)]
    variant: Variant,

    /// Seed for the `random` command, for reproducible games
    #[arg(short, long)]
    seed: Option<u64>,
}

// ---------------------------------------------
// Main
// ---------------------------------------------

fn main() {
    env_logger::init();
    let options = Options::parse();

    let session = GameSession::new(rules_for(options.variant));
    Console::new(session, options.seed).run();
}
