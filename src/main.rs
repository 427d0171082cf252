use std::io;

use anyhow::Result;
use clap::Parser;
use tictac_console::{Console, Controller, GameConfig, Session};
use tictac_engine::MoveOrder;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tictac", version, about = "Tic-tac-toe against a computer that never loses")]
struct Args {
    /// Who plays X, moving first: human | computer
    #[arg(long, default_value_t = Controller::Human)]
    x: Controller,

    /// Who plays O: human | computer
    #[arg(long, default_value_t = Controller::Computer)]
    o: Controller,

    /// Order the computer tries squares in, which decides ties: center-first | ascending
    #[arg(long, default_value_t = MoveOrder::CenterFirst)]
    order: MoveOrder,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config = GameConfig {
        x: args.x,
        o: args.o,
        order: args.order,
    };
    info!(x = %config.x, o = %config.o, order = %config.order, "tictac starting");

    let console = Console::new(io::stdin().lock(), io::stdout());
    let tally = Session::new(console, &config).run()?;
    info!(games = tally.games(), "tictac shutting down");
    Ok(())
}
