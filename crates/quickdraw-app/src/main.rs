use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;

use quickdraw_app::game_loop;
use quickdraw_app::input::{self, Input, StartDefaults};
use quickdraw_app::logging;
use quickdraw_app::presenter::{render_status, ConsolePresenter, JsonPresenter, Presenter};
use quickdraw_core::constants::DEFAULT_TICK_MS;
use quickdraw_sim::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "quickdraw")]
#[command(about = "Shoot the bandits before they get away")]
struct Args {
    /// RNG seed for spawn order and slots
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Simulation milliseconds per tick
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,
    /// Print events as JSON lines instead of text
    #[arg(long)]
    json: bool,
    /// Difficulty used when `start` omits it
    #[arg(long, default_value = "normal")]
    difficulty: String,
    /// Player name; starts a round right away when given
    #[arg(long)]
    name: Option<String>,
}

fn main() -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(logging::log_filter(rust_log.as_deref()))
        .init();

    let args = Args::parse();
    let defaults = StartDefaults {
        difficulty: args.difficulty.clone(),
        player_name: args.name.clone(),
    };

    let presenter: Box<dyn Presenter + Send> = if args.json {
        Box::new(JsonPresenter::new(io::stdout()))
    } else {
        Box::new(ConsolePresenter::new(io::stdout()))
    };
    let config = SimConfig {
        seed: args.seed,
        tick_ms: args.tick_ms,
        ..Default::default()
    };
    tracing::info!(seed = config.seed, tick_ms = config.tick_ms, "starting quickdraw");
    let app = game_loop::spawn_game_loop(config, presenter)?;

    if !args.json {
        println!("{}", input::HELP);
    }
    if defaults.player_name.is_some() {
        app.send(defaults.start_command())?;
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        match input::parse_line(&line, &defaults) {
            Ok(None) => {}
            Ok(Some(Input::Player(command))) => app.send(command)?,
            Ok(Some(Input::Status)) => match app.latest_snapshot() {
                Some(snapshot) => print!("{}", render_status(&snapshot)),
                None => println!("no state yet"),
            },
            Ok(Some(Input::Help)) => println!("{}", input::HELP),
            Ok(Some(Input::Quit)) => break,
            Err(err) => eprintln!("{err:#}"),
        }
    }

    app.shutdown()
}
