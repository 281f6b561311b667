//! Line-oriented command protocol for the console front end.
//!
//! ```text
//! start [difficulty] [name...]   begin a round (play again from the score screen)
//! hit <id>                       click a bandit by id
//! shoot <x> <y>                  click a play-field coordinate
//! reload | reset | status | help | quit
//! {"type":"Reload"}              any PlayerCommand as JSON
//! ```

use anyhow::{bail, Context, Result};

use quickdraw_core::commands::PlayerCommand;

pub const HELP: &str = "\
commands:
  start [difficulty] [name...]  start a round (easy, normal, hard)
  hit <id>                      shoot the bandit with that id
  shoot <x> <y>                 shoot at a play-field coordinate
  reload                        refill the cylinder
  reset                         back to the setup screen
  status                        show the bandit overview
  help                          this text
  quit                          leave the game";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Player(PlayerCommand),
    Status,
    Help,
    Quit,
}

/// Values used when `start` omits them.
#[derive(Debug, Clone, Default)]
pub struct StartDefaults {
    pub difficulty: String,
    pub player_name: Option<String>,
}

impl StartDefaults {
    pub fn start_command(&self) -> PlayerCommand {
        PlayerCommand::Start {
            difficulty: self.difficulty.clone(),
            player_name: self.player_name.clone().unwrap_or_default(),
        }
    }
}

/// Parse one line. Blank lines yield `None`.
pub fn parse_line(line: &str, defaults: &StartDefaults) -> Result<Option<Input>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if line.starts_with('{') {
        let command: PlayerCommand =
            serde_json::from_str(line).context("invalid JSON command")?;
        return Ok(Some(Input::Player(command)));
    }

    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let input = match verb.as_str() {
        "start" | "again" => {
            let difficulty = args
                .first()
                .map(|d| d.to_string())
                .unwrap_or_else(|| defaults.difficulty.clone());
            let player_name = if args.len() > 1 {
                args[1..].join(" ")
            } else {
                defaults.player_name.clone().unwrap_or_default()
            };
            Input::Player(PlayerCommand::Start {
                difficulty,
                player_name,
            })
        }
        "hit" => {
            let [id] = args[..] else {
                bail!("usage: hit <id>");
            };
            let target_id = id
                .parse::<u32>()
                .with_context(|| format!("invalid bandit id: {id}"))?;
            Input::Player(PlayerCommand::Hit { target_id })
        }
        "shoot" => {
            let [x, y] = args[..] else {
                bail!("usage: shoot <x> <y>");
            };
            let x = x
                .parse::<f64>()
                .with_context(|| format!("invalid x coordinate: {x}"))?;
            let y = y
                .parse::<f64>()
                .with_context(|| format!("invalid y coordinate: {y}"))?;
            Input::Player(PlayerCommand::ShootAt { x, y })
        }
        "reload" | "r" => Input::Player(PlayerCommand::Reload),
        "reset" => Input::Player(PlayerCommand::Reset),
        "status" | "s" => Input::Status,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => bail!("unknown command: {other} (try `help`)"),
    };
    Ok(Some(input))
}
