//! Game loop thread: drives the round controller in real time and hands every
//! emitted event to the presenter.
//!
//! The controller is created inside this thread so it never crosses threads.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::Context;

use quickdraw_core::state::GameStateSnapshot;
use quickdraw_sim::engine::{RoundController, SimConfig};

use crate::presenter::Presenter;
use crate::state::{AppState, GameLoopCommand, SharedSnapshot};

/// Wall-clock length of one tick. Simulation time runs at real speed.
pub fn tick_duration(tick_ms: u64) -> Duration {
    Duration::from_millis(tick_ms.max(1))
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: SimConfig,
    presenter: Box<dyn Presenter + Send>,
) -> anyhow::Result<AppState> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = latest_snapshot.clone();

    let thread = std::thread::Builder::new()
        .name("quickdraw-game-loop".into())
        .spawn(move || run_game_loop(config, presenter, cmd_rx, &shared))
        .context("failed to spawn game loop thread")?;

    Ok(AppState::new(cmd_tx, latest_snapshot, thread))
}

/// Whether the loop should keep going after draining the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Move every pending command into the controller's queue.
pub fn drain_commands(
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    engine: &mut RoundController,
) -> LoopControl {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return LoopControl::Stop,
            Err(mpsc::TryRecvError::Empty) => return LoopControl::Continue,
            Err(mpsc::TryRecvError::Disconnected) => return LoopControl::Stop,
        }
    }
}

/// Advance one tick and present what happened.
pub fn step(
    engine: &mut RoundController,
    presenter: &mut dyn Presenter,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut snapshot = engine.tick();
    for event in snapshot.events.drain(..) {
        presenter.present(&event);
    }
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot);
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    mut presenter: Box<dyn Presenter + Send>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let tick = tick_duration(config.tick_ms);
    let mut engine = RoundController::new(config);
    let mut next_tick_time = Instant::now();
    tracing::debug!(tick_ms = tick.as_millis() as u64, "game loop running");

    loop {
        if drain_commands(&cmd_rx, &mut engine) == LoopControl::Stop {
            break;
        }

        step(&mut engine, presenter.as_mut(), latest_snapshot);

        next_tick_time += tick;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
    tracing::debug!("game loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdraw_core::commands::PlayerCommand;
    use quickdraw_core::enums::{GamePhase, HitOutcome};
    use quickdraw_core::types::LogEntry;

    #[derive(Clone, Default)]
    struct Recorder {
        logs: Arc<Mutex<Vec<String>>>,
    }

    impl Presenter for Recorder {
        fn on_log(&mut self, entry: &LogEntry) {
            self.logs.lock().unwrap().push(entry.message.clone());
        }

        fn on_hit(&mut self, target_id: u32, outcome: HitOutcome, _remaining_lives: u32) {
            self.logs
                .lock()
                .unwrap()
                .push(format!("hit {target_id} {outcome:?}"));
        }
    }

    fn start() -> PlayerCommand {
        PlayerCommand::Start {
            difficulty: "easy".into(),
            player_name: "Tester".into(),
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(start())).unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Reload))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::Start { .. })
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Reload)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_drain_stops_on_shutdown_and_disconnect() {
        let mut engine = RoundController::new(SimConfig::default());

        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::PlayerCommand(start())).unwrap();
        assert_eq!(drain_commands(&rx, &mut engine), LoopControl::Continue);
        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert_eq!(drain_commands(&rx, &mut engine), LoopControl::Stop);
        drop(tx);
        assert_eq!(drain_commands(&rx, &mut engine), LoopControl::Stop);

        // The queued start is applied on the next tick.
        assert_eq!(engine.tick().phase, GamePhase::Active);
    }

    #[test]
    fn test_step_presents_events_and_stores_snapshot() {
        let mut engine = RoundController::new(SimConfig::default());
        let mut recorder = Recorder::default();
        let latest = Mutex::new(None);

        engine.queue_command(start());
        step(&mut engine, &mut recorder, &latest);

        assert_eq!(*recorder.logs.lock().unwrap(), vec!["Game started!"]);
        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(snapshot.events.is_empty(), "Events are handed to the presenter");
    }

    #[test]
    fn test_loop_thread_starts_round_and_shuts_down() {
        let recorder = Recorder::default();
        let logs = recorder.logs.clone();
        let app = spawn_game_loop(
            SimConfig {
                tick_ms: 1,
                ..Default::default()
            },
            Box::new(recorder),
        )
        .unwrap();

        app.send(start()).unwrap();
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.latest_snapshot().map(|s| s.phase) != Some(GamePhase::Active) {
            assert!(Instant::now() < deadline, "Round never started");
            std::thread::sleep(Duration::from_millis(1));
        }

        app.shutdown().unwrap();
        assert!(logs
            .lock()
            .unwrap()
            .iter()
            .any(|line| line == "Game started!"));
    }

    #[test]
    fn test_tick_duration() {
        assert_eq!(tick_duration(33), Duration::from_millis(33));
        assert_eq!(tick_duration(0), Duration::from_millis(1));
    }
}
