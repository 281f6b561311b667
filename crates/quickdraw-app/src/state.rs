//! State shared between the input side and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::{anyhow, Context};

use quickdraw_core::commands::PlayerCommand;
use quickdraw_core::state::GameStateSnapshot;

/// Commands sent from the input side to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the round controller.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the loop after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Handle to a running game loop.
pub struct AppState {
    command_tx: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: SharedSnapshot,
    thread: Option<JoinHandle<()>>,
}

impl AppState {
    pub fn new(
        command_tx: mpsc::Sender<GameLoopCommand>,
        latest_snapshot: SharedSnapshot,
        thread: JoinHandle<()>,
    ) -> Self {
        Self {
            command_tx,
            latest_snapshot,
            thread: Some(thread),
        }
    }

    /// Forward a player command to the loop.
    pub fn send(&self, command: PlayerCommand) -> anyhow::Result<()> {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| anyhow!("game loop is not running"))
    }

    /// Copy of the most recent snapshot, if the loop has ticked yet.
    pub fn latest_snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Stop the loop and wait for its thread to exit.
    pub fn shutdown(mut self) -> anyhow::Result<()> {
        // The loop may already be gone; joining tells us how it ended.
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            thread
                .join()
                .map_err(|_| anyhow!("game loop thread panicked"))
                .context("failed to stop game loop")?;
        }
        Ok(())
    }
}
