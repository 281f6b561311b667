//! Errors for rejected player commands.

use std::fmt;

use crate::enums::GamePhase;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The setup form requires a non-empty player name.
    BlankPlayerName,
    /// `Start` while a round is already running.
    RoundAlreadyActive,
    /// A round-only command arrived outside an active round.
    NoActiveRound { phase: GamePhase },
    /// No bandit with this id exists in the current round.
    UnknownTarget { target_id: u32 },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankPlayerName => write!(f, "player name must not be blank"),
            Self::RoundAlreadyActive => write!(f, "a round is already in progress"),
            Self::NoActiveRound { phase } => {
                write!(f, "no active round (phase: {phase:?})")
            }
            Self::UnknownTarget { target_id } => write!(f, "unknown target id {target_id}"),
        }
    }
}

impl std::error::Error for CommandError {}
