//! Presentation adapters. The engine only emits events; a presenter turns
//! them into output and audio.

use std::io::Write;

use quickdraw_core::enums::{Difficulty, HitOutcome, RoundResult, SoundCue};
use quickdraw_core::events::GameEvent;
use quickdraw_core::state::GameStateSnapshot;
use quickdraw_core::types::{LogEntry, Position};

/// Outbound interface of the engine. Every method defaults to doing nothing.
pub trait Presenter {
    /// Entry point for one event. Defaults to [`dispatch`].
    fn present(&mut self, event: &GameEvent) {
        dispatch(self, event);
    }

    fn on_round_started(&mut self, _difficulty: Difficulty, _player_name: &str) {}
    fn on_target_spawned(&mut self, _target_id: u32, _name: &str, _position: Position) {}
    fn on_target_removed(&mut self, _target_id: u32) {}
    fn on_hit(&mut self, _target_id: u32, _outcome: HitOutcome, _remaining_lives: u32) {}
    fn on_escape(&mut self, _target_id: u32, _name: &str) {}
    fn on_ammo_changed(&mut self, _remaining: u32, _capacity: u32) {}
    fn on_reload(&mut self) {}
    fn on_lives_changed(&mut self, _lives: u32) {}
    fn on_log(&mut self, _entry: &LogEntry) {}
    fn on_round_ended(&mut self, _result: RoundResult, _final_score: u32) {}
    fn on_sound(&mut self, _cue: SoundCue) {}
}

/// Route an event to the matching presenter method, then play its sound cues.
pub fn dispatch<P: Presenter + ?Sized>(presenter: &mut P, event: &GameEvent) {
    match event {
        GameEvent::RoundStarted {
            difficulty,
            player_name,
        } => presenter.on_round_started(*difficulty, player_name),
        GameEvent::TargetSpawned {
            target_id,
            name,
            position,
        } => presenter.on_target_spawned(*target_id, name, *position),
        GameEvent::TargetRemoved { target_id } => presenter.on_target_removed(*target_id),
        GameEvent::Hit {
            target_id,
            outcome,
            remaining_lives,
        } => presenter.on_hit(*target_id, *outcome, *remaining_lives),
        GameEvent::Escape { target_id, name } => presenter.on_escape(*target_id, name),
        GameEvent::AmmoChanged {
            remaining,
            capacity,
        } => presenter.on_ammo_changed(*remaining, *capacity),
        GameEvent::Reloaded => presenter.on_reload(),
        GameEvent::LivesChanged { lives } => presenter.on_lives_changed(*lives),
        GameEvent::Log(entry) => presenter.on_log(entry),
        GameEvent::RoundEnded {
            result,
            final_score,
        } => presenter.on_round_ended(*result, *final_score),
    }
    for cue in event.sound_cues() {
        presenter.on_sound(*cue);
    }
}

/// Human-readable terminal output.
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        // Output is best effort, the game keeps running without a terminal.
        let _ = self.out.write_fmt(text);
        let _ = self.out.write_all(b"\n");
        let _ = self.out.flush();
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn on_round_started(&mut self, difficulty: Difficulty, player_name: &str) {
        self.line(format_args!(
            "== Draw, {player_name}! Difficulty: {} ==",
            difficulty.label()
        ));
    }

    fn on_target_spawned(&mut self, target_id: u32, name: &str, position: Position) {
        self.line(format_args!(
            "{name} (#{target_id}) appears at ({}, {})",
            position.x, position.y
        ));
    }

    fn on_ammo_changed(&mut self, remaining: u32, capacity: u32) {
        self.line(format_args!("Ammo {remaining}/{capacity}"));
    }

    fn on_lives_changed(&mut self, lives: u32) {
        self.line(format_args!("Lives {lives}"));
    }

    fn on_log(&mut self, entry: &LogEntry) {
        self.line(format_args!("[{}] {}", entry.timestamp(), entry.message));
    }

    fn on_round_ended(&mut self, result: RoundResult, final_score: u32) {
        let banner = match result {
            RoundResult::Win => "Congratulations, you cleaned up the town!",
            RoundResult::Loss => "Game over.",
        };
        self.line(format_args!("== {banner} Final score: {final_score} =="));
    }

    fn on_sound(&mut self, cue: SoundCue) {
        tracing::trace!(?cue, "sound cue");
    }
}

/// One JSON object per event, for driving another front end.
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn present(&mut self, event: &GameEvent) {
        match serde_json::to_string(event) {
            Ok(json) => {
                let _ = writeln!(self.out, "{json}");
                let _ = self.out.flush();
            }
            Err(err) => tracing::error!(%err, "failed to encode event"),
        }
    }
}

/// Bandit overview table with health labels.
pub fn render_status(snapshot: &GameStateSnapshot) -> String {
    let mut out = format!(
        "{:?} | {} | lives {} | ammo {}/{}\n",
        snapshot.phase,
        if snapshot.player_name.is_empty() {
            "-"
        } else {
            snapshot.player_name.as_str()
        },
        snapshot.player_lives,
        snapshot.ammo.remaining,
        snapshot.ammo.capacity
    );
    for bandit in &snapshot.bandits {
        let place = match bandit.position {
            Some(p) => format!("at ({}, {})", p.x, p.y),
            None => "hiding".to_string(),
        };
        out.push_str(&format!(
            "  #{} {:<6} {:>6}  {}\n",
            bandit.id,
            bandit.name,
            bandit.health_label(),
            place
        ));
    }
    if let Some(summary) = snapshot.summary {
        out.push_str(&format!(
            "  {:?}, final score {}\n",
            summary.result, summary.final_score
        ));
    }
    out
}
