#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Session glue that turns adapter input and physics reports into commands.
//!
//! The input collaborator delivers an edge-triggered start press; the physics
//! collaborator delivers the overlaps it resolved this frame. Neither talks
//! to the world directly: this system translates both into commands, and the
//! world remains the sole authority on whether they take effect.

use maze_escape_core::{Command, Event, Overlap, SessionPhase};

/// Input snapshot distilled from adapter-provided frame input data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Indicates whether the start key was pressed on this frame.
    pub start_pressed: bool,
}

impl FrameInput {
    /// Creates a new input descriptor with explicit field values.
    #[must_use]
    pub const fn new(start_pressed: bool) -> Self {
        Self { start_pressed }
    }
}

/// Session system that mirrors the world's phase and emits lifecycle commands.
#[derive(Debug, Clone)]
pub struct Session {
    phase: SessionPhase,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a new session system awaiting the first start press.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: SessionPhase::NotStarted,
        }
    }

    /// Consumes world events, frame input and physics overlap reports.
    ///
    /// Emits `StartGame` for a start press while the session awaits one, and
    /// forwards overlap reports as commands while frames are processed. The
    /// mirrored phase trails the world by exactly the events provided.
    pub fn handle(
        &mut self,
        events: &[Event],
        input: FrameInput,
        overlaps: &[Overlap],
        out: &mut Vec<Command>,
    ) {
        for event in events {
            match event {
                Event::LevelLoaded { .. } => self.phase = SessionPhase::NotStarted,
                Event::GameStarted => self.phase = SessionPhase::Running,
                Event::LevelCompleted => self.phase = SessionPhase::LevelComplete,
                Event::GameOver => self.phase = SessionPhase::GameOver,
                _ => {}
            }
        }

        if input.start_pressed && self.phase == SessionPhase::NotStarted {
            out.push(Command::StartGame);
        }

        if self.phase == SessionPhase::Running {
            for overlap in overlaps {
                out.push(Command::ReportOverlap { overlap: *overlap });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameInput, Session};
    use maze_escape_core::{CellCoord, Command, Event, Overlap, SessionPhase};

    #[test]
    fn start_press_emits_exactly_one_command() {
        let mut session = Session::new();
        let mut commands = Vec::new();

        session.handle(&[], FrameInput::new(true), &[], &mut commands);
        assert_eq!(commands, vec![Command::StartGame]);

        // The world confirms the start; later presses are ignored.
        commands.clear();
        session.handle(
            &[Event::GameStarted],
            FrameInput::new(true),
            &[],
            &mut commands,
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn overlaps_are_dropped_until_the_session_runs() {
        let mut session = Session::new();
        let mut commands = Vec::new();
        let overlaps = [Overlap::PlayerKey];

        session.handle(&[], FrameInput::default(), &overlaps, &mut commands);
        assert!(commands.is_empty());

        session.handle(
            &[Event::GameStarted],
            FrameInput::default(),
            &overlaps,
            &mut commands,
        );
        assert_eq!(
            commands,
            vec![Command::ReportOverlap {
                overlap: Overlap::PlayerKey
            }]
        );
    }

    #[test]
    fn terminal_events_stop_overlap_forwarding() {
        let mut session = Session::new();
        let mut commands = Vec::new();
        session.handle(
            &[Event::GameStarted],
            FrameInput::default(),
            &[],
            &mut commands,
        );
        assert_eq!(session.phase, SessionPhase::Running);

        session.handle(
            &[Event::GameOver],
            FrameInput::default(),
            &[Overlap::PlayerDoor],
            &mut commands,
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn loading_a_level_rearms_the_start_press() {
        let mut session = Session::new();
        let mut commands = Vec::new();
        session.handle(
            &[Event::GameStarted, Event::GameOver],
            FrameInput::default(),
            &[],
            &mut commands,
        );

        session.handle(
            &[Event::LevelLoaded {
                columns: 5,
                rows: 5,
                player_start: CellCoord::new(1, 1),
                enemy_start: CellCoord::new(3, 3),
            }],
            FrameInput::new(true),
            &[],
            &mut commands,
        );
        assert_eq!(commands, vec![Command::StartGame]);
    }
}
