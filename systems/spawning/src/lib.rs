#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawning system responsible for emitting enemy spawn commands.

use std::time::Duration;

use maze_escape_core::{CellCoord, Command, Event, SessionPhase};

/// Spawn cadence used by the bundled level: one enemy every three seconds,
/// matching 180 frames at 60 fps.
pub const DEFAULT_SPAWN_INTERVAL: Duration = Duration::from_secs(3);

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    spawn_interval: Duration,
}

impl Config {
    /// Creates a new configuration using the provided spawn cadence.
    #[must_use]
    pub const fn new(spawn_interval: Duration) -> Self {
        Self { spawn_interval }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_SPAWN_INTERVAL)
    }
}

/// Pure system that deterministically emits spawn commands while the
/// session runs.
#[derive(Debug)]
pub struct Spawning {
    spawn_interval: Duration,
    accumulator: Duration,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            spawn_interval: config.spawn_interval,
            accumulator: Duration::ZERO,
        }
    }

    /// Consumes events and the enemy start cell to emit spawn commands.
    ///
    /// Elapsed time only accumulates from `TimeAdvanced` events observed
    /// while the session phase is `Running`; any other phase clears the
    /// countdown so a fresh run starts from a full interval.
    pub fn handle(
        &mut self,
        events: &[Event],
        phase: SessionPhase,
        spawn_cell: Option<CellCoord>,
        out: &mut Vec<Command>,
    ) {
        if phase != SessionPhase::Running {
            self.accumulator = Duration::ZERO;
            return;
        }

        let Some(cell) = spawn_cell else {
            return;
        };

        if self.spawn_interval.is_zero() {
            return;
        }

        let mut accumulated = Duration::ZERO;
        for event in events {
            if let Event::TimeAdvanced { dt } = event {
                accumulated = accumulated.saturating_add(*dt);
            }
        }

        if accumulated.is_zero() {
            return;
        }

        self.accumulator = self.accumulator.saturating_add(accumulated);
        while self.accumulator >= self.spawn_interval {
            self.accumulator -= self.spawn_interval;
            out.push(Command::SpawnEnemy { cell });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_never_spawns() {
        let mut spawning = Spawning::new(Config::new(Duration::ZERO));
        let mut commands = Vec::new();

        spawning.handle(
            &[Event::TimeAdvanced {
                dt: Duration::from_secs(10),
            }],
            SessionPhase::Running,
            Some(CellCoord::new(0, 0)),
            &mut commands,
        );

        assert!(commands.is_empty());
    }

    #[test]
    fn missing_spawn_cell_suppresses_commands() {
        let mut spawning = Spawning::new(Config::default());
        let mut commands = Vec::new();

        spawning.handle(
            &[Event::TimeAdvanced {
                dt: Duration::from_secs(10),
            }],
            SessionPhase::Running,
            None,
            &mut commands,
        );

        assert!(commands.is_empty());
    }
}
