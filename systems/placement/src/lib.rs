#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Placement planner that chooses the key and door cells for a level.
//!
//! The planner reacts to `LevelLoaded` by drawing two cells from the level's
//! walkable set: first the key, then the door, which must sit at least
//! [`MIN_KEY_DOOR_DISTANCE`] Manhattan steps away from the key. The distance
//! constraint is retried at most [`DOOR_RETRY_BUDGET`] times; on exhaustion
//! the last draw is accepted even when it violates the minimum. That fallback
//! keeps degenerate maps loadable and is deliberate, not a bug.

use maze_escape_core::{CellCoord, Command, Event, PlacementError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Minimum Manhattan distance separating the key cell from the door cell.
pub const MIN_KEY_DOOR_DISTANCE: u32 = 6;

/// Number of redraws allowed before a too-close door placement is accepted.
pub const DOOR_RETRY_BUDGET: u32 = 50;

/// Configuration parameters required to construct the placement planner.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided RNG seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// Cells chosen for the key and door of one level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyDoorPlan {
    /// Cell the key pickup should occupy.
    pub key_cell: CellCoord,
    /// Cell the exit door should occupy.
    pub door_cell: CellCoord,
}

/// Pure system that deterministically plans key and door placement.
#[derive(Debug)]
pub struct Placement {
    rng: ChaCha8Rng,
}

impl Placement {
    /// Creates a new placement planner using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Consumes events and the level's walkable set to emit placement commands.
    ///
    /// Emits one `PlaceKey` and one `PlaceDoor` command for every
    /// `LevelLoaded` event observed.
    pub fn handle(
        &mut self,
        events: &[Event],
        walkable: &[CellCoord],
        out: &mut Vec<Command>,
    ) -> Result<(), PlacementError> {
        for event in events {
            if let Event::LevelLoaded { .. } = event {
                let plan = self.plan(walkable)?;
                out.push(Command::PlaceKey {
                    cell: plan.key_cell,
                });
                out.push(Command::PlaceDoor {
                    cell: plan.door_cell,
                });
            }
        }
        Ok(())
    }

    /// Chooses the key and door cells from the provided walkable set.
    ///
    /// The walkable set is expected to already exclude the player and enemy
    /// start cells; the key cell is additionally excluded from the door draw.
    pub fn plan(&mut self, walkable: &[CellCoord]) -> Result<KeyDoorPlan, PlacementError> {
        let key_cell = pick_random_cell(walkable, &[], &mut self.rng)?;

        let excluded = [key_cell];
        let mut door_cell = pick_random_cell(walkable, &excluded, &mut self.rng)?;
        let mut attempts = 0;
        while key_cell.manhattan_distance(door_cell) < MIN_KEY_DOOR_DISTANCE
            && attempts < DOOR_RETRY_BUDGET
        {
            door_cell = pick_random_cell(walkable, &excluded, &mut self.rng)?;
            attempts += 1;
        }

        Ok(KeyDoorPlan {
            key_cell,
            door_cell,
        })
    }
}

/// Draws one cell uniformly at random from `walkable` minus `excluded`.
///
/// The candidate pool is filtered by coordinate equality on every call; no
/// caching takes place. Fails with [`PlacementError::NoWalkableCell`] when
/// the filtered pool is empty.
pub fn pick_random_cell<R: Rng>(
    walkable: &[CellCoord],
    excluded: &[CellCoord],
    rng: &mut R,
) -> Result<CellCoord, PlacementError> {
    let candidates: Vec<CellCoord> = walkable
        .iter()
        .copied()
        .filter(|cell| !excluded.contains(cell))
        .collect();

    if candidates.is_empty() {
        return Err(PlacementError::NoWalkableCell);
    }

    let pick = rng.gen_range(0..candidates.len());
    Ok(candidates[pick])
}

#[cfg(test)]
mod tests {
    use super::{pick_random_cell, Config, Placement};
    use maze_escape_core::{CellCoord, PlacementError};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn empty_candidate_pool_is_an_explicit_error() {
        let walkable = [CellCoord::new(2, 2)];
        let excluded = [CellCoord::new(2, 2)];
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        assert_eq!(
            pick_random_cell(&walkable, &excluded, &mut rng),
            Err(PlacementError::NoWalkableCell)
        );
    }

    #[test]
    fn planning_needs_at_least_two_cells() {
        let mut placement = Placement::new(Config::new(9));
        let walkable = [CellCoord::new(3, 3)];

        assert_eq!(
            placement.plan(&walkable),
            Err(PlacementError::NoWalkableCell)
        );
    }
}
