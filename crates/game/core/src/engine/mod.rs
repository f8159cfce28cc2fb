//! Rules that mutate a [`Level`] in response to player input.
//!
//! [`LevelEngine`] borrows the simulation's level mutably for the duration of
//! one input. Rejected moves leave the level untouched and are not errors.

mod movement;
mod visibility;

pub use movement::MoveOutcome;
pub use visibility::update_visibility;

use crate::config::GameConfig;
use crate::input::Input;
use crate::state::{Level, Position};

pub struct LevelEngine<'a> {
    level: &'a mut Level,
    config: &'a GameConfig,
}

impl<'a> LevelEngine<'a> {
    pub fn new(level: &'a mut Level, config: &'a GameConfig) -> Self {
        Self { level, config }
    }

    /// Applies a directional input. Non-directional inputs are the caller's
    /// business and yield `None`.
    pub fn execute(&mut self, input: Input) -> Option<MoveOutcome> {
        let direction = input.direction()?;
        let outcome = movement::move_player(self.level, direction);

        if let MoveOutcome::OpenedDoor { .. } = outcome {
            self.level.push_event("Opened door");
        }
        if outcome.changes_view() {
            self.refresh_view();
        }
        Some(outcome)
    }

    /// Recomputes the field of view around the player and announces monsters
    /// that were not visible before.
    pub fn refresh_view(&mut self) {
        let before = self.visible_monsters();
        let origin = self.level.player.position();
        update_visibility(self.level, origin, self.config.sight_radius);

        let spotted: Vec<String> = self
            .visible_monsters()
            .into_iter()
            .filter(|position| !before.contains(position))
            .filter_map(|position| self.level.monster_at(position))
            .map(|monster| format!("A {} comes into view", monster.kind))
            .collect();
        for event in spotted {
            self.level.push_event(event);
        }
    }

    fn visible_monsters(&self) -> Vec<Position> {
        self.level
            .monsters
            .keys()
            .copied()
            .filter(|position| {
                self.level
                    .tile(*position)
                    .is_some_and(|tile| tile.is_visible())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Monster, MonsterKind, Player, Tile, TileKind};

    /// `#` wall, `|` closed door, ` ` blank, anything else floor.
    fn level_from(rows: &[&str], player: Position) -> Level {
        let rows = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        '#' => Tile::new(TileKind::StoneWall),
                        '|' => Tile::new(TileKind::Door { open: false }),
                        ' ' => Tile::blank(),
                        _ => Tile::new(TileKind::DirtFloor),
                    })
                    .collect()
            })
            .collect();
        Level::from_rows(rows, Player::new(player), &GameConfig::default())
    }

    #[test]
    fn moves_onto_floor() {
        let config = GameConfig::default();
        let mut level = level_from(&["#####", "#...#", "#####"], Position::new(1, 1));

        let outcome = LevelEngine::new(&mut level, &config).execute(Input::Right);

        assert_eq!(
            outcome,
            Some(MoveOutcome::Moved {
                to: Position::new(2, 1)
            })
        );
        assert_eq!(level.player.position(), Position::new(2, 1));
    }

    #[test]
    fn walls_reject_moves_silently() {
        let config = GameConfig::default();
        let mut level = level_from(&["#####", "#...#", "#####"], Position::new(1, 1));
        let before = level.clone();

        let outcome = LevelEngine::new(&mut level, &config).execute(Input::Up);

        assert_eq!(outcome, Some(MoveOutcome::Blocked));
        assert_eq!(level, before);
    }

    #[test]
    fn blank_and_edge_cells_are_not_entered() {
        let config = GameConfig::default();
        let mut level = level_from(&[". "], Position::new(0, 0));

        let mut engine = LevelEngine::new(&mut level, &config);
        assert_eq!(engine.execute(Input::Right), Some(MoveOutcome::Blocked));
        assert_eq!(engine.execute(Input::Left), Some(MoveOutcome::Blocked));
        assert_eq!(level.player.position(), Position::new(0, 0));
    }

    #[test]
    fn bumping_a_closed_door_opens_it_in_place() {
        let config = GameConfig::default();
        let mut level = level_from(&["#####", "#.|.#", "#####"], Position::new(1, 1));

        let mut engine = LevelEngine::new(&mut level, &config);
        assert_eq!(
            engine.execute(Input::Right),
            Some(MoveOutcome::OpenedDoor {
                at: Position::new(2, 1)
            })
        );
        assert_eq!(
            engine.execute(Input::Right),
            Some(MoveOutcome::Moved {
                to: Position::new(2, 1)
            })
        );
        assert_eq!(level.events.iter().last(), Some("Opened door"));
    }

    #[test]
    fn monsters_block_and_are_announced_once() {
        let config = GameConfig::default();
        let mut level = level_from(&["#####", "#...#", "#####"], Position::new(1, 1));
        level
            .insert_monster(Monster::new(MonsterKind::Rat, Position::new(3, 1)))
            .unwrap();

        let mut engine = LevelEngine::new(&mut level, &config);
        engine.refresh_view();
        assert_eq!(engine.execute(Input::Right), Some(MoveOutcome::Moved { to: Position::new(2, 1) }));
        assert_eq!(engine.execute(Input::Right), Some(MoveOutcome::Blocked));

        let events: Vec<_> = level.events.iter().collect();
        assert_eq!(events, ["A Rat comes into view"]);
    }

    #[test]
    fn non_directional_inputs_are_ignored() {
        let config = GameConfig::default();
        let mut level = level_from(&["..."], Position::new(0, 0));
        let mut engine = LevelEngine::new(&mut level, &config);
        assert_eq!(engine.execute(Input::QuitGame), None);
        assert_eq!(engine.execute(Input::None), None);
    }

    #[test]
    fn moving_keeps_fog_invariant() {
        let config = GameConfig::default().with_sight_radius(2);
        let mut level = level_from(&["..........", ".........."], Position::new(0, 0));
        let mut engine = LevelEngine::new(&mut level, &config);
        engine.refresh_view();
        for _ in 0..8 {
            engine.execute(Input::Right);
        }

        assert!(level.tile(Position::new(0, 0)).unwrap().is_seen());
        assert!(!level.tile(Position::new(0, 0)).unwrap().is_visible());
        for (_, tile) in level.cells() {
            assert!(!tile.is_visible() || tile.is_seen());
        }
    }
}
