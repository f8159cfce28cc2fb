//! The level: tile grid plus everything that lives on it.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::GameConfig;
use crate::error::LevelError;

use super::common::Position;
use super::entities::{Monster, Player};
use super::events::EventLog;
use super::tile::Tile;

/// Complete world state owned by the simulation.
///
/// The grid is always rectangular: construction pads every row to the length
/// of the longest one. Presentation instances only ever see clones of a
/// `Level` wrapped in an `Arc`, never the instance being mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    tiles: Vec<Vec<Tile>>,
    width: usize,
    tile_size: u32,
    pub player: Player,
    /// Monsters keyed by their cell; ordered so iteration is stable.
    pub monsters: BTreeMap<Position, Monster>,
    /// Cells tinted by the renderer for debugging.
    pub debug: BTreeSet<Position>,
    pub events: EventLog,
}

impl Level {
    /// Builds a level from possibly jagged rows, padding with blank tiles.
    pub fn from_rows(rows: Vec<Vec<Tile>>, player: Player, config: &GameConfig) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let tiles = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Tile::blank());
                row
            })
            .collect();

        Self {
            tiles,
            width,
            tile_size: config.tile_size,
            player,
            monsters: BTreeMap::new(),
            debug: BTreeSet::new(),
            events: EventLog::new(config.event_capacity),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width
            && (position.y as usize) < self.tiles.len()
    }

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        if !self.contains(position) {
            return None;
        }
        Some(&self.tiles[position.y as usize][position.x as usize])
    }

    pub fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        if !self.contains(position) {
            return None;
        }
        Some(&mut self.tiles[position.y as usize][position.x as usize])
    }

    /// Rows in top-to-bottom order.
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Tile)> {
        self.tiles.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, tile)| (Position::new(x as i32, y as i32), tile))
        })
    }

    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut().flatten()
    }

    /// Places a monster, refusing cells that are already occupied or off-grid.
    pub fn insert_monster(&mut self, monster: Monster) -> Result<(), LevelError> {
        let position = monster.position();
        if !self.contains(position) {
            return Err(LevelError::OutOfBounds { position });
        }
        if self.monsters.contains_key(&position) {
            return Err(LevelError::CellOccupied { position });
        }
        self.monsters.insert(position, monster);
        Ok(())
    }

    pub fn monster_at(&self, position: Position) -> Option<&Monster> {
        self.monsters.get(&position)
    }

    pub fn is_highlighted(&self, position: Position) -> bool {
        self.debug.contains(&position)
    }

    pub fn highlight(&mut self, position: Position) {
        self.debug.insert(position);
    }

    pub fn push_event(&mut self, event: impl Into<String>) {
        self.events.push(event);
    }
}
