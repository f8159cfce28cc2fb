//! Level text loader.
//!
//! One line of text per grid row:
//!
//! | glyph          | meaning                               |
//! |----------------|---------------------------------------|
//! | `#`            | stone wall                            |
//! | `.`            | dirt floor                            |
//! | `\|`           | closed door                           |
//! | space, tab     | blank (outside the map)               |
//! | `P`            | player start                          |
//! | `R`, `S`       | rat, spider                           |
//!
//! Rows are padded with blank tiles to the longest line. Cells holding the
//! player or a monster have no terrain of their own; they are resolved in a
//! second pass by copying a dirt floor from their 3x3 neighbourhood.

use std::path::Path;

use anyhow::Context;
use game_core::{GameConfig, Level, LevelError, Monster, MonsterKind, Player, Position, Tile, TileKind};

use crate::loaders::{LoadResult, read_file};

/// Grid cell before placeholder resolution.
#[derive(Clone, Debug)]
enum Cell {
    Resolved(Tile),
    Pending,
}

/// Loader for level text files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level from a text file.
    pub fn load(path: &Path, config: &GameConfig) -> LoadResult<Level> {
        let content = read_file(path)?;
        Self::parse(&content, config)
            .with_context(|| format!("Failed to parse level {}", path.display()))
    }

    /// Parse level text into a [`Level`].
    pub fn parse(text: &str, config: &GameConfig) -> Result<Level, LevelError> {
        let lines: Vec<&str> = text.lines().map(|line| line.trim_end_matches('\r')).collect();
        if lines.is_empty() {
            return Err(LevelError::EmptyLevel);
        }

        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let mut player_start = None;
        let mut monsters = Vec::new();
        let mut grid = Vec::with_capacity(lines.len());

        for (y, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(width);
            for (x, character) in line.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                let cell = match character {
                    ' ' | '\t' => Cell::Resolved(Tile::blank()),
                    '#' => Cell::Resolved(Tile::new(TileKind::StoneWall)),
                    '.' => Cell::Resolved(Tile::new(TileKind::DirtFloor)),
                    '|' => Cell::Resolved(Tile::new(TileKind::Door { open: false })),
                    GameConfig::PLAYER_START_GLYPH => {
                        player_start = Some(position);
                        Cell::Pending
                    }
                    other => match MonsterKind::from_glyph(other) {
                        Some(kind) => {
                            monsters.push(Monster::new(kind, position));
                            Cell::Pending
                        }
                        None => {
                            return Err(LevelError::InvalidMapCharacter {
                                character: other,
                                line: y + 1,
                                column: x + 1,
                            });
                        }
                    },
                };
                row.push(cell);
            }
            row.resize(width, Cell::Resolved(Tile::blank()));
            grid.push(row);
        }

        resolve_pending(&mut grid)?;

        let player = player_start.ok_or(LevelError::MissingPlayerStart)?;
        let rows = grid
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| match cell {
                        Cell::Resolved(tile) => tile,
                        Cell::Pending => Tile::blank(),
                    })
                    .collect()
            })
            .collect();

        let mut level = Level::from_rows(rows, Player::new(player), config);
        for monster in monsters {
            level.insert_monster(monster)?;
        }
        Ok(level)
    }
}

/// Replaces every pending cell with a dirt floor found in its 3x3
/// neighbourhood, clipped to the grid.
fn resolve_pending(grid: &mut [Vec<Cell>]) -> Result<(), LevelError> {
    let height = grid.len();
    for y in 0..height {
        let width = grid[y].len();
        for x in 0..width {
            if !matches!(grid[y][x], Cell::Pending) {
                continue;
            }

            let found = neighbourhood(x, y, width, height).any(|(nx, ny)| {
                matches!(&grid[ny][nx], Cell::Resolved(tile) if tile.kind() == TileKind::DirtFloor)
            });
            if !found {
                return Err(LevelError::UnresolvedPendingTile {
                    position: Position::new(x as i32, y as i32),
                });
            }
            grid[y][x] = Cell::Resolved(Tile::new(TileKind::DirtFloor));
        }
    }
    Ok(())
}

/// Cells of the 3x3 block centred on `(x, y)` that lie inside the grid.
fn neighbourhood(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let xs = x.saturating_sub(1)..=(x + 1).min(width - 1);
    xs.flat_map(move |nx| (y.saturating_sub(1)..=(y + 1).min(height - 1)).map(move |ny| (nx, ny)))
}
