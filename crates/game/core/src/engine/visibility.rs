//! Field-of-view computation backing the fog of war.

use crate::state::{Level, Position};

/// Recomputes visibility around `origin`.
///
/// Every tile loses its `visible` flag, then rays are cast from `origin` to
/// each cell on the square perimeter of `radius`. Cells along a ray become
/// visible until the ray leaves the sight circle, leaves the grid, or passes
/// an opaque tile (the opaque tile itself is lit). Lit tiles are marked seen.
pub fn update_visibility(level: &mut Level, origin: Position, radius: i32) {
    for tile in level.tiles_mut() {
        tile.set_visible(false);
    }
    if let Some(tile) = level.tile_mut(origin) {
        tile.set_visible(true);
    }

    let radius = radius.max(0);
    for target in perimeter(origin, radius) {
        cast_ray(level, origin, target, radius);
    }
}

fn cast_ray(level: &mut Level, origin: Position, target: Position, radius: i32) {
    let radius_sq = radius * radius;
    for point in line(origin, target).into_iter().skip(1) {
        let (dx, dy) = (point.x - origin.x, point.y - origin.y);
        if dx * dx + dy * dy > radius_sq {
            return;
        }
        let Some(tile) = level.tile_mut(point) else {
            return;
        };
        tile.set_visible(true);
        if tile.kind().is_opaque() {
            return;
        }
    }
}

fn perimeter(origin: Position, radius: i32) -> impl Iterator<Item = Position> {
    let horizontal = (-radius..=radius).flat_map(move |dx| {
        [
            Position::new(origin.x + dx, origin.y - radius),
            Position::new(origin.x + dx, origin.y + radius),
        ]
    });
    let vertical = (-radius + 1..radius).flat_map(move |dy| {
        [
            Position::new(origin.x - radius, origin.y + dy),
            Position::new(origin.x + radius, origin.y + dy),
        ]
    });
    horizontal.chain(vertical)
}

/// Bresenham line from `from` to `to`, both endpoints included.
pub(crate) fn line(from: Position, to: Position) -> Vec<Position> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut points = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    let (mut x, mut y) = (from.x, from.y);
    let mut err = dx + dy;
    loop {
        points.push(Position::new(x, y));
        if x == to.x && y == to.y {
            return points;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
