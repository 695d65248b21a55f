use crate::game::{Cell, GameConfig, GameState};

/// The closed set of things a frame can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Head,
    Food,
    TailSegment,
}

/// Axis-aligned square in pixel space, `cell_size` on a side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub size: u32,
}

/// One drawable entity: its grid cell plus where it lands on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub cell: Cell,
    pub rect: PixelRect,
}

/// Snapshot the game state as a list of drawables. A pure read: presenters
/// consume this instead of reaching into the simulation, and the mapping
/// from cell to pixel rect (scale by `cell_size`) lives in exactly one
/// place.
pub fn snapshot(state: &GameState, config: &GameConfig) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(state.tail.len() + 2);

    for &cell in &state.tail {
        sprites.push(sprite(SpriteKind::TailSegment, cell, config));
    }
    sprites.push(sprite(SpriteKind::Head, state.head, config));
    sprites.push(sprite(SpriteKind::Food, state.food, config));

    sprites
}

fn sprite(kind: SpriteKind, cell: Cell, config: &GameConfig) -> Sprite {
    let size = config.cell_size;
    Sprite {
        kind,
        cell,
        rect: PixelRect {
            x: cell.x * size as i32,
            y: cell.y * size as i32,
            size,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_lists_every_entity() {
        let config = GameConfig::default();
        let mut state = GameState::new(Cell::new(4, 2), Cell::new(7, 7), 20, 1);
        state.tail.push_front(Cell::new(3, 2));
        state.tail.push_front(Cell::new(4, 2));

        let sprites = snapshot(&state, &config);
        assert_eq!(sprites.len(), 4);
        assert_eq!(
            sprites
                .iter()
                .filter(|s| s.kind == SpriteKind::TailSegment)
                .count(),
            2
        );
        assert!(sprites
            .iter()
            .any(|s| s.kind == SpriteKind::Head && s.cell == Cell::new(4, 2)));
        assert!(sprites
            .iter()
            .any(|s| s.kind == SpriteKind::Food && s.cell == Cell::new(7, 7)));
    }

    #[test]
    fn cells_scale_to_pixels_by_cell_size() {
        let config = GameConfig {
            cell_size: 16,
            ..GameConfig::default()
        };
        let state = GameState::new(Cell::new(3, 5), Cell::new(1, 1), 20, 1);

        let sprites = snapshot(&state, &config);
        let head = sprites
            .iter()
            .find(|s| s.kind == SpriteKind::Head)
            .unwrap();
        assert_eq!(head.rect, PixelRect { x: 48, y: 80, size: 16 });
    }
}
