//! Shape generation for 2D primitives
//!
//! All positions are in viewport pixels (origin top-left, y down); the
//! pipeline converts them to clip space.

use super::vertex::{Palette, Vertex};
use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::sim::{GameState, Rect};

/// Border thickness around the play field
const BORDER: f32 = 4.0;

/// Two triangles covering a rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, b, color),
    ]
}

/// Build the whole frame: field, apples, player, and the game-over veil
pub fn scene_vertices(state: &GameState, palette: &Palette) -> Vec<Vertex> {
    // field + border + 2 quads per apple + player + veil
    let mut vertices = Vec::with_capacity((state.apples.len() * 2 + 4) * 6);

    let outer = Rect::new(
        -BORDER,
        -BORDER,
        VIEWPORT_WIDTH + 2.0 * BORDER,
        VIEWPORT_HEIGHT + 2.0 * BORDER,
    );
    let field = Rect::new(0.0, 0.0, VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    vertices.extend(rect(&outer, palette.border));
    vertices.extend(rect(&field, palette.field));

    for apple in &state.apples {
        // Apples above the top edge would draw over the border
        let top = apple.y.max(0.0);
        let bottom = (apple.y + apple.height).min(VIEWPORT_HEIGHT);
        if bottom <= top {
            continue;
        }
        let body = Rect::new(apple.x, top, apple.width, bottom - top);
        vertices.extend(rect(&body, palette.apple));

        let leaf = Rect::new(
            apple.center_x(),
            apple.y,
            apple.width / 4.0,
            apple.height / 5.0,
        );
        if leaf.top() >= 0.0 {
            vertices.extend(rect(&leaf, palette.apple_leaf));
        }
    }

    let player_color = if state.drag.is_some() {
        palette.player_grabbed
    } else {
        palette.player
    };
    vertices.extend(rect(&state.player.rect(), player_color));

    if state.is_over() {
        vertices.extend(rect(&field, palette.game_over_veil));
    }

    vertices
}
