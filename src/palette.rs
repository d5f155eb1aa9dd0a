//! Palette strip - sprite panels with automatic flow layout
//!
//! Panels live in an arena and reference their children by index, so a
//! parent never holds a raw pointer to a sibling with its own lifetime.
//! A child is owned by exactly one parent, appended once and never
//! removed or reparented; its position is assigned at add time and never
//! recomputed afterwards.
//!
//! Note: the accessors mirror the full panel API; the editor loop itself
//! only hit-tests and draws.

#![allow(dead_code)]

use macroquad::prelude::*;

use crate::ui::{MouseState, Rect};

/// Index of a panel in the palette arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelId(usize);

/// A positioned, scaled sprite that can own child panels
pub struct Panel {
    texture: Texture2D,
    pos: Vec2,
    scale: Vec2,
    padding: Vec2,
    cursor: (u32, u32),
    children: Vec<PanelId>,
}

impl Panel {
    /// Wrap an already-loaded texture. Loading (and its fatal failure
    /// path) happens at startup, before any panel exists.
    pub fn new(texture: Texture2D, pos: Vec2, scale: Vec2) -> Self {
        Self {
            texture,
            pos,
            scale,
            padding: vec2(20.0, 20.0),
            cursor: (1, 1),
            children: Vec::new(),
        }
    }

    /// On-screen size: native texture bounds times the scale factor
    fn size(&self) -> Vec2 {
        vec2(
            self.texture.width() * self.scale.x,
            self.texture.height() * self.scale.y,
        )
    }

    fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size())
    }
}

/// One flow-layout placement step against the parent's own frame.
///
/// A child whose x-position is left of the parent is still unplaced; it
/// gets the slot at the current (column, row) cursor and the column
/// advances. If the placed child then pokes past the parent's right edge
/// it wraps: column resets to 1, the row advances, and the child is
/// repositioned with the same formula. The wrap does not consume column 1
/// (the next item lands there again) and can fire even for the first item
/// of a row when the parent is narrow; both quirks are inherited behavior
/// and kept as-is.
fn flow_place(
    parent_pos: Vec2,
    parent_size: Vec2,
    padding: Vec2,
    cursor: &mut (u32, u32),
    child_pos: &mut Vec2,
    child_size: Vec2,
) {
    let slot = |cursor: (u32, u32)| {
        parent_pos
            + vec2(
                padding.x * 3.0 * cursor.0 as f32,
                padding.y * 3.0 * cursor.1 as f32,
            )
            - vec2(35.0, 35.0)
    };

    if child_pos.x < parent_pos.x {
        *child_pos = slot(*cursor);
        cursor.0 += 1;
    }

    if child_pos.x + child_size.x > parent_pos.x + parent_size.x {
        cursor.0 = 1;
        cursor.1 += 1;
        *child_pos = slot(*cursor);
    }
}

/// Arena of palette panels
#[derive(Default)]
pub struct Palette {
    panels: Vec<Panel>,
}

impl Palette {
    pub fn new() -> Self {
        Self { panels: Vec::new() }
    }

    pub fn insert(&mut self, panel: Panel) -> PanelId {
        self.panels.push(panel);
        PanelId(self.panels.len() - 1)
    }

    /// Append `child` under `parent` and assign its position from the
    /// parent's flow cursor
    pub fn add_item(&mut self, parent: PanelId, child: PanelId) {
        let parent_pos = self.panels[parent.0].pos;
        let parent_size = self.panels[parent.0].size();
        let padding = self.panels[parent.0].padding;
        let child_size = self.panels[child.0].size();

        let mut cursor = self.panels[parent.0].cursor;
        let mut child_pos = self.panels[child.0].pos;
        flow_place(
            parent_pos,
            parent_size,
            padding,
            &mut cursor,
            &mut child_pos,
            child_size,
        );
        self.panels[parent.0].cursor = cursor;
        self.panels[child.0].pos = child_pos;

        self.panels[parent.0].children.push(child);
    }

    /// Override the flow padding for future placements under this panel
    pub fn set_padding(&mut self, id: PanelId, padding: Vec2) {
        self.panels[id.0].padding = padding;
    }

    pub fn position(&self, id: PanelId) -> Vec2 {
        self.panels[id.0].pos
    }

    pub fn set_position(&mut self, id: PanelId, pos: Vec2) {
        self.panels[id.0].pos = pos;
    }

    pub fn size(&self, id: PanelId) -> Vec2 {
        self.panels[id.0].size()
    }

    /// Whether the pointer is currently over the panel's on-screen rect
    pub fn is_clicked(&self, id: PanelId, mouse: &MouseState) -> bool {
        mouse.inside(&self.panels[id.0].rect())
    }

    /// Draw the panel sprite, then every descendant
    pub fn draw(&self, id: PanelId) {
        let panel = &self.panels[id.0];
        draw_texture_ex(
            &panel.texture,
            panel.pos.x,
            panel.pos.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(panel.size()),
                ..Default::default()
            },
        );
        for &child in &panel.children {
            self.draw(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Places a fresh child (still at the origin) under a parent at
    // (560, 0) and returns its assigned position.
    fn place(
        parent_size: Vec2,
        cursor: &mut (u32, u32),
        child_size: Vec2,
    ) -> Vec2 {
        let mut child_pos = Vec2::ZERO;
        flow_place(
            vec2(560.0, 0.0),
            parent_size,
            vec2(20.0, 20.0),
            cursor,
            &mut child_pos,
            child_size,
        );
        child_pos
    }

    #[test]
    fn test_flow_six_items_wrap_at_right_edge() {
        let parent_size = vec2(140.0, 700.0);
        let item = vec2(20.0, 20.0);
        let mut cursor = (1, 1);

        // Row 1: columns 1 and 2 fit, column 3 pokes past x = 700 and wraps
        assert_eq!(place(parent_size, &mut cursor, item), vec2(585.0, 25.0));
        assert_eq!(place(parent_size, &mut cursor, item), vec2(645.0, 25.0));
        assert_eq!(place(parent_size, &mut cursor, item), vec2(585.0, 85.0));
        assert_eq!(cursor, (1, 2));

        // The wrap did not consume column 1, so the next item lands on the
        // wrapped one; inherited behavior
        assert_eq!(place(parent_size, &mut cursor, item), vec2(585.0, 85.0));
        assert_eq!(place(parent_size, &mut cursor, item), vec2(645.0, 85.0));
        assert_eq!(place(parent_size, &mut cursor, item), vec2(585.0, 145.0));
        assert_eq!(cursor, (1, 3));
    }

    #[test]
    fn test_flow_wide_parent_never_wraps() {
        let parent_size = vec2(700.0, 700.0);
        let item = vec2(20.0, 20.0);
        let mut cursor = (1, 1);

        for col in 1..=6 {
            let pos = place(parent_size, &mut cursor, item);
            assert_eq!(pos, vec2(560.0 + 60.0 * col as f32 - 35.0, 25.0));
        }
        assert_eq!(cursor, (7, 1));
    }

    #[test]
    fn test_flow_immediate_wrap_on_narrow_parent() {
        // Narrow enough that even column 1 overflows: the very first item
        // wraps straight to row 2
        let parent_size = vec2(30.0, 700.0);
        let item = vec2(20.0, 20.0);
        let mut cursor = (1, 1);

        assert_eq!(place(parent_size, &mut cursor, item), vec2(585.0, 85.0));
        assert_eq!(cursor, (1, 2));
    }

    #[test]
    fn test_flow_skips_already_placed_child() {
        // A child at or right of the parent's x is considered placed and
        // keeps its position (cursor untouched unless it overflows)
        let mut cursor = (3, 2);
        let mut child_pos = vec2(600.0, 100.0);
        flow_place(
            vec2(560.0, 0.0),
            vec2(140.0, 700.0),
            vec2(20.0, 20.0),
            &mut cursor,
            &mut child_pos,
            vec2(20.0, 20.0),
        );
        assert_eq!(child_pos, vec2(600.0, 100.0));
        assert_eq!(cursor, (3, 2));
    }

    #[test]
    fn test_flow_respects_padding_override() {
        let mut cursor = (1, 1);
        let mut child_pos = Vec2::ZERO;
        flow_place(
            vec2(560.0, 0.0),
            vec2(700.0, 700.0),
            vec2(10.0, 10.0),
            &mut cursor,
            &mut child_pos,
            vec2(20.0, 20.0),
        );
        assert_eq!(child_pos, vec2(560.0 + 30.0 - 35.0, 30.0 - 35.0));
    }
}
