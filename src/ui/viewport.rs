//! Mapping between world coordinates and terminal cells.

use ratatui::layout::Rect;

/// Scales a `world_width x world_height` world onto a cell area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    area: Rect,
    world_width: f64,
    world_height: f64,
}

impl Viewport {
    pub fn new(area: Rect, world_width: f64, world_height: f64) -> Self {
        Self {
            area,
            world_width,
            world_height,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn is_empty(&self) -> bool {
        self.area.width == 0 || self.area.height == 0
    }

    /// World point at the center of the cell at (`col`, `row`), area-relative.
    pub fn cell_center(&self, col: u16, row: u16) -> (f64, f64) {
        let cell_w = self.world_width / self.area.width.max(1) as f64;
        let cell_h = self.world_height / self.area.height.max(1) as f64;
        ((col as f64 + 0.5) * cell_w, (row as f64 + 0.5) * cell_h)
    }

    /// Area-relative cell holding a world point, or `None` if off screen.
    pub fn to_cell(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if self.is_empty() || x < 0.0 || y < 0.0 || x >= self.world_width || y >= self.world_height
        {
            return None;
        }
        let col = (x / self.world_width * self.area.width as f64) as u16;
        let row = (y / self.world_height * self.area.height as f64) as u16;
        Some((
            col.min(self.area.width - 1),
            row.min(self.area.height - 1),
        ))
    }
}
