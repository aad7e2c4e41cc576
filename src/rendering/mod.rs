use macroquad::prelude::*;

use crate::application::{RenderSink, Tint};
use crate::input;

impl From<Tint> for Color {
    fn from(tint: Tint) -> Self {
        Color::from_rgba(tint.r, tint.g, tint.b, 255)
    }
}

/// Render sink drawing into the macroquad window.
///
/// Only install it from inside the window's main future, where the
/// graphics context exists.
pub struct MacroquadSink {
    background: Color,
}

impl MacroquadSink {
    /// Take over window-close handling and start drawing on black
    pub fn install() -> Self {
        input::intercept_window_close();
        Self { background: BLACK }
    }
}

impl RenderSink for MacroquadSink {
    fn present(&mut self, live_cells: &[(usize, usize)], cell_size: f32, color: Tint) {
        clear_background(self.background);

        let color = Color::from(color);
        for &(x, y) in live_cells {
            draw_rectangle(x as f32 * cell_size, y as f32 * cell_size, cell_size, cell_size, color);
        }
    }

    fn poll_cancel(&mut self) -> bool {
        input::cancel_requested()
    }
}
