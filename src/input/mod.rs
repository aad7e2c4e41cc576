use macroquad::prelude::*;

/// Route window-close through the frame loop instead of exiting immediately,
/// so the loop sees it as a cancel signal and shuts down on its own path
pub fn intercept_window_close() {
    prevent_quit();
}

/// Escape pressed or window close requested during the current frame
pub fn cancel_requested() -> bool {
    is_key_pressed(KeyCode::Escape) || is_quit_requested()
}
