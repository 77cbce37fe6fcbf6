//! UI module for rendering the TUI

mod confirmation;
mod field_renderer;
mod review;
mod wizard;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match &app.state.current_view {
        View::Wizard => wizard::draw(frame, area, app),
        View::Confirmation => confirmation::draw(frame, area, app),
    }
}
