//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match (&app.state.current_view, &app.state.form) {
        (View::Form, Some(form)) => forms::draw_order_form(frame, main_area, form),
        _ => home::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
