//! Form rendering module
//!
//! - `field_renderer`: text, select and checkbox inputs plus error lines
//! - `order_form`: the order form and its submit panel

mod field_renderer;
mod order_form;

pub use order_form::draw as draw_order_form;
