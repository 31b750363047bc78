//! egui widgets of the viewer.

pub mod panels;
pub mod plot;
