//! egui drawing of the section views.

pub mod panels;
pub mod plot;
pub mod table;
