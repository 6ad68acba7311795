pub mod api;
pub mod share;
pub mod ui;
