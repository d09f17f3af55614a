pub mod config;
pub mod repository;
pub mod rows;
pub mod state;
pub mod view_model;

mod panel;

pub use panel::EntityListPanel;
