pub mod field;
pub mod fields;
pub mod repository;
pub mod state;
pub mod view_model;

mod panel;

pub use panel::EntityFormPage;
pub use state::FormRoute;
