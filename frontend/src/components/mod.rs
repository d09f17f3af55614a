pub mod common;
pub mod confirm_dialog;
pub mod data_table;
pub mod empty_state;
pub mod error;
pub mod guard;
pub mod layout;
pub mod pagination;
pub mod toast;
