pub mod entity_form;
pub mod entity_list;
pub mod login;
pub mod shell;
