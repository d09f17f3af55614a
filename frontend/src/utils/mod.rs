pub mod cookies;
pub mod navigation;
pub mod request_sequence;
pub mod time;
