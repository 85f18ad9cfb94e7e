pub mod alert;
pub mod api;
pub mod catalog;
pub mod location;
pub mod pollution;
pub mod request;
pub mod route;
pub mod saved;
