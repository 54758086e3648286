pub mod app;
pub mod components;
pub mod domain;
pub mod infrastructure;
pub mod logger;
pub mod theme;
