pub mod models;
pub mod vcs;
