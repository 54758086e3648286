pub mod handler;

pub use handler::handle_command;
