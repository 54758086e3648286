pub mod helpers;
pub mod text_input;
