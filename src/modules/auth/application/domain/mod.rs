pub mod entities;
pub mod validators;

pub use entities::{Language, User};
