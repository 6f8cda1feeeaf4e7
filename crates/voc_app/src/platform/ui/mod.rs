pub mod card;
pub mod constants;
pub mod focus;
pub mod input;
pub mod layout;
pub mod render;
