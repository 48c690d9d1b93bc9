pub mod common;
pub mod constant;
pub mod song;
