#[cfg(database_env)]
pub mod database;
mod mock_impl;

pub use mock_impl::{mock, Mock};
