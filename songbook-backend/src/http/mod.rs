pub mod extract;
mod timeout;

pub use timeout::timeout;
