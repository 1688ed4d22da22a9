pub mod policies;
pub mod ports;

pub use ports::LocalStore;
