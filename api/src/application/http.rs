pub mod food_analysis;
pub mod health;
pub mod history;
pub mod profile;
pub mod server;
pub mod session;
