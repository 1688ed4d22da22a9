pub mod common;
pub mod food_analysis;
pub mod profile;
pub mod session;
pub mod storage;
