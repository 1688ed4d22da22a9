pub mod entities;
pub mod insights;
pub mod ports;
pub mod prompts;
pub mod schema;
pub mod services;
pub mod validation;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
