pub mod analysis_history;
pub mod food_analysis_response;
pub mod nutrition;

pub use analysis_history::*;
pub use food_analysis_response::*;
pub use nutrition::*;
