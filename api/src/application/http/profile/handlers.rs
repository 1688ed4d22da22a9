pub mod get_profile;
pub mod submit_profile;
