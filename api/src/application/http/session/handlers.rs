pub mod get_session;
pub mod logout;
