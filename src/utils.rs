pub mod request;
pub mod time;
