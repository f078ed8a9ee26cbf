pub mod time_service;
pub mod version_service;
