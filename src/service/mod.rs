pub mod tickets_service;
pub mod trains_service;
pub mod users_service;
