mod trains_service;
mod trains_service_impl;

pub use trains_service::*;
pub use trains_service_impl::*;
