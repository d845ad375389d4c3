mod dto;
mod entity;
mod trains_repository;
mod trains_repository_impl;

pub use dto::Train;
pub use trains_repository::*;
pub use trains_repository_impl::*;
