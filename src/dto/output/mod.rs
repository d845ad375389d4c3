mod ticket;
mod train;
mod user;

pub use ticket::*;
pub use train::*;
pub use user::*;
