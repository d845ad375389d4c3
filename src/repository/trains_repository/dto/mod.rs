mod train;

pub use train::*;
