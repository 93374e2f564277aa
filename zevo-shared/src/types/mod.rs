pub mod api;
pub mod catalog;
pub mod event;
pub mod pagination;

pub use api::*;
pub use catalog::*;
pub use event::*;
pub use pagination::*;
