//! Thread handlers.

mod add_thread;
mod get_detail_thread;

pub use add_thread::{AddThreadCommand, AddThreadHandler};
pub use get_detail_thread::{GetDetailThreadHandler, GetDetailThreadQuery};
