pub mod error;
pub mod linked_list;

pub use error::{ListError, Result};
pub use linked_list::LinkedSequence;
