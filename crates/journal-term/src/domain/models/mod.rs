mod command;
mod entry;
mod entry_store;
mod error;
mod event;
mod ui_state;

pub use command::*;
pub use entry::*;
pub use entry_store::*;
pub use error::*;
pub use event::*;
pub use ui_state::*;
