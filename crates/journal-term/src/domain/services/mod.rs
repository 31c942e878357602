pub mod app_state;
pub mod delegate;
pub mod events;
pub mod layout;
pub mod main_panel;
pub mod side_panel;

pub use app_state::*;
pub use delegate::*;
pub use layout::*;
pub use main_panel::*;
pub use side_panel::*;
