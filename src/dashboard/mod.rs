mod clipboard;
mod error;
mod form;
mod view;

pub use clipboard::{Clipboard, MemoryClipboard, TerminalClipboard};
pub use error::DashboardError;
pub use form::ContractForm;
pub use view::DashboardView;
