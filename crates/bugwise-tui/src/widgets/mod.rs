//! Custom widget components

mod error_banner;
mod form;
mod header;
mod history_list;
mod result_panel;
mod status_bar;

pub use error_banner::ErrorBanner;
pub use form::{BugForm, SPINNER_FRAMES};
pub use header::MainHeader;
pub use history_list::HistoryList;
pub use result_panel::ResultPanel;
pub use status_bar::StatusBar;
