mod browse;
mod config;
mod page;

pub use browse::{BrowseOptions, cmd_browse};
pub use config::{cmd_config_set, cmd_config_show};
pub use page::cmd_page;
