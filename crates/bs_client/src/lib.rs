pub mod api;
pub mod client;
pub mod config;
pub mod logging;
pub mod view;

#[cfg(test)]
mod test_utils;

pub use api::{HttpApi, SearchApi};
pub use client::SearchClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use view::{HtmlView, Message, TerminalView, View};

pub mod prelude {
    pub use super::{ClientConfig, HtmlView, HttpApi, SearchApi, SearchClient, TerminalView, View};
    pub use bs_core::{Article, BlogListing, Error, Result, StatsSummary};
}
