use std::io::{self, Write};

use bs_core::format;
use bs_core::{Article, BlogListing};
use crossterm::style::Stylize;

use super::{Card, Message, View, READ_MORE};

/// Streams the page as plain text, one card per block.
pub struct TerminalView<W: Write + Send> {
    out: W,
    styled: bool,
    query: String,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            styled: false,
            query: String::new(),
        }
    }

    pub fn with_style(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }

    fn render_card(&self, card: &Card) -> String {
        let title = if self.styled {
            card.title.as_str().bold().to_string()
        } else {
            card.title.clone()
        };
        let meta = if self.styled {
            card.meta.as_str().dark_grey().to_string()
        } else {
            card.meta.clone()
        };
        format!(
            "{}\n  {}\n  {}\n  {}: {}\n",
            title, card.summary, meta, READ_MORE, card.link
        )
    }
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> View for TerminalView<W> {
    fn set_loading(&mut self, loading: bool) {
        if loading {
            self.emit("Loading...");
        }
    }

    // A stream cannot take back what it already printed.
    fn clear_results(&mut self) {}

    fn show_articles(&mut self, articles: &[Article]) {
        for article in articles {
            let block = self.render_card(&Card::from(article));
            self.emit(&block);
        }
    }

    fn show_message(&mut self, message: Message) {
        let text = if self.styled && message.is_error() {
            message.text().red().to_string()
        } else {
            message.text().to_string()
        };
        self.emit(&text);
    }

    fn show_blogs(&mut self, blogs: &BlogListing) {
        for (name, info) in blogs {
            let line = format!(
                "{} ({}, latest: {})",
                name,
                format::format_article_count(info.count),
                format::format_published(info.latest.as_deref())
            );
            self.emit(&line);
        }
    }

    fn set_stats(&mut self, text: &str) {
        self.emit(&format!("Total articles: {}", text));
    }

    fn clear_query(&mut self) {
        self.query.clear();
    }
}
