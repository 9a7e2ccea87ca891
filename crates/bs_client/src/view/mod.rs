use bs_core::{Article, BlogListing};

pub mod html;
pub mod terminal;

pub use html::HtmlView;
pub use terminal::TerminalView;

pub const READ_MORE: &str = "Read full article →";

/// Fixed user-facing messages shown in place of the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NoResults,
    NoBlogs,
    SearchFailed,
    RandomFailed,
    BlogsFailed,
}

impl Message {
    pub fn text(&self) -> &'static str {
        match self {
            Message::NoResults => "No results found. Try different keywords.",
            Message::NoBlogs => "No blogs indexed yet.",
            Message::SearchFailed => "Error searching articles. Please try again.",
            Message::RandomFailed => "Error getting random article. Please try again.",
            Message::BlogsFailed => "Error loading blogs. Please try again.",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Message::SearchFailed | Message::RandomFailed | Message::BlogsFailed
        )
    }
}

/// Display-ready contents of one article card, placeholders applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub meta: String,
}

impl From<&Article> for Card {
    fn from(article: &Article) -> Self {
        Self {
            title: article.display_title().to_string(),
            link: article.display_link().to_string(),
            summary: article.display_summary(),
            meta: article.meta_line(),
        }
    }
}

/// The page region a [`crate::SearchClient`] renders into.
pub trait View: Send {
    fn set_loading(&mut self, loading: bool);

    fn clear_results(&mut self);

    /// Replaces the results with one card per article, in order.
    fn show_articles(&mut self, articles: &[Article]);

    /// Replaces the results with a message.
    fn show_message(&mut self, message: Message);

    fn show_blogs(&mut self, blogs: &BlogListing);

    fn set_stats(&mut self, text: &str);

    fn clear_query(&mut self);
}
