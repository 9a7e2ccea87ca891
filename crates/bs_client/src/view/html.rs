use std::fmt::Write as _;

use bs_core::format;
use bs_core::{Article, BlogListing};

use super::{Card, Message, View, READ_MORE};

/// Keeps the page state in memory and renders it as HTML.
#[derive(Debug, Default, Clone)]
pub struct HtmlView {
    query: String,
    loading: bool,
    results: String,
    stats: Option<String>,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Inner HTML of the results region.
    pub fn results_html(&self) -> &str {
        &self.results
    }

    /// Text of the stats field, `None` until stats were loaded once.
    pub fn stats_text(&self) -> Option<&str> {
        self.stats.as_deref()
    }

    pub fn render_page(&self) -> String {
        let loading_class = if self.loading { "loading" } else { "loading hidden" };
        let stats = self.stats.as_deref().unwrap_or("");
        format!(
            concat!(
                "<form id=\"searchForm\"><input id=\"query\" type=\"text\" value=\"{}\">",
                "<button type=\"submit\">Search</button>",
                "<button id=\"randomButton\" type=\"button\">Random</button></form>\n",
                "<div id=\"stats\">Total articles: <span id=\"totalArticles\">{}</span></div>\n",
                "<div id=\"loading\" class=\"{}\">Loading...</div>\n",
                "<div id=\"results\">{}</div>\n"
            ),
            escape(&self.query),
            escape(stats),
            loading_class,
            self.results
        )
    }
}

impl View for HtmlView {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn clear_results(&mut self) {
        self.results.clear();
    }

    fn show_articles(&mut self, articles: &[Article]) {
        self.results = articles
            .iter()
            .map(|article| render_card(&Card::from(article)))
            .collect();
    }

    fn show_message(&mut self, message: Message) {
        let class = if message.is_error() { "error" } else { "no-results" };
        self.results = format!("<p class=\"{}\">{}</p>", class, escape(message.text()));
    }

    fn show_blogs(&mut self, blogs: &BlogListing) {
        let mut out = String::from("<ul class=\"blog-list\">");
        for (name, info) in blogs {
            let _ = write!(
                out,
                "<li><strong>{}</strong> <small>{} | latest: {}</small></li>",
                escape(name),
                format::format_article_count(info.count),
                escape(&format::format_published(info.latest.as_deref()))
            );
        }
        out.push_str("</ul>");
        self.results = out;
    }

    fn set_stats(&mut self, text: &str) {
        self.stats = Some(text.to_string());
    }

    fn clear_query(&mut self) {
        self.query.clear();
    }
}

/// Links open in a new browsing context without access to the opener.
fn render_link(href: &str, class: Option<&str>, text: &str) -> String {
    let class = class
        .map(|c| format!(" class=\"{}\"", c))
        .unwrap_or_default();
    format!(
        "<a href=\"{}\"{} target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape(href),
        class,
        escape(text)
    )
}

pub fn render_card(card: &Card) -> String {
    format!(
        concat!(
            "<div class=\"article-card\">",
            "<h3>{}</h3>",
            "<p>{}</p>",
            "<div class=\"article-meta\"><small>{}</small>{}</div>",
            "</div>"
        ),
        render_link(&card.link, None, &card.title),
        escape(&card.summary),
        escape(&card.meta),
        render_link(&card.link, Some("read-more"), READ_MORE)
    )
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
