use bs_core::format::{self, STATS_UNAVAILABLE};
use bs_core::{Article, BlogListing, Result, StatsSummary};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

use crate::api::SearchApi;
use crate::view::{Message, View};

/// Drives the search page: one network call per user action, rendered into
/// the owned view.
///
/// The view lock is only taken to render, never across a request, so
/// overlapping actions race and whichever response resolves last is what
/// stays on screen.
pub struct SearchClient<A, V> {
    api: A,
    view: Mutex<V>,
}

impl<A: SearchApi, V: View> SearchClient<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view: Mutex::new(view),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn view(&self) -> MutexGuard<'_, V> {
        self.view.lock().await
    }

    pub fn into_view(self) -> V {
        self.view.into_inner()
    }

    /// Search-form entry point. Blank input issues no request.
    pub async fn submit(&self, input: &str) -> Result<Option<Vec<Article>>> {
        let query = input.trim();
        if query.is_empty() {
            debug!("Ignoring empty query");
            return Ok(None);
        }
        self.search(query).await.map(Some)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Article>> {
        info!("🔎 Searching for {:?}", query);
        self.start_loading().await;

        let result = self.api.search(query).await;

        let mut view = self.view.lock().await;
        match &result {
            Ok(articles) if articles.is_empty() => view.show_message(Message::NoResults),
            Ok(articles) => {
                debug!("Rendering {} results", articles.len());
                view.clear_results();
                view.show_articles(articles);
            }
            Err(e) => {
                error!("Search error: {}", e);
                view.show_message(Message::SearchFailed);
            }
        }
        view.set_loading(false);
        result
    }

    pub async fn random_article(&self) -> Result<Article> {
        info!("🎲 Fetching a random article");
        {
            let mut view = self.view.lock().await;
            view.clear_query();
        }
        self.start_loading().await;

        let result = self.api.random().await;

        let mut view = self.view.lock().await;
        match &result {
            Ok(article) => {
                view.clear_results();
                view.show_articles(std::slice::from_ref(article));
            }
            Err(e) => {
                error!("Random article error: {}", e);
                view.show_message(Message::RandomFailed);
            }
        }
        view.set_loading(false);
        result
    }

    /// Never fails: on any error the stats field reads "N/A".
    pub async fn load_stats(&self) -> Option<StatsSummary> {
        let result = self.api.stats().await;

        let mut view = self.view.lock().await;
        match result {
            Ok(stats) => {
                view.set_stats(&format::format_count(stats.total_articles));
                Some(stats)
            }
            Err(e) => {
                warn!("Stats error: {}", e);
                view.set_stats(STATS_UNAVAILABLE);
                None
            }
        }
    }

    pub async fn list_blogs(&self) -> Result<BlogListing> {
        info!("📚 Listing blogs");
        self.start_loading().await;

        let result = self.api.blogs().await;

        let mut view = self.view.lock().await;
        match &result {
            Ok(blogs) if blogs.is_empty() => view.show_message(Message::NoBlogs),
            Ok(blogs) => {
                view.clear_results();
                view.show_blogs(blogs);
            }
            Err(e) => {
                error!("Blog listing error: {}", e);
                view.show_message(Message::BlogsFailed);
            }
        }
        view.set_loading(false);
        result
    }

    async fn start_loading(&self) {
        let mut view = self.view.lock().await;
        view.set_loading(true);
        view.clear_results();
    }
}
