use std::collections::HashMap;

use futures::future::join_all;

use super::model::NewsArticle;
use super::select::{round_robin, select_general};
use super::validate::{ValidArticle, sort_newest_first, validate_all};
use super::window::NewsWindow;
use crate::core::{FetchOptions, FhError, NewsService};

/// Everything one aggregation call needs besides the service.
#[derive(Debug, Clone)]
pub(crate) struct NewsParams {
    pub(crate) symbols: Vec<String>,
    pub(crate) max_articles: usize,
    pub(crate) window: NewsWindow,
    pub(crate) category: String,
    pub(crate) fetch: FetchOptions,
}

/// Trims and upper-cases symbols, dropping blanks. Repeats are kept.
pub(crate) fn clean_symbols<S: AsRef<str>>(symbols: &[S]) -> Vec<String> {
    symbols
        .iter()
        .map(|s| s.as_ref().trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Builds the article list, hiding every failure behind [`FhError::NewsUnavailable`].
pub(crate) async fn aggregate<S>(svc: &S, params: &NewsParams) -> Result<Vec<NewsArticle>, FhError>
where
    S: NewsService + ?Sized,
{
    match assemble(svc, params).await {
        Ok(articles) => Ok(articles),
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch news");
            Err(FhError::NewsUnavailable)
        }
    }
}

async fn assemble<S>(svc: &S, params: &NewsParams) -> Result<Vec<NewsArticle>, FhError>
where
    S: NewsService + ?Sized,
{
    let mut articles = Vec::new();

    if !params.symbols.is_empty() {
        let feeds = fetch_feeds(svc, params).await;
        articles = round_robin(&params.symbols, &feeds, params.max_articles);
        tracing::debug!(
            symbols = params.symbols.len(),
            selected = articles.len(),
            "round-robin selection done"
        );
    }

    if articles.is_empty() {
        tracing::debug!(category = %params.category, "no company news; using general feed");
        let raw = svc.general_news(&params.category, &params.fetch).await?;
        articles = select_general(validate_all(raw), params.max_articles);
    }

    sort_newest_first(&mut articles, |a| a.datetime);
    Ok(articles)
}

/// Fetches every distinct symbol concurrently and waits for all of them.
///
/// A failed fetch leaves that symbol with an empty feed.
async fn fetch_feeds<S>(svc: &S, params: &NewsParams) -> HashMap<String, Vec<ValidArticle>>
where
    S: NewsService + ?Sized,
{
    let mut distinct: Vec<&str> = Vec::with_capacity(params.symbols.len());
    for s in &params.symbols {
        if !distinct.contains(&s.as_str()) {
            distinct.push(s);
        }
    }

    let window = params.window;
    let fetches = distinct.into_iter().map(|symbol| async move {
        let articles = match svc.company_news(symbol, window, &params.fetch).await {
            Ok(raw) => {
                let mut valid = validate_all(raw);
                sort_newest_first(&mut valid, |a| a.datetime);
                valid
            }
            Err(e) => {
                tracing::warn!(symbol, error = %e, "company news fetch failed");
                Vec::new()
            }
        };
        (symbol.to_string(), articles)
    });

    join_all(fetches).await.into_iter().collect()
}
