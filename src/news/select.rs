//! Selection of the final article set from validated feeds.

use std::collections::{HashMap, HashSet};

use super::model::NewsArticle;
use super::validate::{ValidArticle, sort_newest_first};

/// Interleaves per-symbol feeds, one article per visit.
///
/// `rotation` is the visiting order and may repeat a symbol; repeats share
/// one cursor. Each feed must already be sorted newest first. The loop stops
/// after `max` articles or `max * rotation.len()` visits. Every full round
/// emits at least one article unless all feeds are exhausted, so the visit
/// bound never cuts the result short of what is available.
pub(crate) fn round_robin(
    rotation: &[String],
    feeds: &HashMap<String, Vec<ValidArticle>>,
    max: usize,
) -> Vec<NewsArticle> {
    let bound = max.saturating_mul(rotation.len());
    let mut out = Vec::with_capacity(max);
    let mut seen: HashSet<&str> = HashSet::new();
    let mut cursors: HashMap<&str, usize> = HashMap::new();

    let mut step = 0;
    while out.len() < max && step < bound {
        let symbol = rotation[step % rotation.len()].as_str();
        step += 1;

        let Some(articles) = feeds.get(symbol) else {
            continue;
        };
        let cursor = cursors.entry(symbol).or_insert(0);
        let Some(offset) = articles[*cursor..]
            .iter()
            .position(|a| !seen.contains(a.url.as_str()))
        else {
            *cursor = articles.len();
            continue;
        };

        let article = &articles[*cursor + offset];
        *cursor += offset + 1;
        seen.insert(article.url.as_str());
        out.push(NewsArticle::from_company(article, symbol, out.len()));
    }
    out
}

/// Dedupes by URL (first seen wins), then keeps the newest `max`.
pub(crate) fn select_general(articles: Vec<ValidArticle>, max: usize) -> Vec<NewsArticle> {
    let mut seen = HashSet::new();
    let mut unique: Vec<ValidArticle> = articles
        .into_iter()
        .filter(|a| seen.insert(a.url.clone()))
        .collect();
    sort_newest_first(&mut unique, |a| a.datetime);
    unique
        .into_iter()
        .take(max)
        .enumerate()
        .map(|(i, a)| NewsArticle::from_general(a, i))
        .collect()
}
