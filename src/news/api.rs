use crate::{
    core::{
        FetchOptions, FhClient, FhError, NewsFuture, NewsService,
        client::constants::NEWS_CACHE_TTL, net,
    },
    news::{NewsWindow, wire::RawArticle},
};

pub(super) async fn fetch_company_news(
    client: &FhClient,
    symbol: &str,
    window: NewsWindow,
    opts: &FetchOptions,
) -> Result<Vec<RawArticle>, FhError> {
    let mut url = client.endpoint("company-news")?;
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("from", &window.from_param())
        .append_pair("to", &window.to_param());

    let body = client
        .get_body(
            &url,
            "company_news",
            symbol,
            opts.cache_mode,
            Some(NEWS_CACHE_TTL),
            opts.retry_override.as_ref(),
        )
        .await?;
    net::decode_list(&body)
}

pub(super) async fn fetch_general_news(
    client: &FhClient,
    category: &str,
    opts: &FetchOptions,
) -> Result<Vec<RawArticle>, FhError> {
    let mut url = client.endpoint("news")?;
    url.query_pairs_mut().append_pair("category", category);

    let body = client
        .get_body(
            &url,
            "news",
            category,
            opts.cache_mode,
            Some(NEWS_CACHE_TTL),
            opts.retry_override.as_ref(),
        )
        .await?;
    net::decode_list(&body)
}

impl NewsService for FhClient {
    fn company_news<'a>(
        &'a self,
        symbol: &'a str,
        window: NewsWindow,
        opts: &'a FetchOptions,
    ) -> NewsFuture<'a> {
        Box::pin(fetch_company_news(self, symbol, window, opts))
    }

    fn general_news<'a>(&'a self, category: &'a str, opts: &'a FetchOptions) -> NewsFuture<'a> {
        Box::pin(fetch_general_news(self, category, opts))
    }
}
