use serde::Deserialize;

use super::model::CompanyProfile;
use crate::core::{
    FhClient, FhError,
    client::{CacheMode, RetryConfig},
};

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ProfileNode {
    ticker: Option<String>,
    name: Option<String>,
    exchange: Option<String>,
    country: Option<String>,
    currency: Option<String>,
    ipo: Option<String>,
    market_capitalization: Option<f64>,
    share_outstanding: Option<f64>,
    logo: Option<String>,
    phone: Option<String>,
    weburl: Option<String>,
    finnhub_industry: Option<String>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

pub(super) fn parse_profile(body: &str) -> Result<Option<CompanyProfile>, FhError> {
    let node: ProfileNode = serde_json::from_str(body)?;
    let Some(ticker) = non_empty(node.ticker) else {
        return Ok(None);
    };
    Ok(Some(CompanyProfile {
        ticker,
        name: non_empty(node.name),
        exchange: non_empty(node.exchange),
        country: non_empty(node.country),
        currency: non_empty(node.currency),
        ipo: non_empty(node.ipo),
        market_capitalization: node.market_capitalization,
        share_outstanding: node.share_outstanding,
        logo: non_empty(node.logo),
        phone: non_empty(node.phone),
        weburl: non_empty(node.weburl),
        industry: non_empty(node.finnhub_industry),
    }))
}

pub(super) async fn fetch_profile(
    client: &FhClient,
    symbol: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Option<CompanyProfile>, FhError> {
    let mut url = client.endpoint("stock/profile2")?;
    url.query_pairs_mut().append_pair("symbol", symbol);

    let body = client
        .get_body(&url, "profile2", symbol, cache_mode, None, retry_override)
        .await?;
    parse_profile(&body)
}
