use serde::Serialize;

/// Company profile from `/stock/profile2`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyProfile {
    /// Upper-cased ticker as listed.
    pub ticker: String,
    /// Company name.
    pub name: Option<String>,
    /// Listing exchange, e.g. "NASDAQ NMS - GLOBAL MARKET".
    pub exchange: Option<String>,
    /// Country of domicile, ISO code.
    pub country: Option<String>,
    /// Reporting currency.
    pub currency: Option<String>,
    /// IPO date as reported, `YYYY-MM-DD`.
    pub ipo: Option<String>,
    /// In millions of `currency`.
    pub market_capitalization: Option<f64>,
    /// In millions of shares.
    pub share_outstanding: Option<f64>,
    /// Logo image URL.
    pub logo: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Company website.
    pub weburl: Option<String>,
    /// Finnhub industry classification.
    pub industry: Option<String>,
}
