//! Company records served by record sources.
//!
//! Both record shapes share a [`CompanyBase`] flattened into the wire object;
//! the variant-specific fields are carried for the presentation layer and are
//! never interpreted by aggregation.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::risk::Risk;

/// The two record lists a source can supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Upcoming IPOs.
    Ipo,
    /// Angel-investment opportunities.
    Angel,
}

impl RecordKind {
    /// Stable lowercase label used in error messages and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ipo => "ipo",
            Self::Angel => "angel",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single news entry embedded in a company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsEntry {
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// Headline.
    pub title: String,
    /// Link to the article.
    #[serde(default)]
    pub url: String,
}

/// One point of the yearly revenue series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Year label, e.g. "2024".
    pub year: String,
    /// Revenue in millions.
    pub value: f64,
}

/// Free-text unit economics shown on the detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    /// Customer acquisition cost.
    #[serde(default)]
    pub cac: Option<String>,
    /// Customer lifetime value.
    #[serde(default)]
    pub ltv: Option<String>,
    /// Gross margins.
    #[serde(default)]
    pub margins: Option<String>,
    /// Monthly burn.
    #[serde(default)]
    pub burn_rate: Option<String>,
}

/// Fields shared by every company record regardless of its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyBase {
    /// Identity key within its own list.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Open-vocabulary industry classification.
    pub sector: String,
    /// Free-text lifecycle label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub stage: String,
    /// Risk label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub risk: Risk,
    /// Year-over-year growth in percent.
    #[serde(default)]
    pub growth: Option<f64>,
    /// Company website.
    #[serde(default)]
    pub website: Option<String>,
    /// Yearly revenue series.
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue_growth: Vec<RevenuePoint>,
    /// Unit economics.
    #[serde(default)]
    pub key_metrics: Option<KeyMetrics>,
    /// Embedded news, in source order. Absent or `null` decodes as empty;
    /// entries missing a date or title are dropped individually.
    #[serde(default, deserialize_with = "lenient_news")]
    pub news: Vec<NewsEntry>,
}

impl CompanyBase {
    /// Minimal base with the required fields set and everything else defaulted.
    pub fn new(id: i64, name: impl Into<String>, sector: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sector: sector.into(),
            stage: String::new(),
            risk: Risk::default(),
            growth: None,
            website: None,
            revenue_growth: Vec::new(),
            key_metrics: None,
            news: Vec::new(),
        }
    }

    /// Replace the embedded news.
    #[must_use]
    pub fn with_news(mut self, news: Vec<NewsEntry>) -> Self {
        self.news = news;
        self
    }
}

/// Read-only view over the common base, implemented by both record shapes.
pub trait Company {
    /// Shared fields of the record.
    fn base(&self) -> &CompanyBase;

    /// Which list this record belongs to.
    fn kind(&self) -> RecordKind;

    /// Identity key within its own list.
    fn id(&self) -> i64 {
        self.base().id
    }

    /// Display name.
    fn name(&self) -> &str {
        &self.base().name
    }

    /// Sector label.
    fn sector(&self) -> &str {
        &self.base().sector
    }

    /// Embedded news entries.
    fn news(&self) -> &[NewsEntry] {
        &self.base().news
    }
}

/// An upcoming IPO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpoRecord {
    /// Shared fields.
    #[serde(flatten)]
    pub base: CompanyBase,
    /// Target valuation in billions.
    #[serde(default)]
    pub target_valuation: Option<f64>,
    /// S-1 filing date.
    #[serde(default)]
    pub filing_date: Option<String>,
    /// Expected first trading day.
    #[serde(default)]
    pub expected_debut_date: Option<String>,
    /// Roadshow progress label.
    #[serde(default)]
    pub roadshow_status: Option<String>,
    /// Private funding raised so far, in millions.
    #[serde(default)]
    pub funding_raised: Option<f64>,
    /// Last private valuation in billions.
    #[serde(default)]
    pub last_valuation: Option<f64>,
    /// Planned ticker.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Listing venue.
    #[serde(default)]
    pub exchange: Option<String>,
}

impl IpoRecord {
    /// Record with only the shared base populated.
    #[must_use]
    pub const fn from_base(base: CompanyBase) -> Self {
        Self {
            base,
            target_valuation: None,
            filing_date: None,
            expected_debut_date: None,
            roadshow_status: None,
            funding_raised: None,
            last_valuation: None,
            symbol: None,
            exchange: None,
        }
    }
}

impl Company for IpoRecord {
    fn base(&self) -> &CompanyBase {
        &self.base
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Ipo
    }
}

/// An angel-investment opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngelRecord {
    /// Shared fields.
    #[serde(flatten)]
    pub base: CompanyBase,
    /// Size of the round being raised, in millions.
    #[serde(default)]
    pub target_raise: Option<f64>,
    /// Post-money valuation in millions.
    #[serde(default)]
    pub valuation: Option<f64>,
    /// Traction summary.
    #[serde(default)]
    pub traction: Option<String>,
    /// Team summary.
    #[serde(default)]
    pub team: Option<String>,
    /// Existing investors.
    #[serde(default)]
    pub investors: Option<String>,
}

impl AngelRecord {
    /// Record with only the shared base populated.
    #[must_use]
    pub const fn from_base(base: CompanyBase) -> Self {
        Self {
            base,
            target_raise: None,
            valuation: None,
            traction: None,
            team: None,
            investors: None,
        }
    }
}

impl Company for AngelRecord {
    fn base(&self) -> &CompanyBase {
        &self.base
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Angel
    }
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

fn lenient_news<'de, D>(d: D) -> Result<Vec<NewsEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(serde_json::Value::Array(items)) = Option::<serde_json::Value>::deserialize(d)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
