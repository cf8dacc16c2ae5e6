//! Pure queries over a pair of record lists.
//!
//! Every function here borrows its inputs and returns freshly built vectors;
//! none of them can fail. Empty inputs yield `["All"]` vocabularies and empty
//! feeds.

use std::collections::HashSet;

use dealflow_types::{Company, NewsItem};

/// Sentinel that disables sector filtering of company lists.
pub const ALL_SECTORS: &str = "All";

/// Sentinel that disables sector filtering of the news feed.
///
/// Distinct from [`ALL_SECTORS`]: the news tab uses the lowercase form.
pub const ALL_NEWS: &str = "all";

/// Sector vocabulary across both lists: `"All"` followed by every distinct
/// sector in discovery order (IPO list first).
pub fn vocabulary<I, A>(ipos: &[I], angels: &[A]) -> Vec<String>
where
    I: Company,
    A: Company,
{
    with_sentinel(
        ipos.iter()
            .map(|r| r.sector())
            .chain(angels.iter().map(|r| r.sector())),
    )
}

/// Records whose sector equals `sector` exactly, in original order.
///
/// `"All"` returns the whole list unchanged.
pub fn filter_by_sector<T>(list: &[T], sector: &str) -> Vec<T>
where
    T: Company + Clone,
{
    if sector == ALL_SECTORS {
        return list.to_vec();
    }
    list.iter().filter(|r| r.sector() == sector).cloned().collect()
}

/// Every embedded news entry of both lists, tagged with its company and
/// sorted most recent first.
///
/// Dates are compared as ISO `YYYY-MM-DD` strings. The sort is stable, so
/// equal dates keep first-appearance order: IPO records before angel records,
/// then record order, then the order inside each record's news array.
pub fn flatten_news<I, A>(ipos: &[I], angels: &[A]) -> Vec<NewsItem>
where
    I: Company,
    A: Company,
{
    let mut items: Vec<NewsItem> = ipos
        .iter()
        .flat_map(|r| tag_news(r))
        .chain(angels.iter().flat_map(|r| tag_news(r)))
        .collect();
    items.sort_by(|a, b| b.date.cmp(&a.date));
    items
}

/// News items whose sector equals `sector` exactly, in feed order.
///
/// `"all"` returns the feed unchanged.
#[must_use]
pub fn filter_news_by_sector(news: &[NewsItem], sector: &str) -> Vec<NewsItem> {
    if sector == ALL_NEWS {
        return news.to_vec();
    }
    news.iter().filter(|n| n.sector == sector).cloned().collect()
}

/// Selector options for the news tab: `"All"` followed by the distinct
/// sectors present in the feed, in feed order.
#[must_use]
pub fn news_vocabulary(news: &[NewsItem]) -> Vec<String> {
    with_sentinel(news.iter().map(|n| n.sector.as_str()))
}

fn tag_news<C: Company>(record: &C) -> impl Iterator<Item = NewsItem> + '_ {
    record.news().iter().map(move |entry| NewsItem {
        date: entry.date.clone(),
        title: entry.title.clone(),
        company: record.name().to_string(),
        sector: record.sector().to_string(),
        url: entry.url.clone(),
    })
}

fn with_sentinel<'a>(sectors: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = vec![ALL_SECTORS.to_string()];
    for s in sectors {
        if seen.insert(s) {
            out.push(s.to_string());
        }
    }
    out
}
