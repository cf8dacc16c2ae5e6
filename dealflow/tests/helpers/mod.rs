#![allow(dead_code)]
#![allow(clippy::missing_const_for_fn)]

use std::sync::Arc;

use async_trait::async_trait;
use dealflow::{
    AngelRecord, AngelSource, CompanyBase, Dealflow, DealflowError, IpoRecord, IpoSource,
    NewsEntry, RecordSource,
};
use dealflow_mock::{DynamicMockController, DynamicMockSource, MockBehavior};

pub fn news(date: &str, title: &str) -> NewsEntry {
    NewsEntry {
        date: date.to_string(),
        title: title.to_string(),
        url: String::new(),
    }
}

pub fn ipo(id: i64, name: &str, sector: &str) -> IpoRecord {
    IpoRecord::from_base(CompanyBase::new(id, name, sector))
}

pub fn ipo_with_news(id: i64, name: &str, sector: &str, items: Vec<NewsEntry>) -> IpoRecord {
    IpoRecord::from_base(CompanyBase::new(id, name, sector).with_news(items))
}

pub fn angel(id: i64, name: &str, sector: &str) -> AngelRecord {
    AngelRecord::from_base(CompanyBase::new(id, name, sector))
}

pub fn angel_with_news(id: i64, name: &str, sector: &str, items: Vec<NewsEntry>) -> AngelRecord {
    AngelRecord::from_base(CompanyBase::new(id, name, sector).with_news(items))
}

/// Dynamic mock scripted to return the given lists for both kinds.
pub async fn scripted(
    name: &'static str,
    ipos: Vec<IpoRecord>,
    angels: Vec<AngelRecord>,
) -> (Arc<dyn RecordSource>, DynamicMockController) {
    let (src, ctrl) = DynamicMockSource::new_with_controller(name);
    ctrl.set_ipo_behavior(MockBehavior::Return(ipos)).await;
    ctrl.set_angel_behavior(MockBehavior::Return(angels)).await;
    (src, ctrl)
}

pub fn dealflow_with(sources: &[Arc<dyn RecordSource>]) -> Dealflow {
    sources
        .iter()
        .fold(Dealflow::builder(), |b, s| b.with_source(Arc::clone(s)))
        .build()
        .expect("valid dealflow")
}

/// Source that only serves IPO records.
pub struct IpoOnlySource {
    pub name: &'static str,
    pub ipos: Vec<IpoRecord>,
}

impl RecordSource for IpoOnlySource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_ipo_source(&self) -> Option<&dyn IpoSource> {
        Some(self as &dyn IpoSource)
    }
}

#[async_trait]
impl IpoSource for IpoOnlySource {
    async fn ipo_records(&self) -> Result<Vec<IpoRecord>, DealflowError> {
        Ok(self.ipos.clone())
    }
}

/// Source that only serves angel records.
pub struct AngelOnlySource {
    pub name: &'static str,
    pub angels: Vec<AngelRecord>,
}

impl RecordSource for AngelOnlySource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_angel_source(&self) -> Option<&dyn AngelSource> {
        Some(self as &dyn AngelSource)
    }
}

#[async_trait]
impl AngelSource for AngelOnlySource {
    async fn angel_records(&self) -> Result<Vec<AngelRecord>, DealflowError> {
        Ok(self.angels.clone())
    }
}
