use chrono::{TimeZone, Utc};
use dealflow_core::{
    AngelRecord, CompanyBase, IpoRecord, NewsEntry, Snapshot, format_date, stage_progress,
};

fn news(date: &str, title: &str) -> NewsEntry {
    NewsEntry {
        date: date.into(),
        title: title.into(),
        url: format!("https://example.com/{title}"),
    }
}

fn snapshot_fixture() -> Snapshot {
    let mut techflow = CompanyBase::new(1, "TechFlow Solutions", "Tech")
        .with_news(vec![news("2025-05-28", "roadshow"), news("2025-05-15", "q1")]);
    techflow.stage = "Roadshow".into();
    let healthai = CompanyBase::new(2, "HealthAI Diagnostics", "Health Tech")
        .with_news(vec![news("2025-05-25", "fda")]);
    let regen = CompanyBase::new(102, "RegenTherapy Bio", "BioTech")
        .with_news(vec![news("2025-05-18", "phase2")]);
    let quiet = CompanyBase::new(103, "Quiet Co", "Tech");

    Snapshot::new(
        vec![IpoRecord::from_base(techflow), IpoRecord::from_base(healthai)],
        vec![AngelRecord::from_base(regen), AngelRecord::from_base(quiet)],
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
    )
}

#[test]
fn snapshot_answers_dashboard_queries() {
    let snap = snapshot_fixture();

    assert_eq!(snap.vocabulary(), ["All", "Tech", "Health Tech", "BioTech"]);
    assert_eq!(snap.ipos_in("All").len(), 2);
    assert_eq!(snap.ipos_in("Tech").len(), 1);
    assert_eq!(snap.angels_in("Tech")[0].base.name, "Quiet Co");
    assert!(snap.angels_in("Fintech").is_empty());

    let titles: Vec<String> = snap.news().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, ["roadshow", "fda", "phase2", "q1"]);
    assert_eq!(snap.news_in("all").len(), 4);
    assert_eq!(snap.news_in("BioTech").len(), 1);
    assert_eq!(snap.news_vocabulary(), ["All", "Tech", "Health Tech", "BioTech"]);
}

#[test]
fn snapshot_selection_and_lookup() {
    let snap = snapshot_fixture();
    let first = snap.default_selection().expect("first ipo");
    assert_eq!(first.base.name, "TechFlow Solutions");
    assert!((stage_progress(&first.base.stage) - 400.0 / 6.0).abs() < 1e-9);
    assert_eq!(snap.angel(102).map(|a| a.base.sector.as_str()), Some("BioTech"));
    assert!(snap.ipo(102).is_none());
    assert_eq!(format_date(Some(&snap.fetched_at().format("%Y-%m-%d").to_string())), "Jun 1, 2025");
}

#[test]
fn empty_snapshot_degrades_to_sentinels() {
    let snap = Snapshot::new(vec![], vec![], Utc::now());
    assert!(snap.is_empty());
    assert_eq!(snap.vocabulary(), ["All"]);
    assert!(snap.news().is_empty());
    assert!(snap.ipos_in("Tech").is_empty());
    assert!(snap.news_in("Tech").is_empty());
    assert!(snap.default_selection().is_none());
}

#[test]
fn snapshot_serializes_for_front_ends() {
    let snap = snapshot_fixture();
    let json = serde_json::to_value(&snap).expect("serialize snapshot");
    assert_eq!(json["ipos"][0]["name"], "TechFlow Solutions");
    assert_eq!(json["angels"][0]["sector"], "BioTech");
    let back: Snapshot = serde_json::from_value(json).expect("deserialize snapshot");
    assert_eq!(back, snap);
}
