mod common;

use std::sync::Arc;
use std::time::Duration;

use common::get_source;
use dealflow::{ALL_NEWS, Company, Dashboard, DashboardState, Dealflow, format_date, stage_progress};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,dealflow=debug,dealflow_http=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();

    // 1. Build the orchestrator around one source.
    let dealflow = Dealflow::builder()
        .with_source(get_source()?)
        .source_timeout(Duration::from_secs(10))
        .build()?;

    // 2. Run the first fetch cycle.
    let dashboard = Dashboard::new(Arc::new(dealflow));
    let snapshot = match dashboard.load().await {
        DashboardState::Ready(snapshot) => snapshot,
        DashboardState::Failed { message, error } => {
            eprintln!("{message} ({error})");
            return Ok(());
        }
        DashboardState::Loading => return Ok(()),
    };

    // 3. IPO pipeline grouped by sector.
    for sector in snapshot.vocabulary() {
        let ipos = snapshot.ipos_in(&sector);
        let angels = snapshot.angels_in(&sector);
        println!("{sector}: {} IPOs, {} angel deals", ipos.len(), angels.len());
    }

    println!();
    for ipo in snapshot.ipos() {
        println!(
            "{:<24} {:<10} {:>5.1}%  risk {} ({})  debut {}",
            ipo.name(),
            ipo.base.stage,
            stage_progress(&ipo.base.stage),
            ipo.base.risk,
            ipo.base.risk.color(),
            format_date(ipo.expected_debut_date.as_deref()),
        );
    }

    // 4. Latest news across both lists.
    println!();
    for item in snapshot.news_in(ALL_NEWS).iter().take(5) {
        println!(
            "{}  {}  [{}]",
            format_date(Some(&item.date)),
            item.title,
            item.company
        );
    }

    if let Some(at) = dashboard.last_updated().await {
        println!("\nLast updated: {at}");
    }

    Ok(())
}
