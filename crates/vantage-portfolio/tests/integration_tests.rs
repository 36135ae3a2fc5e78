//! End-to-end tests for the commentary engine over the ten-stock NSE
//! portfolio.

use std::sync::Arc;

use approx::assert_relative_eq;
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;
use vantage_portfolio::prelude::*;
use vantage_portfolio::{
    aggregate_sectors, CommentaryComposer, FixedClock, HoldingConfig, PortfolioError, SnapshotId,
};
use vantage_ext_file::{StaticBenchmarkSource, StaticNewsSource, StaticSignalSource};
use vantage_traits::{SessionBar, TraitError};

// =============================================================================
// FIXTURES
// =============================================================================

fn holding(
    ticker: &str,
    name: &str,
    quantity: u64,
    buy: Decimal,
    current: Decimal,
) -> HoldingConfig {
    HoldingConfig {
        ticker: Ticker::new(ticker),
        name: name.to_string(),
        quantity,
        purchase_price: buy,
        current_price: current,
    }
}

fn nse_config() -> PortfolioConfig {
    PortfolioConfig {
        name: "NSE Core".to_string(),
        currency_symbol: "₹".to_string(),
        benchmark: Some(BenchmarkConfig::new("^NSEI", "Nifty 50")),
        holdings: vec![
            holding("RELIANCE.NS", "Reliance Industries", 100, dec!(1200), dec!(1264.65)),
            holding("TCS.NS", "Tata Consultancy Services", 50, dec!(3200), dec!(3419.80)),
            holding("INFY.NS", "Infosys", 75, dec!(1500), dec!(1640.70)),
            holding("HDFCBANK.NS", "HDFC Bank", 75, dec!(1900), dec!(2006.45)),
            holding("ICICIBANK.NS", "ICICI Bank", 100, dec!(1300), dec!(1425.10)),
            holding("KOTAKBANK.NS", "Kotak Mahindra Bank", 30, dec!(2000), dec!(2129.80)),
            holding("ITC.NS", "ITC Ltd", 150, dec!(400), dec!(418)),
            holding("BHARTIARTL.NS", "Bharti Airtel", 60, dec!(1500), dec!(1630.55)),
            holding("ASIANPAINTS.NS", "Asian Paints", 40, dec!(2200), dec!(2424.20)),
            holding("LT.NS", "Larsen & Toubro", 50, dec!(3500), dec!(3300)),
        ],
        sectors: vec![
            SectorDefinition::new("Technology", ["TCS.NS", "INFY.NS"]),
            SectorDefinition::new("Banking", ["HDFCBANK.NS", "ICICIBANK.NS", "KOTAKBANK.NS"]),
            SectorDefinition::new("Conglomerate", ["RELIANCE.NS"]),
            SectorDefinition::new("Consumer", ["ITC.NS", "ASIANPAINTS.NS"]),
            SectorDefinition::new("Telecom", ["BHARTIARTL.NS"]),
            SectorDefinition::new("Industrial", ["LT.NS"]),
        ],
    }
}

struct Broken;

impl MarketSignalSource for Broken {
    fn fetch_signal(&self, ticker: &Ticker) -> Result<Option<MarketSignal>, TraitError> {
        Err(TraitError::ConnectionFailed(ticker.to_string()))
    }
}

impl NewsSource for Broken {
    fn fetch_news(&self, _ticker: &Ticker) -> Result<Vec<NewsItem>, TraitError> {
        Err(TraitError::Timeout)
    }
}

impl BenchmarkSource for Broken {
    fn fetch_latest_session(
        &self,
        _index_symbol: &Ticker,
    ) -> Result<Option<SessionBar>, TraitError> {
        Err(TraitError::ParseError("bad row".into()))
    }
}

fn signals(pairs: &[(&str, f64)]) -> Arc<StaticSignalSource> {
    let source = StaticSignalSource::new();
    for (ticker, momentum) in pairs {
        source.insert(*ticker, MarketSignal::from_momentum(*momentum));
    }
    Arc::new(source)
}

fn session(open: f64, close: f64) -> Arc<StaticBenchmarkSource> {
    let source = StaticBenchmarkSource::new();
    source.set("^NSEI", SessionBar::new(open, close));
    Arc::new(source)
}

fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(15, 30, 0)
            .unwrap(),
    ))
}

fn nse_engine() -> CommentaryEngineBuilder {
    CommentaryEngineBuilder::from_config(&nse_config())
        .unwrap()
        .with_clock(clock())
}

// =============================================================================
// FULL REPORT
// =============================================================================

#[test]
fn test_full_report_with_all_collaborators() {
    let news = StaticNewsSource::from_items(vec![
        NewsItem::new(
            "TCS bags multi-year cloud contract",
            "",
            Utc.with_ymd_and_hms(2025, 3, 12, 9, 0, 0).unwrap(),
        ),
        NewsItem::new(
            "IT stocks rally",
            "INFY and peers gain on strong guidance",
            Utc.with_ymd_and_hms(2025, 3, 13, 9, 0, 0).unwrap(),
        ),
    ]);

    let engine = nse_engine()
        .with_signals(signals(&[("TCS.NS", 74.3), ("LT.NS", 28.0), ("ITC.NS", 55.0)]))
        .with_news(Arc::new(news))
        .with_benchmark(session(22_000.0, 22_110.0))
        .build();

    let text = engine.analyze().text;

    assert!(text.starts_with(
        "## Portfolio Performance Summary\n\n**Market Overview**: Nifty 50 is up 0.50% today.\n\n### Key Holdings Performance\n"
    ));
    assert!(text.contains(
        "- **Tata Consultancy Services (TCS.NS)**: ↑ 6.87% since purchase (₹10,990.00 profit), RSI: 74.3 (Overbought)\n  - *News*: TCS bags multi-year cloud contract... (Published: 2025-03-12)\n"
    ));
    assert!(text.contains("  - *News*: IT stocks rally... (Published: 2025-03-13)\n"));
    assert!(text.contains(
        "- **Larsen & Toubro (LT.NS)**: ↓ 5.71% since purchase (₹-10,000.00 loss), RSI: 28.0 (Oversold)\n"
    ));
    assert!(text.contains("- **ITC Ltd (ITC.NS)**: ↑ 4.50% since purchase (₹2,700.00 profit), RSI: 55.0\n"));

    assert!(text.contains(
        "\n### Sector Exposure\n- **Technology**: 24.5%\n- **Banking**: 29.7%\n- **Conglomerate**: 10.5%\n- **Consumer**: 13.3%\n- **Telecom**: 8.2%\n- **Industrial**: 13.8%\n"
    ));
    assert!(text.contains("\n### Risk Assessment\n- **Total Portfolio**: ₹61,896.25 profit\n"));
    assert!(!text.contains("Concentration Risk"));
    assert!(text.ends_with(
        "- ⚠️ **Valuation Risk**: Tata Consultancy Services appear overbought (RSI > 70)\n"
    ));
}

#[test]
fn test_concentration_warning() {
    let mut config = nse_config();
    // Push banking above 40%
    config.holdings[3].quantity = 400;

    let engine = CommentaryEngineBuilder::from_config(&config).unwrap().build();
    let report = engine.evaluate();
    let largest = report.exposure.largest().unwrap();
    assert_eq!(largest.sector.as_str(), "Banking");
    assert!(largest.exposure > 0.40);

    let text = engine.analyze().text;
    let line = format!(
        "- ⚠️ **Concentration Risk**: Overexposed to Banking sector ({:.1}%)\n",
        largest.exposure * 100.0
    );
    assert!(text.contains(&line));
}

#[test]
fn test_fully_degraded_report() {
    let broken = Arc::new(Broken);
    let engine = nse_engine()
        .with_signals(broken.clone())
        .with_news(broken.clone())
        .with_benchmark(broken)
        .build();

    let snapshot = engine.analyze();
    let text = &snapshot.text;

    assert!(!text.contains("Market Overview"));
    assert!(!text.contains("RSI"));
    assert!(!text.contains("*News*"));
    assert!(!text.contains("Valuation Risk"));
    assert_eq!(text.matches(" since purchase ").count(), 10);
    assert!(text.contains("- **Total Portfolio**: ₹61,896.25 profit\n"));
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn test_no_collaborators_matches_failing_collaborators() {
    let broken = Arc::new(Broken);
    let failing = nse_engine()
        .with_signals(broken.clone())
        .with_news(broken.clone())
        .with_benchmark(broken)
        .build();
    let absent = nse_engine().build();

    assert_eq!(failing.analyze().text, absent.analyze().text);
}

// =============================================================================
// HISTORY AND IMPROVEMENT
// =============================================================================

#[test]
fn test_session_of_mixed_calls() {
    let engine = nse_engine()
        .with_signals(signals(&[("TCS.NS", 60.0)]))
        .build();

    let steps = [true, false, true, true, false, true];
    for (i, improve) in steps.iter().enumerate() {
        let snap = if *improve { engine.improve() } else { engine.analyze() };
        assert_eq!(snap.id, SnapshotId(i as u64 + 1));
        assert_eq!(engine.history_len(), i + 1);
    }

    let kinds: Vec<_> = engine.history().iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            // First improve runs against an empty history
            SnapshotKind::Analysis,
            SnapshotKind::Analysis,
            SnapshotKind::Improved,
            SnapshotKind::Improved,
            SnapshotKind::Analysis,
            SnapshotKind::Improved,
        ]
    );

    let history = engine.history();
    assert_eq!(
        history[2].improvements,
        vec!["Added MACD analysis", "Added dividend yield analysis"]
    );
    assert!(history[3].improvements.is_empty());
    assert!(history[5].improvements.is_empty());
}

#[test]
fn test_source_updates_reach_next_pass_only() {
    let signals = Arc::new(StaticSignalSource::new());
    let news = Arc::new(StaticNewsSource::new());
    let engine = nse_engine()
        .with_signals(signals.clone())
        .with_news(news.clone())
        .build();

    let before = engine.analyze();
    assert!(!before.text.contains("RSI:"));

    signals.insert("ITC.NS", MarketSignal::from_momentum(82.0));
    news.push(NewsItem::new(
        "ITC hotels demerger completes",
        "",
        Utc.with_ymd_and_hms(2025, 3, 14, 4, 0, 0).unwrap(),
    ));
    let after = engine.analyze();

    assert!(after.text.contains("RSI: 82.0 (Overbought)"));
    assert!(after.text.contains("ITC hotels demerger completes..."));
    assert!(after
        .text
        .contains("- ⚠️ **Valuation Risk**: ITC Ltd appear overbought (RSI > 70)\n"));
    // The earlier snapshot is not rewritten
    assert_eq!(engine.history()[0], before);
}

#[test]
fn test_improvement_section_follows_report() {
    let engine = nse_engine()
        .with_signals(signals(&[("INFY.NS", 45.0)]))
        .build();
    let plain = engine.analyze();
    let improved = engine.improve();

    assert!(improved.text.starts_with(&plain.text));
    assert_eq!(
        &improved.text[plain.text.len()..],
        "\n### Commentary Improvements\nThis analysis incorporates:\n- Added MACD analysis\n- Added dividend yield analysis\n"
    );
}

#[test]
fn test_same_second_snapshots_are_kept() {
    let engine = nse_engine().build();
    let a = engine.analyze();
    let b = engine.analyze();

    assert_eq!(a.timestamp_label(), "2025-03-14 15:30:00");
    assert_eq!(a.timestamp_label(), b.timestamp_label());
    assert_eq!(engine.history().len(), 2);
    assert_eq!(engine.current().unwrap().id, SnapshotId(2));
}

// =============================================================================
// HEATMAP
// =============================================================================

#[test]
fn test_risk_heatmap_scores() {
    let engine = nse_engine()
        .with_signals(signals(&[("LT.NS", 60.0), ("TCS.NS", 70.0), ("INFY.NS", 35.0)]))
        .build();
    let heatmap = engine.risk_heatmap();

    let names: Vec<_> = heatmap.entries().iter().map(|e| e.sector.as_str()).collect();
    assert_eq!(
        names,
        vec!["Technology", "Banking", "Conglomerate", "Consumer", "Telecom", "Industrial"]
    );

    // (1.0 + 0.5) / 2
    assert_relative_eq!(heatmap.score("Technology").unwrap(), 0.75, epsilon = 1e-9);
    // Missing signals use the neutral reading
    assert_relative_eq!(heatmap.score("Banking").unwrap(), 50.0 / 70.0, epsilon = 1e-9);
    // 5.714..% loss × 60 / 50
    assert_relative_eq!(
        heatmap.score("Industrial").unwrap(),
        (200.0 / 3500.0 * 100.0) * 1.2,
        epsilon = 1e-9
    );
    assert_eq!(engine.history_len(), 0);
}

#[test]
fn test_unheld_sector_scores_zero() {
    let mut config = nse_config();
    config.sectors.push(SectorDefinition::new("Pharma", ["SUNPHARMA.NS"]));
    let portfolio = config.build_portfolio().unwrap();

    let engine = CommentaryEngine::builder(portfolio).build();
    let heatmap = engine.risk_heatmap();
    assert_eq!(heatmap.len(), 7);
    assert_eq!(heatmap.score("Pharma"), Some(0.0));

    let text = engine.analyze().text;
    assert!(!text.contains("Pharma"));
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_unmapped_ticker_rejected() {
    let mut config = nse_config();
    config.sectors.pop();
    let err = config.build_portfolio().unwrap_err();
    assert!(matches!(err, PortfolioError::UnmappedTicker { ref ticker } if ticker == "LT.NS"));
}

#[test]
fn test_ticker_in_two_sectors_rejected() {
    let mut config = nse_config();
    config.sectors[5] = SectorDefinition::new("Industrial", ["LT.NS", "RELIANCE.NS"]);
    assert!(matches!(
        config.build_portfolio(),
        Err(PortfolioError::AmbiguousSector { .. })
    ));
}

#[test]
fn test_config_json_round_trip() {
    let config = nse_config();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: PortfolioConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_empty_portfolio_report() {
    let portfolio = PortfolioBuilder::new()
        .add_sector(SectorDefinition::new("Technology", ["TCS.NS"]))
        .build()
        .unwrap();
    let exposure = aggregate_sectors(&portfolio);
    assert_eq!(exposure.total_exposure(), 0.0);

    let composer = CommentaryComposer::new();
    let report = composer.evaluate(&portfolio, &Collaborators::new());
    let text = composer.render(&report);
    assert!(text.contains("- **Total Portfolio**: ₹0.00 profit\n"));
    assert!(!text.contains("Concentration Risk"));
}
