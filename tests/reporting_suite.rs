use barber_core::ledger::{Category, Ledger, ProductDraft, ServiceKind, TransactionDraft};
use barber_core::reports::{
    compute_totals, daily_income_series, filter_by_date, group_income_by_label, service_count,
    DateFilter,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A week of shop activity around Wednesday 2024-01-10.
fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.save_transaction(
        TransactionDraft::service(date(2024, 1, 10), ServiceKind::Cut, 25.0, "Ana"),
        None,
    );
    ledger.save_transaction(
        TransactionDraft::service(date(2024, 1, 10), ServiceKind::Beard, 20.0, "Bruno"),
        None,
    );
    ledger.save_transaction(
        TransactionDraft::service(date(2024, 1, 8), ServiceKind::Cut, 30.0, "Carlos"),
        None,
    );
    ledger.save_transaction(
        TransactionDraft::expense(date(2024, 1, 5), Category::Rent, 500.0, "Aluguel"),
        None,
    );
    ledger.save_product(ProductDraft::new("Pomada", date(2024, 1, 9), 20.0), None);
    ledger
}

#[test]
fn dashboard_stats_follow_the_active_window() {
    let ledger = sample_ledger();
    let reference = date(2024, 1, 10);

    let today = filter_by_date(ledger.transactions(), DateFilter::Today, reference);
    let totals = compute_totals(&today);
    assert_eq!(totals.income, 45.0);
    assert_eq!(totals.expense, 0.0);
    assert_eq!(totals.profit, 45.0);
    assert_eq!(totals.count, 2);
    assert_eq!(service_count(&today), 2);

    let month = filter_by_date(ledger.transactions(), DateFilter::Month, reference);
    let totals = compute_totals(&month);
    assert_eq!(totals.income, 75.0);
    assert_eq!(totals.expense, 520.0);
    assert_eq!(totals.profit, -445.0);
    assert_eq!(totals.count, 5);
}

#[test]
fn week_window_starts_on_monday() {
    let ledger = sample_ledger();
    // Wednesday the 10th: Monday the 8th is in, Friday the 5th is out.
    let week = filter_by_date(ledger.transactions(), DateFilter::Week, date(2024, 1, 10));
    assert_eq!(compute_totals(&week).expense, 20.0);
    assert_eq!(compute_totals(&week).income, 75.0);
}

#[test]
fn trend_ignores_the_report_filter_and_covers_the_whole_set() {
    let ledger = sample_ledger();
    let reference = date(2024, 1, 10);

    // Even while the dashboard is filtered to TODAY, the 7-day trend keeps
    // reading the unfiltered collection.
    let series = daily_income_series(ledger.transactions(), reference);
    assert_eq!(series.len(), 7);
    assert_eq!(series[4].label, "08/01");
    assert_eq!(series[4].total, 30.0);
    assert_eq!(series[6].label, "10/01");
    assert_eq!(series[6].total, 45.0);
    assert_eq!(series[0].total, 0.0);
}

#[test]
fn popular_services_group_income_only() {
    let ledger = sample_ledger();
    let grouped = group_income_by_label(ledger.transactions());

    let mut names: Vec<&str> = grouped.iter().map(|g| g.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Barba", "Corte"]);

    let corte = grouped.iter().find(|g| g.name == "Corte").unwrap();
    assert_eq!(corte.value, 55.0);
    assert!(grouped.iter().all(|g| g.name != "Aluguel"));
    assert!(grouped.iter().all(|g| g.name != "Produto: Pomada"));
}
