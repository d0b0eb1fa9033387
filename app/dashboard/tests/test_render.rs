//! FILENAME: tests/test_render.rs
//! Presentation adapters over real dashboard tables.

mod common;

use common::TestHarness;
use dashboard_lib::commands::set_genres;
use dashboard_lib::{chart_slots, run_with, JsonAdapter, PresentationAdapter, TextAdapter};
use sales_engine::ChartKind;

fn render_text(tables: &sales_engine::DashboardTables) -> String {
    let mut adapter = TextAdapter::new(Vec::new());
    adapter.render(tables).unwrap();
    String::from_utf8(adapter.into_inner()).unwrap()
}

#[test]
fn test_slots_follow_page_order() {
    let harness = TestHarness::with_sample_data();
    let state = harness.state();
    let slots = chart_slots(state.tables());

    let titles: Vec<&str> = slots.iter().map(|s| s.title).collect();
    assert_eq!(
        titles,
        vec![
            "Global Sales by Genre",
            "Global Sales by Platform",
            "Regional Sales Distribution",
            "Global Sales Over Time",
        ]
    );
    assert_eq!(slots[3].kind, ChartKind::Line);
    assert_eq!(slots[2].value_column, "Sales");
    assert_eq!(slots[2].points[0].label, "North America");
}

#[test]
fn test_text_output_for_default_selection() {
    let harness = TestHarness::with_sample_data();
    let state = harness.state();
    let text = render_text(state.tables());

    assert!(text.starts_with("== Global Sales by Genre (bar) ==\n"), "{}", text);
    assert!(text.contains("Sports    115.74\n"), "{}", text);
    assert!(text.contains("== Global Sales Over Time (line) ==\n"));
    assert!(text.contains("Region         Sales\n"), "{}", text);
    assert!(text.ends_with("6 records match the current filters (sales in millions of units).\n"));

    // Largest genre first.
    let sports = text.find("Sports ").unwrap();
    let racing = text.find("Racing ").unwrap();
    assert!(sports < racing);
}

#[test]
fn test_text_output_for_empty_selection() {
    let harness = TestHarness::with_sample_data();
    let mut state = harness.state();
    set_genres(&mut state, Vec::new()).unwrap();

    let text = render_text(state.tables());

    assert_eq!(text.matches("(no data)").count(), 4);
    assert!(text.ends_with("0 records match the current filters (sales in millions of units).\n"));
}

#[test]
fn test_json_frame() {
    let harness = TestHarness::with_sample_data();
    let state = harness.state();

    let mut adapter = JsonAdapter::new(Vec::new());
    adapter.render(state.tables()).unwrap();
    let bytes = adapter.into_inner();
    assert_eq!(bytes.last(), Some(&b'\n'));

    let frame: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(frame["filtered_rows"], 6);

    let charts = frame["charts"].as_array().unwrap();
    assert_eq!(charts.len(), 4);
    assert_eq!(charts[0]["category_column"], "Genre");
    assert_eq!(charts[0]["value_column"], "Global_Sales");
    assert_eq!(charts[0]["points"][0]["label"], "Sports");
    assert_eq!(charts[3]["kind"], "Line");
    assert!(charts.iter().all(|c| c["value_label"] == "Sales (millions)"));
    assert_eq!(charts[3]["points"][0]["label"], "2006");
}

#[test]
fn test_run_with_renders_once() {
    let harness = TestHarness::with_sample_data();
    let mut adapter = TextAdapter::new(Vec::new());

    let state = run_with(&harness.config(), &mut adapter).unwrap();
    let text = String::from_utf8(adapter.into_inner()).unwrap();

    assert_eq!(text.matches("== ").count(), 4);
    assert_eq!(state.tables().filtered_rows, 6);
}
