//! Tests for session state, criteria handling and paging

use std::future::Future;

use super::record;
use crate::Error;
use crate::app::models::{InventoryRecord, Side};
use crate::app::services::dataset::Session;
use crate::app::services::query_engine::Criteria;
use crate::app::services::sheet_client::{
    FetchedTable, GvizCell, GvizColumn, GvizRow, SheetClient,
};
use crate::config::Config;
use crate::constants::columns;

fn loaded_session(records: Vec<InventoryRecord>, page_size: usize) -> Session {
    let mut session = Session::new(page_size);
    session.load_dataset(records);
    session
}

fn numbered_records(count: usize) -> Vec<InventoryRecord> {
    (0..count)
        .map(|i| record(&format!("P{i:03}-D01"), &format!("{i}"), "x"))
        .collect()
}

#[test]
fn test_new_session_starts_on_page_one() {
    let session = Session::new(50);
    assert_eq!(session.page(), 1);
    assert!(!session.has_loaded());
    assert!(!session.is_loading());
    assert!(session.dataset().is_empty());
    assert!(session.error().is_none());
}

#[test]
fn test_load_dataset_cleans_and_sorts() {
    let session = loaded_session(
        vec![
            record("A10", "1", "x"),
            record("A2", "", ""),
            record("A1", "3", "z"),
        ],
        50,
    );

    let locations: Vec<&str> = session.dataset().iter().map(|r| r.location.as_str()).collect();
    assert_eq!(locations, vec!["A1", "A10"]);
}

#[test]
fn test_each_criteria_change_resets_the_page() {
    let mut session = loaded_session(numbered_records(120), 50);

    session.go_to_page(3);
    session.set_search("x");
    assert_eq!(session.page(), 1);

    session.go_to_page(3);
    session.set_status_filter(Some("Obsoleto".to_string()));
    assert_eq!(session.page(), 1);

    session.go_to_page(3);
    session.set_type_filter(Some("SECO".to_string()));
    assert_eq!(session.page(), 1);

    session.go_to_page(3);
    session.set_aisle_filter(Some("P01".to_string()));
    assert_eq!(session.page(), 1);

    session.go_to_page(3);
    session.set_side_filter(Some(Side::D));
    assert_eq!(session.page(), 1);

    session.go_to_page(3);
    session.set_criteria(Criteria::default());
    assert_eq!(session.page(), 1);
}

#[test]
fn test_clear_filters_resets_criteria_and_page() {
    let mut session = loaded_session(numbered_records(120), 50);
    session.set_search("algo");
    session.set_side_filter(Some(Side::I));
    session.go_to_page(2);

    session.clear_filters();
    assert!(session.criteria().is_empty());
    assert_eq!(session.page(), 1);
    assert_eq!(session.filtered().len(), 120);
}

#[test]
fn test_paging_over_filtered_view() {
    let mut session = loaded_session(numbered_records(120), 50);

    assert_eq!(session.page_count(), 3);
    assert_eq!(session.current_page().len(), 50);

    session.go_to_page(3);
    assert_eq!(session.current_page().len(), 20);

    session.go_to_page(4);
    assert!(session.current_page().is_empty());
}

#[test]
fn test_next_and_prev_page_are_clamped() {
    let mut session = loaded_session(numbered_records(120), 50);

    session.prev_page();
    assert_eq!(session.page(), 1);

    session.next_page();
    session.next_page();
    session.next_page();
    assert_eq!(session.page(), 3);

    session.go_to_page(0);
    assert_eq!(session.page(), 1);
}

#[test]
fn test_filters_narrow_the_current_page() {
    let mut session = loaded_session(
        vec![
            record("P01-D01", "123", "Café frío"),
            record("P01-I02", "456", "Te verde"),
            record("P02-D03", "789", "Café molido"),
        ],
        50,
    );

    session.set_search("cafe");
    assert_eq!(session.filtered().len(), 2);
    assert_eq!(session.page_count(), 1);

    session.set_aisle_filter(Some("P02".to_string()));
    let page = session.current_page();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].article_id, "789");
}

fn fetched_table(locations: &[&str]) -> FetchedTable {
    let cols = [columns::LOCATION, columns::ARTICLE]
        .iter()
        .map(|label| GvizColumn {
            label: Some((*label).to_string()),
        })
        .collect();
    let rows = locations
        .iter()
        .enumerate()
        .map(|(i, location)| GvizRow {
            c: vec![
                Some(GvizCell {
                    v: Some(serde_json::Value::String((*location).to_string())),
                    f: None,
                }),
                Some(GvizCell {
                    v: Some(serde_json::Value::String(format!("{}", i + 1))),
                    f: None,
                }),
            ],
        })
        .collect();
    FetchedTable {
        cols,
        rows,
        last_updated: Some("15/01/24".to_string()),
    }
}

#[test]
fn test_successful_fetch_outcome_replaces_dataset() {
    let mut session = loaded_session(numbered_records(2), 50);

    let result = session.apply_fetch_outcome(Ok(fetched_table(&["B2", "B10", "B1"])));
    assert!(result.is_ok());
    assert!(session.has_loaded());
    assert_eq!(session.last_updated(), Some("15/01/24"));

    let locations: Vec<&str> = session.dataset().iter().map(|r| r.location.as_str()).collect();
    assert_eq!(locations, vec!["B1", "B2", "B10"]);
}

#[test]
fn test_failed_fetch_outcome_keeps_previous_dataset() {
    let mut session = loaded_session(numbered_records(3), 50);

    let result = session.apply_fetch_outcome(Err(Error::connectivity("request failed")));
    assert!(result.is_err());

    // The previous dataset survives and the failure lands in the error slot
    assert_eq!(session.dataset().len(), 3);
    assert_eq!(session.error(), Some("connection error: request failed"));
}

#[test]
fn test_successful_fetch_outcome_clears_stale_error() {
    let mut session = loaded_session(numbered_records(1), 50);
    let _ = session.apply_fetch_outcome(Err(Error::connectivity("request failed")));
    assert!(session.error().is_some());

    session
        .apply_fetch_outcome(Ok(fetched_table(&["C1"])))
        .unwrap();
    assert!(session.error().is_none());
    assert_eq!(session.dataset().len(), 1);
}

#[tokio::test]
async fn test_dropped_refresh_leaves_session_usable() {
    let client = SheetClient::new(Config::default());
    let mut session = Session::new(50);

    // Poll the refresh once so it suspends at the network call, then drop it
    {
        let refresh = session.refresh(&client);
        tokio::pin!(refresh);
        std::future::poll_fn(|cx| {
            let _ = refresh.as_mut().poll(cx);
            std::task::Poll::Ready(())
        })
        .await;
    }

    // The abandoned fetch must not leave the loading flag stuck
    assert!(!session.is_loading());
}

#[test]
fn test_filter_options_come_from_full_dataset() {
    let mut dataset = numbered_records(3);
    dataset[0].product_type = "SECO".to_string();
    dataset[1].product_type = "GRANEL".to_string();
    dataset[2].product_type = "SECO".to_string();

    let mut session = loaded_session(dataset, 50);
    session.set_type_filter(Some("SECO".to_string()));

    // Narrowing the view must not narrow the offered options
    let options = session.filter_options();
    assert_eq!(options.types, vec!["GRANEL", "SECO"]);
}
