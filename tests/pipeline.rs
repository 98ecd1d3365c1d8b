// tests/pipeline.rs
//
// Link compilation and table building against canned pages.
mod common;

use common::*;
use job_scrape::config::options::CellMode;
use job_scrape::scrape::{self, BuildOutcome};
use job_scrape::ScrapeError;

const SEARCH: &str = "/postings/search";

fn links(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|p| format!("{BASE}{p}")).collect()
}

#[test]
fn compile_links_follows_page_order_then_document_order() {
    let fetch = FakeFetch::new()
        .page(SEARCH, pagination(&["/postings/search?page=2", "/postings/search?page=2"]))
        .page("/postings/search?page=1", listing(&["/postings/11", "/postings/12"]))
        .page("/postings/search?page=2", listing(&["/postings/21"]));

    let got = scrape::compile_links(&fetch, &scrape_opts(), None).unwrap();
    assert_eq!(got, links(&["/postings/11", "/postings/12", "/postings/21"]));

    assert_eq!(fetch.urls_called(), links(&[
        SEARCH,
        "/postings/search?page=1",
        "/postings/search?page=2",
    ]));
    // Certificate checks are off unless asked for.
    assert!(fetch.calls.borrow().iter().all(|(_, verify)| !verify));
}

#[test]
fn compile_links_without_pagination_reads_page_one_only() {
    let fetch = FakeFetch::new()
        .page(SEARCH, "<html><body><p>Jobs</p></body></html>")
        .page("/postings/search?page=1", listing(&["/postings/1"]));

    let got = scrape::compile_links(&fetch, &scrape_opts(), None).unwrap();
    assert_eq!(got, links(&["/postings/1"]));
    assert_eq!(fetch.urls_called().len(), 2);
}

#[test]
fn compile_links_passes_verify_flag_through() {
    let fetch = FakeFetch::new()
        .page(SEARCH, "")
        .page("/postings/search?page=1", listing(&[]));
    let mut opts = scrape_opts();
    opts.verify_tls = true;

    scrape::compile_links(&fetch, &opts, None).unwrap();
    assert!(fetch.calls.borrow().iter().all(|(_, verify)| *verify));
}

#[test]
fn compile_links_fails_hard_on_missing_listing_page() {
    let fetch = FakeFetch::new()
        .page(SEARCH, pagination(&["/postings/search?page=2"]))
        .page("/postings/search?page=1", listing(&["/postings/1"]));

    let err = scrape::compile_links(&fetch, &scrape_opts(), None).unwrap_err();
    assert!(matches!(err, ScrapeError::Status { status: 404, .. }));
}

#[test]
fn header_comes_from_first_link_only() {
    let fetch = FakeFetch::new()
        .page("/postings/1", posting(&[("Title", "Clerk"), ("Pay", "20"), ("Dept", "Parks")]))
        .page("/postings/2", posting(&[("Other", "Planner"), ("Labels", "30"), ("Here", "Library")]));
    let mut opts = scrape_opts();
    opts.min_columns = 3;

    let outcome = scrape::build_table(&fetch, &links(&["/postings/1", "/postings/2"]), &opts, None).unwrap();
    assert!(outcome.is_complete());
    let table = outcome.into_table();
    assert_eq!(table.headers, vec!["Title", "Pay", "Dept"]);
    assert_eq!(table.rows, vec![
        vec!["Clerk", "20", "Parks"],
        vec!["Planner", "30", "Library"],
    ]);
    // First link is read once for the header and once for its row.
    assert_eq!(fetch.urls_called(), links(&["/postings/1", "/postings/1", "/postings/2"]));
}

#[test]
fn short_row_gets_one_pad_value() {
    let fetch = FakeFetch::new()
        .page("/postings/1", posting(&[("A", "1"), ("B", "2"), ("C", "3"), ("D", "4")]))
        .page("/postings/2", posting(&[("A", "5"), ("B", "6"), ("C", "7")]));
    let mut opts = scrape_opts();
    opts.min_columns = 4;

    let table = scrape::build_table(&fetch, &links(&["/postings/1", "/postings/2"]), &opts, None)
        .unwrap()
        .into_complete()
        .unwrap();
    assert_eq!(table.rows[0], vec!["1", "2", "3", "4"]);
    assert_eq!(table.rows[1], vec!["5", "6", "7", "null"]);
}

#[test]
fn failure_on_kth_link_keeps_earlier_rows() {
    let fetch = FakeFetch::new()
        .page("/postings/1", posting(&[("A", "1")]))
        .page("/postings/2", posting(&[("A", "2")]))
        .page("/postings/4", posting(&[("A", "4")]));
    let mut opts = scrape_opts();
    opts.min_columns = 1;

    let all = links(&["/postings/1", "/postings/2", "/postings/3", "/postings/4"]);
    match scrape::build_table(&fetch, &all, &opts, None).unwrap() {
        BuildOutcome::Partial { table, failed_at, url, cause } => {
            assert_eq!(table.rows, vec![vec!["1"], vec!["2"]]);
            assert_eq!(failed_at, 2);
            assert_eq!(url, all[2]);
            assert!(matches!(cause, ScrapeError::Status { status: 404, .. }));
        }
        other => panic!("expected partial, got {other:?}"),
    }
    // Nothing after the failing link is fetched.
    assert!(!fetch.urls_called().contains(&all[3]));
}

#[test]
fn row_that_is_still_short_after_padding_stops_the_build() {
    let fetch = FakeFetch::new()
        .page("/postings/1", posting(&[("A", "1"), ("B", "2"), ("C", "3")]))
        .page("/postings/2", posting(&[("A", "9")]));
    let mut opts = scrape_opts();
    opts.min_columns = 3;

    let outcome = scrape::build_table(&fetch, &links(&["/postings/1", "/postings/2"]), &opts, None).unwrap();
    assert_eq!(outcome.table().len(), 1);
    let err = outcome.into_complete().unwrap_err();
    match err {
        ScrapeError::Partial { failed_at, cause, .. } => {
            assert_eq!(failed_at, 1);
            assert!(matches!(*cause, ScrapeError::ColumnMismatch { expected: 3, found: 2, .. }));
        }
        other => panic!("expected Partial, got {other:?}"),
    }
}

#[test]
fn no_links_is_an_error() {
    let err = scrape::build_table(&FakeFetch::new(), &[], &scrape_opts(), None).unwrap_err();
    assert!(matches!(err, ScrapeError::NoPostings));
}

#[test]
fn unreadable_first_link_is_an_error() {
    let err = scrape::build_table(&FakeFetch::new(), &links(&["/postings/1"]), &scrape_opts(), None)
        .unwrap_err();
    assert!(matches!(err, ScrapeError::Status { .. }));
}

#[test]
fn first_cell_mode_rejects_horizontal_header() {
    let fetch = FakeFetch::new().page("/postings/1", horizontal(&["A", "B"], &["1", "2"]));
    let mut opts = scrape_opts();
    opts.cell_mode = CellMode::FirstCell;

    let err = scrape::build_table(&fetch, &links(&["/postings/1"]), &opts, None).unwrap_err();
    assert!(matches!(err, ScrapeError::MissingElement { .. }));
}

#[test]
fn first_cell_mode_reads_key_value_postings() {
    let fetch = FakeFetch::new()
        .page("/postings/1", posting(&[("Title", "Clerk"), ("Pay", "20")]));
    let mut opts = scrape_opts();
    opts.cell_mode = CellMode::FirstCell;
    opts.min_columns = 2;

    let table = scrape::build_table(&fetch, &links(&["/postings/1"]), &opts, None)
        .unwrap()
        .into_complete()
        .unwrap();
    assert_eq!(table.headers, vec!["Title", "Pay"]);
    assert_eq!(table.rows, vec![vec!["Clerk", "20"]]);
}
