use std::io::Write;

use proptest::prelude::*;

use crate::browser::Browser;
use crate::filter::{self, FilterCriteria, FilterDimension};
use crate::pagination::{self, PageToken, PAGE_SIZE};
use crate::record::{self, Record};
use crate::source::DataSource;

fn numbered(n: usize) -> Vec<Record> {
    let mut text = String::from("title,description,salary,location,employment_type,employer\n");
    for i in 1..=n {
        text.push_str(&format!("Job {i},desc {i},$100k,City {},Full-time,Acme\n", i % 3));
    }
    record::parse_records(&text).unwrap()
}

fn ids(records: &[&Record]) -> Vec<usize> {
    records.iter().map(|r| r.id).collect()
}

fn tokens(raw: &[i64]) -> Vec<PageToken> {
    raw.iter()
        .map(|&n| {
            if n < 0 {
                PageToken::Ellipsis
            } else {
                PageToken::Page(n as usize)
            }
        })
        .collect()
}

#[test]
fn first_page_of_twelve() {
    let records = numbered(12);
    let page = pagination::paginate(&records, PAGE_SIZE, 1);
    let slice_ids: Vec<_> = page.slice.iter().map(|r| r.id).collect();
    assert_eq!(slice_ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(page.total_pages, 3);
    assert_eq!((page.first_index, page.last_index), (1, 5));
}

#[test]
fn last_page_of_twelve() {
    let records = numbered(12);
    let page = pagination::paginate(&records, PAGE_SIZE, 3);
    let slice_ids: Vec<_> = page.slice.iter().map(|r| r.id).collect();
    assert_eq!(slice_ids, vec![11, 12]);
    assert_eq!((page.first_index, page.last_index), (11, 12));
}

#[test]
fn compressed_pages_at_start() {
    assert_eq!(
        pagination::compressed_page_numbers(1, 10),
        tokens(&[1, 2, 3, 4, -1, 10])
    );
}

#[test]
fn compressed_pages_at_end() {
    assert_eq!(
        pagination::compressed_page_numbers(10, 10),
        tokens(&[1, -1, 7, 8, 9, 10])
    );
}

#[test]
fn compressed_pages_in_the_middle() {
    assert_eq!(
        pagination::compressed_page_numbers(5, 10),
        tokens(&[1, -1, 4, 5, 6, -1, 10])
    );
}

#[test]
fn missing_salary_and_ai_used_columns_use_sentinels() {
    let records = record::parse_records("title,employer\nDev,Acme\n").unwrap();
    assert_eq!(records[0].salary, "Not specified");
    assert_eq!(records[0].ai_used, "Unknown");
}

#[test]
fn changing_a_filter_resets_the_page() {
    for dimension in [
        FilterDimension::Search,
        FilterDimension::Location,
        FilterDimension::Employment,
    ] {
        let mut browser = Browser::with_records(numbered(20));
        browser.set_page(3);
        assert_eq!(browser.current_page(), 3);
        browser.set_filter(dimension, "");
        assert_eq!(browser.current_page(), 1);
    }

    let mut browser = Browser::with_records(numbered(20));
    browser.set_page(3);
    browser.clear_filters();
    assert_eq!(browser.current_page(), 1);
}

#[test]
fn view_reports_display_bounds_for_scenarios() {
    let mut browser = Browser::with_records(numbered(12));
    let view = browser.view();
    assert_eq!(
        format!("{}-{} of {}", view.first_index, view.last_index, view.matched_count),
        "1-5 of 12"
    );

    browser.set_page(3);
    let view = browser.view();
    assert_eq!(view.visible.len(), 2);
    assert_eq!(
        format!("{}-{} of {}", view.first_index, view.last_index, view.matched_count),
        "11-12 of 12"
    );
}

#[tokio::test]
async fn reload_reads_a_csv_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "title,location,employment_type").unwrap();
    writeln!(file, "Rust Engineer,Berlin,Full-time").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "Go Engineer,Remote,Contract").unwrap();
    file.flush().unwrap();

    let source = DataSource::FilePath(file.path().to_string_lossy().to_string());
    let mut browser = Browser::new();
    browser.reload(&source).await;

    assert!(!browser.is_loading());
    assert!(browser.last_error().is_none());
    let view = browser.view();
    assert_eq!(view.total_count, 2);
    assert_eq!(view.employment_types, vec!["Full-time", "Contract"]);
}

#[tokio::test]
async fn reload_from_a_missing_file_recovers_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let source = DataSource::FilePath(dir.path().join("missing.csv").to_string_lossy().to_string());
    let mut browser = Browser::with_records(numbered(7));
    browser.set_filter(FilterDimension::Search, "job");
    browser.reload(&source).await;

    assert!(!browser.is_loading());
    assert!(browser.last_error().is_some());
    assert_eq!(browser.view().total_count, 0);
    assert_eq!(browser.criteria().search, "job");
}

fn arb_record_fields() -> impl Strategy<Value = (String, String, String, String, String)> {
    let word = prop::sample::select(vec![
        "", "Rust", "rust dev", "Berlin", "berlin", "Remote", "Full-time", "full-time",
        "Contract", "Acme", "ÄPFEL", "äpfel",
    ]);
    (
        word.clone(),
        word.clone(),
        word.clone(),
        word.clone(),
        word,
    )
        .prop_map(|(a, b, c, d, e)| {
            (
                a.to_string(),
                b.to_string(),
                c.to_string(),
                d.to_string(),
                e.to_string(),
            )
        })
}

fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record_fields(), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, description, location, employment, employer))| Record {
                id: i + 1,
                title,
                description,
                salary: record::DEFAULT_SALARY.to_string(),
                location,
                employment,
                ai_used: record::DEFAULT_AI_USED.to_string(),
                requirements: String::new(),
                benefits: String::new(),
                employer,
            })
            .collect()
    })
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    let needle = prop::sample::select(vec![
        "", "rust", "RUST", "berlin", "rem", "full-time", "FULL-TIME", "contract", "äpfel",
    ]);
    (needle.clone(), needle.clone(), needle).prop_map(|(search, location, employment)| {
        FilterCriteria {
            search: search.to_string(),
            location: location.to_string(),
            employment: employment.to_string(),
        }
    })
}

proptest! {
    #[test]
    fn filtered_set_is_an_ordered_subset(records in arb_records(), criteria in arb_criteria()) {
        let out = filter::apply(&records, &criteria);
        let out_ids = ids(&out);
        let mut sorted = out_ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(&out_ids, &sorted);
        for id in out_ids {
            prop_assert!(records.iter().any(|r| r.id == id));
        }
    }

    #[test]
    fn filtering_is_idempotent(records in arb_records(), criteria in arb_criteria()) {
        let once = filter::apply(&records, &criteria);
        let twice = filter::apply(once.iter().copied(), &criteria);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn every_match_satisfies_each_active_dimension(
        records in arb_records(),
        criteria in arb_criteria(),
    ) {
        let search = criteria.search.to_lowercase();
        let location = criteria.location.to_lowercase();
        let employment = criteria.employment.to_lowercase();
        for r in filter::apply(&records, &criteria) {
            if !search.is_empty() {
                prop_assert!(
                    r.title.to_lowercase().contains(&search)
                        || r.description.to_lowercase().contains(&search)
                        || r.employer.to_lowercase().contains(&search)
                );
            }
            if !location.is_empty() {
                prop_assert!(r.location.to_lowercase().contains(&location));
            }
            if !employment.is_empty() {
                prop_assert_eq!(r.employment.to_lowercase(), employment.clone());
            }
        }
        let rejected = records.iter().filter(|r| !criteria.matches(r)).count();
        prop_assert_eq!(rejected + filter::apply(&records, &criteria).len(), records.len());
    }

    #[test]
    fn total_pages_bounds_the_matched_count(len in 0usize..500, page_size in 1usize..20) {
        let pages = pagination::total_pages(len, page_size);
        if len == 0 {
            prop_assert_eq!(pages, 0);
        } else {
            prop_assert!(pages * page_size >= len);
            prop_assert!((pages - 1) * page_size < len);
        }
    }

    #[test]
    fn visible_slice_is_a_contiguous_window(len in 0usize..60, page in 0usize..20) {
        let items: Vec<usize> = (0..len).collect();
        let result = pagination::paginate(&items, PAGE_SIZE, page);
        prop_assert!(result.slice.len() <= PAGE_SIZE);
        if let Some(first) = result.slice.first() {
            prop_assert_eq!(*first, (page - 1) * PAGE_SIZE);
            for pair in result.slice.windows(2) {
                prop_assert_eq!(pair[0] + 1, pair[1]);
            }
            prop_assert_eq!(result.first_index, first + 1);
            prop_assert_eq!(result.last_index, first + result.slice.len());
        }
    }

    #[test]
    fn compressed_pages_stay_short(total in 0usize..200, current in 1usize..220) {
        let out = pagination::compressed_page_numbers(current, total);
        prop_assert!(out.len() <= 7);
        if total > 5 {
            prop_assert_eq!(out.first(), Some(&PageToken::Page(1)));
            prop_assert_eq!(out.last(), Some(&PageToken::Page(total)));
        } else {
            prop_assert_eq!(out.len(), total);
        }
    }

    #[test]
    fn page_moves_never_touch_filters(
        records in arb_records(),
        criteria in arb_criteria(),
        moves in prop::collection::vec(0u8..3, 0..20),
    ) {
        let mut browser = Browser::with_records(records);
        browser.set_criteria(criteria.clone());
        for m in moves {
            match m {
                0 => browser.next_page(),
                1 => browser.prev_page(),
                _ => browser.set_page(2),
            }
            prop_assert_eq!(browser.criteria(), &criteria);
            prop_assert!(browser.current_page() >= 1);
        }
    }
}
