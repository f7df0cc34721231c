//! Tests for the pagination module

use super::*;
use crate::error::{Error, Result};
use crate::params::{FormBody, ListParams, OFFSET_KEY};
use async_trait::async_trait;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use test_case::test_case;

// ============================================================================
// Helpers
// ============================================================================

/// Replays scripted pages and records every query it receives
struct ScriptedSource {
    pages: VecDeque<Result<Page<u32>>>,
    queries: Arc<Mutex<Vec<FormBody>>>,
}

impl ScriptedSource {
    fn new(pages: Vec<Result<Page<u32>>>) -> (Self, Arc<Mutex<Vec<FormBody>>>) {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let source = Self {
            pages: pages.into(),
            queries: Arc::clone(&queries),
        };
        (source, queries)
    }
}

#[async_trait]
impl PageSource<u32> for ScriptedSource {
    async fn fetch_page(&mut self, query: FormBody) -> Result<Page<u32>> {
        self.queries.lock().unwrap().push(query);
        self.pages
            .pop_front()
            .unwrap_or_else(|| Ok(Page::new(Vec::new(), ListMeta::last())))
    }
}

fn page(range: std::ops::Range<u32>, has_more: bool) -> Result<Page<u32>> {
    let meta = if has_more {
        ListMeta::more()
    } else {
        ListMeta::last()
    };
    Ok(Page::new(range.collect(), meta))
}

async fn drain<S: PageSource<u32>>(iter: &mut ListIter<u32, S>) -> Result<Vec<u32>> {
    let mut items = Vec::new();
    while let Some(item) = iter.advance().await? {
        items.push(item);
    }
    Ok(items)
}

// ============================================================================
// Traversal
// ============================================================================

#[tokio::test]
async fn test_yields_items_in_page_order() {
    let (source, queries) = ScriptedSource::new(vec![
        page(0..3, true),
        page(3..6, true),
        page(6..8, false),
    ]);
    let mut iter = ListIter::new(ListParams::new(), FormBody::new(), source);

    let items = drain(&mut iter).await.unwrap();

    assert_eq!(items, (0..8).collect::<Vec<_>>());
    assert_eq!(iter.fetch_count(), 3);
    assert_eq!(queries.lock().unwrap().len(), 3);
    assert!(!iter.has_more());
    assert_eq!(iter.state(), IterState::Exhausted);
}

/// Scripts pages of the given sizes with consecutive items; every page but
/// the last reports more.
fn script(sizes: &[u32], last_has_more: bool) -> Vec<Result<Page<u32>>> {
    let mut start = 0;
    sizes
        .iter()
        .enumerate()
        .map(|(i, &size)| {
            let has_more = i + 1 < sizes.len() || last_has_more;
            let p = page(start..start + size, has_more);
            start += size;
            p
        })
        .collect()
}

#[test_case(&[1], false, false, 1, 1 ; "one item one page")]
#[test_case(&[3, 3, 2], false, false, 8, 3 ; "last page reports no more")]
#[test_case(&[4, 4], true, false, 8, 3 ; "trailing empty fetch ends stream")]
#[test_case(&[2, 0, 5], true, false, 2, 2 ; "empty middle page is terminal")]
#[test_case(&[0], true, false, 0, 1 ; "empty first page")]
#[test_case(&[5, 5, 5], true, true, 5, 1 ; "single mode stops after first page")]
#[test_case(&[1, 1, 1, 1, 1, 1], false, false, 6, 6 ; "many tiny pages")]
#[tokio::test]
async fn test_yields_every_item_of_each_fetched_page(
    sizes: &[u32],
    last_has_more: bool,
    single: bool,
    expected_items: u32,
    expected_fetches: usize,
) {
    let (source, queries) = ScriptedSource::new(script(sizes, last_has_more));
    let mut params = ListParams::new();
    params.single = single;
    let mut iter = ListIter::new(params, FormBody::new(), source);

    let items = drain(&mut iter).await.unwrap();

    assert_eq!(items, (0..expected_items).collect::<Vec<_>>());
    assert_eq!(iter.fetch_count(), expected_fetches);
    assert_eq!(queries.lock().unwrap().len(), expected_fetches);
    assert!(!iter.has_more());
    assert_eq!(iter.state(), IterState::Exhausted);
    if expected_fetches > 1 {
        assert_eq!(iter.params().filters.offset(), Some(u64::from(expected_items)));
    }
}

#[tokio::test]
async fn test_has_more_before_first_fetch() {
    let (source, queries) = ScriptedSource::new(vec![page(0..2, false)]);
    let iter = ListIter::new(ListParams::new(), FormBody::new(), source);

    assert!(iter.has_more());
    assert!(iter.current_metadata().is_none());
    assert!(queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_first_page_ends_without_error() {
    let (source, queries) = ScriptedSource::new(vec![page(0..0, true)]);
    let mut iter = ListIter::new(ListParams::new(), FormBody::new(), source);

    let first = iter.advance().await.unwrap();

    assert!(first.is_none());
    assert!(!iter.has_more());
    assert!(iter.advance().await.unwrap().is_none());
    assert_eq!(queries.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_page_is_terminal_even_when_more_reported() {
    let (source, queries) = ScriptedSource::new(vec![
        page(0..2, true),
        page(0..0, true),
        page(10..12, false),
    ]);
    let mut iter = ListIter::new(ListParams::new(), FormBody::new(), source);

    let items = drain(&mut iter).await.unwrap();

    assert_eq!(items, vec![0, 1]);
    assert_eq!(queries.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_single_page_mode_fetches_once() {
    let (source, queries) = ScriptedSource::new(vec![page(0..5, true), page(5..10, true)]);
    let params = ListParams::new().single();
    let mut iter = ListIter::new(params, FormBody::new(), source);

    let items = drain(&mut iter).await.unwrap();

    assert_eq!(items, vec![0, 1, 2, 3, 4]);
    assert_eq!(queries.lock().unwrap().len(), 1);
    assert!(!iter.has_more());
    // Metadata still reports more; single-page mode ignores it
    assert!(iter.current_metadata().unwrap().has_more);
}

#[tokio::test]
async fn test_has_more_true_while_buffer_holds_items() {
    let (source, _) = ScriptedSource::new(vec![page(0..2, false)]);
    let mut iter = ListIter::new(ListParams::new().single(), FormBody::new(), source);

    assert_eq!(iter.advance().await.unwrap(), Some(0));
    assert!(iter.has_more());
    assert_eq!(iter.advance().await.unwrap(), Some(1));
    assert!(!iter.has_more());
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_error_on_second_page() {
    let (source, queries) = ScriptedSource::new(vec![
        page(0..3, true),
        Err(Error::http_status(500, "boom")),
        page(3..6, false),
    ]);
    let mut iter = ListIter::new(ListParams::new(), FormBody::new(), source);

    for expected in 0..3 {
        assert_eq!(iter.advance().await.unwrap(), Some(expected));
    }

    let err = iter.advance().await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    assert!(!iter.has_more());
    assert_eq!(iter.state(), IterState::Failed);

    // No further fetch after the failure
    assert!(iter.advance().await.unwrap().is_none());
    assert_eq!(queries.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_error_on_first_page() {
    let (source, _) = ScriptedSource::new(vec![Err(Error::decode("bad json"))]);
    let mut iter = ListIter::new(ListParams::new(), FormBody::new(), source);

    assert!(matches!(
        iter.advance().await,
        Err(Error::Decode { .. })
    ));
    assert!(!iter.has_more());
    assert!(iter.current_metadata().is_none());
    assert_eq!(iter.fetch_count(), 0);
}

// ============================================================================
// Offset Advancement
// ============================================================================

#[tokio::test]
async fn test_offset_advances_by_page_size() {
    let (source, queries) = ScriptedSource::new(vec![
        page(0..5, true),
        page(5..10, true),
        page(10..13, false),
    ]);
    let params = ListParams::new().filter(OFFSET_KEY, "", "0");
    let mut iter = ListIter::new(params, FormBody::new(), source);

    let items = drain(&mut iter).await.unwrap();

    assert_eq!(items.len(), 13);
    assert_eq!(iter.params().filters.offset(), Some(13));

    let queries = queries.lock().unwrap();
    assert_eq!(queries.len(), 3);
    let offsets: Vec<_> = queries.iter().map(|q| q.get(OFFSET_KEY)).collect();
    assert_eq!(offsets, vec![Some("0"), Some("5"), Some("10")]);
}

#[tokio::test]
async fn test_offset_inserted_when_absent() {
    let (source, queries) = ScriptedSource::new(vec![page(0..4, true), page(4..6, false)]);
    let mut iter = ListIter::new(ListParams::new(), FormBody::new(), source);

    drain(&mut iter).await.unwrap();

    let queries = queries.lock().unwrap();
    assert_eq!(queries[0].get(OFFSET_KEY), None);
    assert_eq!(queries[1].get(OFFSET_KEY), Some("4"));
}

#[tokio::test]
async fn test_query_combines_base_body_and_list_params() {
    let (source, queries) = ScriptedSource::new(vec![page(0..1, false)]);
    let mut base = FormBody::new();
    base.add("customer", "cus_123");
    let params = ListParams::new()
        .filter("include[]", "", "total_count")
        .limit(5);
    let mut iter = ListIter::new(params, base, source);

    drain(&mut iter).await.unwrap();

    let queries = queries.lock().unwrap();
    let pairs: Vec<(&str, &str)> = queries[0]
        .pairs()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("customer", "cus_123"),
            ("include[]", "total_count"),
            ("limit", "5"),
        ]
    );
}

// ============================================================================
// Metadata
// ============================================================================

#[tokio::test]
async fn test_metadata_reflects_latest_page_only() {
    let first = Page::new(
        vec![1, 2],
        ListMeta {
            has_more: true,
            total_count: Some(4),
            url: "/v1/charges".to_string(),
        },
    );
    let second = Page::new(vec![3, 4], ListMeta::last());
    let (source, _) = ScriptedSource::new(vec![Ok(first), Ok(second)]);
    let mut iter = ListIter::new(ListParams::new(), FormBody::new(), source);

    iter.advance().await.unwrap();
    assert_eq!(iter.current_metadata().unwrap().total_count, Some(4));

    iter.advance().await.unwrap();
    iter.advance().await.unwrap();

    assert_eq!(iter.fetch_count(), 2);
    assert_eq!(iter.current_metadata(), Some(&ListMeta::last()));
}

#[test]
fn test_list_meta_deserialize() {
    let meta: ListMeta = serde_json::from_str(
        r#"{"object": "list", "has_more": true, "total_count": 42, "url": "/v1/charges"}"#,
    )
    .unwrap();
    assert_eq!(meta, ListMeta::more().with_total(42).with_url("/v1/charges"));

    let meta: ListMeta = serde_json::from_str("{}").unwrap();
    assert_eq!(meta, ListMeta::last());
}

// ============================================================================
// Adapters
// ============================================================================

#[tokio::test]
async fn test_fetch_fn_closure_source() {
    let calls = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&calls);
    let source = FetchFn(move |query: FormBody| {
        *counter.lock().unwrap() += 1;
        async move {
            let offset: u32 = query
                .get(OFFSET_KEY)
                .and_then(|v| v.parse().ok())
                .unwrap_or(0);
            let items: Vec<u32> = (offset..offset + 2).collect();
            let meta = if offset < 4 {
                ListMeta::more()
            } else {
                ListMeta::last()
            };
            Ok::<_, Error>(Page::new(items, meta))
        }
    });

    let iter = ListIter::new(ListParams::new(), FormBody::new(), source);
    let items = iter.collect_all().await.unwrap();

    assert_eq!(items, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(*calls.lock().unwrap(), 3);
}

#[tokio::test]
async fn test_into_stream_stops_after_error() {
    let (source, _) = ScriptedSource::new(vec![
        page(0..2, true),
        Err(Error::http_status(503, "unavailable")),
    ]);
    let iter = ListIter::new(ListParams::new(), FormBody::new(), source);

    let results: Vec<Result<u32>> = iter.into_stream().collect().await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap(), &0);
    assert_eq!(results[1].as_ref().unwrap(), &1);
    assert!(matches!(results[2], Err(Error::HttpStatus { status: 503, .. })));
}

#[tokio::test]
async fn test_collect_all_propagates_error() {
    let (source, _) = ScriptedSource::new(vec![
        page(0..2, true),
        Err(Error::http_status(500, "boom")),
    ]);
    let iter = ListIter::new(ListParams::new(), FormBody::new(), source);

    assert!(iter.collect_all().await.is_err());
}
