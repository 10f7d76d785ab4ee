//! Tests for pagination module

use super::*;
use crate::model::{Entry, ResponseEnvelope};
use pretty_assertions::assert_eq;
use std::num::NonZeroU32;

fn envelope(results: u32, next: bool) -> ResponseEnvelope {
    ResponseEnvelope {
        total_count: 1302,
        next_cursor: next
            .then(|| "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20".to_string()),
        previous_cursor: None,
        results: (1..=results)
            .map(|i| {
                Entry::new(
                    format!("p{i}"),
                    format!("https://pokeapi.co/api/v2/pokemon/{i}/"),
                )
            })
            .collect(),
    }
}

fn limit(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

#[test]
fn test_cursor_initial_state() {
    let cursor = PaginationCursor::new(limit(20));
    assert_eq!(cursor.offset(), 0);
    assert!(cursor.has_more());
    assert!(!cursor.is_exhausted());
    assert_eq!(
        cursor.next_request_params(),
        Some(PageRequest {
            limit: limit(20),
            offset: 0
        })
    );
}

#[test]
fn test_cursor_default_page_size() {
    let cursor = PaginationCursor::default();
    assert_eq!(cursor.limit().get(), 20);
    assert_eq!(DEFAULT_PAGE_SIZE.get(), 20);
}

#[test]
fn test_cursor_advance_full_page() {
    let mut cursor = PaginationCursor::new(limit(20));
    cursor.advance(&envelope(20, true));

    assert_eq!(cursor.offset(), 20);
    assert!(cursor.has_more());
    assert_eq!(cursor.next_request_params().unwrap().offset, 20);
}

#[test]
fn test_cursor_advance_last_page() {
    let mut cursor = PaginationCursor::new(limit(20));
    cursor.advance(&envelope(20, true));
    cursor.advance(&envelope(7, false));

    assert_eq!(cursor.offset(), 27);
    assert!(cursor.is_exhausted());
    assert!(cursor.next_request_params().is_none());
}

#[test]
fn test_cursor_empty_page_with_next_is_exhausted() {
    let mut cursor = PaginationCursor::new(limit(20));
    cursor.advance(&envelope(0, true));

    assert_eq!(cursor.offset(), 0);
    assert!(!cursor.has_more());
    assert!(cursor.next_request_params().is_none());
}

#[test]
fn test_cursor_short_page_with_next_continues() {
    // The remote decides whether more exist, not the page size
    let mut cursor = PaginationCursor::new(limit(20));
    cursor.advance(&envelope(5, true));

    assert_eq!(cursor.offset(), 5);
    assert!(cursor.has_more());
}

#[test]
fn test_cursor_reset() {
    let mut cursor = PaginationCursor::new(limit(10));
    cursor.advance(&envelope(10, true));
    cursor.advance(&envelope(3, false));
    assert!(cursor.is_exhausted());

    cursor.reset();
    assert_eq!(cursor, PaginationCursor::new(limit(10)));
}

#[test]
fn test_cursor_offset_saturates() {
    let mut cursor = PaginationCursor::new(limit(20));
    cursor.offset = u32::MAX - 2;
    cursor.advance(&envelope(5, true));
    assert_eq!(cursor.offset(), u32::MAX);
}
