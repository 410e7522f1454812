mod common;

use common::*;
use duplex_impose::*;

#[test]
fn test_empty_document() {
    let stats = calculate_statistics(0);
    assert_eq!(
        stats,
        ImpositionStatistics {
            source_pages: 0,
            batches: 0,
            front_sheets: 0,
            back_sheets: 0,
            output_pages: 0,
            empty_slots: 0,
        }
    );
}

#[test]
fn test_full_batches() {
    let stats = calculate_statistics(8);
    assert_eq!(stats.batches, 2);
    assert_eq!(stats.front_sheets, 2);
    assert_eq!(stats.back_sheets, 2);
    assert_eq!(stats.output_pages, 4);
    assert_eq!(stats.empty_slots, 0);
}

#[test]
fn test_partial_last_batch() {
    // Batch of 1: front only, right slot empty
    let stats = calculate_statistics(5);
    assert_eq!(stats.batches, 2);
    assert_eq!(stats.front_sheets, 2);
    assert_eq!(stats.back_sheets, 1);
    assert_eq!(stats.output_pages, 3);
    assert_eq!(stats.empty_slots, 1);

    // Batch of 3: front full, back holds only its right page
    let stats = calculate_statistics(7);
    assert_eq!(stats.output_pages, 4);
    assert_eq!(stats.empty_slots, 1);

    // Batch of 2: one page per sheet
    let stats = calculate_statistics(2);
    assert_eq!(stats.output_pages, 2);
    assert_eq!(stats.empty_slots, 2);
}

#[test]
fn test_statistics_match_rendered_output() {
    for pages in 0..=9 {
        let bytes = impose(&test_pdf_bytes(pages), &ImpositionSettings::default()).unwrap();
        let output = lopdf::Document::load_mem(&bytes).unwrap();
        let stats = calculate_statistics(pages);

        assert_eq!(stats.output_pages, output.get_pages().len());
        let drawn: usize = all_sheets(&output).iter().map(|s| s.drawn.len()).sum();
        assert_eq!(drawn, pages);
        assert_eq!(stats.output_pages * 2 - stats.empty_slots, pages);
    }
}

#[test]
fn test_document_statistics() {
    let doc = create_test_pdf(6);
    let stats = document_statistics(&doc);
    assert_eq!(stats.source_pages, 6);
    assert_eq!(stats.output_pages, 4);
}
