use image::RgbaImage;
use qr_sheets::*;

#[test]
fn test_stats_no_items() {
    let stats = calculate_statistics(0, (100, 100), &Geometry::new(1000, 1000, 10, 10));

    assert_eq!(stats.items, 0);
    assert_eq!(stats.pages, 0);
    assert_eq!(stats.last_page_items, 0);
    assert_eq!(stats.empty_slots, 0);
    assert_eq!(stats.per_page, 81);
}

#[test]
fn test_stats_partial_last_page() {
    // 3 x 2 grid
    let stats = calculate_statistics(14, (100, 100), &Geometry::new(340, 230, 10, 10));

    assert_eq!(stats.cols, 3);
    assert_eq!(stats.rows, 2);
    assert_eq!(stats.per_page, 6);
    assert_eq!(stats.pages, 3);
    assert_eq!(stats.last_page_items, 2);
    assert_eq!(stats.empty_slots, 4);
}

#[test]
fn test_stats_exact_fill() {
    let stats = calculate_statistics(12, (100, 100), &Geometry::new(340, 230, 10, 10));

    assert_eq!(stats.pages, 2);
    assert_eq!(stats.last_page_items, 6);
    assert_eq!(stats.empty_slots, 0);
}

#[test]
fn test_stats_degenerate_geometry() {
    let stats = calculate_statistics(3, (5000, 5000), &Geometry::new(2480, 3508, 10, 10));

    assert_eq!(stats.per_page, 1);
    assert_eq!(stats.pages, 3);
}

#[test]
fn test_stats_agree_with_pack() {
    let geometry = Geometry::new(500, 400, 10, 10);
    let items: Vec<RgbaImage> = (0..23).map(|_| RgbaImage::new(90, 120)).collect();

    let stats = calculate_statistics(items.len(), (90, 120), &geometry);
    let pages = pack(&items, &geometry);

    assert_eq!(stats.pages, pages.len());
    assert_eq!(
        stats.last_page_items,
        pages.last().map(Page::item_count).unwrap()
    );
}
