use image::{Rgba, RgbaImage};
use qr_sheets::*;

/// Items whose colour encodes their index, so order can be read back from pixels
fn create_test_items(count: usize, width: u32, height: u32) -> Vec<RgbaImage> {
    (0..count)
        .map(|i| {
            let shade = Rgba([(i % 256) as u8, (i / 256) as u8, 7, 255]);
            RgbaImage::from_pixel(width, height, shade)
        })
        .collect()
}

fn rects_overlap(a: &layout::Placement, b: &layout::Placement, w: u64, h: u64) -> bool {
    a.x < b.x + w && b.x < a.x + w && a.y < b.y + h && b.y < a.y + h
}

#[test]
fn test_seven_items_fit_on_one_row() {
    let items = create_test_items(7, 100, 100);
    let geometry = Geometry::new(1000, 1000, 10, 10);

    let grid = grid_for(&items, &geometry).unwrap();
    assert_eq!(grid.cols, 9);
    assert_eq!(grid.rows, 9);
    assert_eq!(grid.per_page(), 81);

    let pages = pack(&items, &geometry);
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].number, 1);
    assert_eq!(pages[0].item_count(), 7);

    for (i, placement) in pages[0].placements.iter().enumerate() {
        assert_eq!(placement.position, layout::GridPosition::new(0, i));
        assert_eq!(placement.x, 10 + i as u64 * 110);
        assert_eq!(placement.y, 10);
    }
}

#[test]
fn test_no_items_no_pages() {
    let pages = pack(&[], &Geometry::new(2480, 3508, 10, 10));
    assert!(pages.is_empty());
}

#[test]
fn test_item_count_preserved() {
    let geometry = Geometry::new(340, 230, 10, 10); // 3 x 2 grid
    for count in [1, 5, 6, 7, 12, 13, 40] {
        let items = create_test_items(count, 100, 100);
        let pages = pack(&items, &geometry);

        let total: usize = pages.iter().map(Page::item_count).sum();
        assert_eq!(total, count, "count {count}");
    }
}

#[test]
fn test_full_pages_except_last() {
    let geometry = Geometry::new(340, 230, 10, 10);
    let items = create_test_items(14, 100, 100);
    let pages = pack(&items, &geometry);

    assert_eq!(pages.len(), 3);
    for page in &pages[..2] {
        assert_eq!(page.item_count(), 6);
    }
    assert_eq!(pages[2].item_count(), 14 % 6);

    let even = pack(&create_test_items(12, 100, 100), &geometry);
    assert_eq!(even.len(), 2);
    assert_eq!(even[1].item_count(), 6);
}

#[test]
fn test_order_preserved_across_pages() {
    let geometry = Geometry::new(340, 230, 10, 10);
    let items = create_test_items(17, 100, 100);
    let pages = pack(&items, &geometry);

    let order: Vec<usize> = pages
        .iter()
        .flat_map(|page| page.placements.iter().map(|p| p.item_index))
        .collect();
    assert_eq!(order, (0..17).collect::<Vec<_>>());

    let numbers: Vec<usize> = pages.iter().map(|page| page.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn test_pixels_come_from_the_placed_item() {
    let geometry = Geometry::new(340, 230, 10, 10);
    let items = create_test_items(8, 100, 100);
    let pages = pack(&items, &geometry);

    for page in &pages {
        for placement in &page.placements {
            let pixel = page.image.get_pixel(placement.x as u32 + 50, placement.y as u32 + 50);
            assert_eq!(pixel, items[placement.item_index].get_pixel(0, 0));
        }
    }

    // Gap between the first two items keeps the background
    assert_eq!(pages[0].image.get_pixel(115, 50), &Rgba([255, 255, 255, 255]));
}

#[test]
fn test_no_overlap_on_a_page() {
    let geometry = Geometry::new(2480, 3508, 10, 10);
    let items = create_test_items(60, 375, 430);
    let pages = pack(&items, &geometry);

    for page in &pages {
        for (i, a) in page.placements.iter().enumerate() {
            for b in &page.placements[i + 1..] {
                assert!(!rects_overlap(a, b, 375, 430), "{a:?} overlaps {b:?}");
            }
            assert!(a.x + 375 <= 2480);
            assert!(a.y + 430 <= 3508);
        }
    }
}

#[test]
fn test_packing_is_deterministic() {
    let geometry = Geometry::new(340, 230, 10, 10);
    let items = create_test_items(9, 100, 100);

    let first = pack(&items, &geometry);
    let second = pack(&items, &geometry);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.placements, b.placements);
        assert_eq!(a.image, b.image);
    }
}

#[test]
fn test_page_copies_share_the_raster() {
    let pages = pack(&create_test_items(2, 100, 100), &Geometry::new(340, 230, 10, 10));
    let copies = pages.to_vec();
    assert!(std::sync::Arc::ptr_eq(&copies[0].image, &pages[0].image));
}

#[test]
fn test_default_options_geometry_is_a4_300dpi() {
    let geometry = SheetOptions::default().geometry();
    assert_eq!(geometry, Geometry::new(2480, 3508, 10, 10));
    assert_eq!(
        (geometry.page_width, geometry.page_height),
        (
            constants::DEFAULT_PAGE_WIDTH_PX,
            constants::DEFAULT_PAGE_HEIGHT_PX
        )
    );
}
