// src/grid/tests.rs

use crate::alphabet;
use crate::error::GridError;
use crate::geometry::{Point, Rect};
use crate::grid::{GridAddress, GridAddressSpace};
use test_log::test;

const SCREEN: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1920.0,
    height: 1080.0,
};

const EPSILON: f64 = 1e-9;

fn active_space() -> GridAddressSpace {
    let mut space = GridAddressSpace::new();
    space.ensure_active(SCREEN);
    space
}

fn addr(coordinate: &str) -> GridAddress {
    GridAddress::parse(coordinate).expect("test coordinate should be valid")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

// Containment with a small tolerance; (1 - r)*w + r*w can exceed w by an ulp.
fn assert_contained(inner: Rect, outer: Rect) {
    assert!(
        inner.x >= outer.x - EPSILON
            && inner.y >= outer.y - EPSILON
            && inner.right() <= outer.right() + EPSILON
            && inner.bottom() <= outer.bottom() + EPSILON,
        "{inner:?} not contained in {outer:?}"
    );
}

// --- address parsing ---

#[test]
fn parse_accepts_two_symbol_coordinates() {
    assert_eq!(addr("aa"), GridAddress { row: 'a', column: 'a' });
    assert_eq!(addr("z9"), GridAddress { row: 'z', column: '9' });
    assert_eq!(addr("0b"), GridAddress { row: '0', column: 'b' });
}

#[test]
fn parse_rejects_wrong_lengths() {
    for coordinate in ["", "a", "abc", "aaaa"] {
        assert_eq!(
            GridAddress::parse(coordinate),
            Err(GridError::MalformedCoordinate(coordinate.to_string()))
        );
    }
}

#[test]
fn parse_rejects_symbols_outside_alphabet() {
    assert_eq!(GridAddress::parse("A9"), Err(GridError::UnknownSymbol('A')));
    assert_eq!(GridAddress::parse("a!"), Err(GridError::UnknownSymbol('!')));
    assert_eq!(GridAddress::parse(" a"), Err(GridError::UnknownSymbol(' ')));
}

#[test]
fn display_round_trips_through_parse() {
    let address = addr("k3");
    assert_eq!(address.to_string().parse::<GridAddress>(), Ok(address));
}

// --- resolve ---

#[test]
fn resolve_returns_first_cell_center() {
    let space = active_space();
    let point = space.resolve(&addr("aa")).unwrap();
    assert_close(point.x, 1920.0 * 0.5 / 36.0); // 26.666...
    assert_close(point.y, 15.0);
}

#[test]
fn resolve_returns_last_cell_center() {
    let space = active_space();
    let point = space.resolve(&addr("99")).unwrap();
    assert_close(point.x, 1920.0 * 35.5 / 36.0); // 1893.333...
    assert_close(point.y, 1065.0);
}

#[test]
fn resolve_is_deterministic() {
    let space = active_space();
    let first = space.resolve(&addr("m4")).unwrap();
    let second = space.resolve(&addr("m4")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn resolve_respects_rect_origin() {
    let mut space = GridAddressSpace::new();
    space.ensure_active(Rect::new(100.0, 200.0, 720.0, 360.0));
    let point = space.resolve(&addr("aa")).unwrap();
    assert_close(point.x, 110.0);
    assert_close(point.y, 205.0);
}

#[test]
fn every_resolved_point_lies_strictly_inside_the_rect() {
    let space = active_space();
    for &row in alphabet::symbols() {
        for &column in alphabet::symbols() {
            let address = GridAddress::new(row, column).unwrap();
            let point = space.resolve(&address).unwrap();
            assert!(
                point.x > SCREEN.x && point.x < SCREEN.right(),
                "{address} resolved outside x bounds: {point:?}"
            );
            assert!(
                point.y > SCREEN.y && point.y < SCREEN.bottom(),
                "{address} resolved outside y bounds: {point:?}"
            );
        }
    }
}

#[test]
fn resolved_point_is_equidistant_from_its_cell_edges() {
    let space = active_space();
    let cell_width = SCREEN.width / 36.0;
    let cell_height = SCREEN.height / 36.0;
    // 'c' is row/column index 2.
    let point = space.resolve(&addr("cc")).unwrap();
    let cell_left = SCREEN.x + cell_width * 2.0;
    let cell_top = SCREEN.y + cell_height * 2.0;
    assert_close(point.x - cell_left, cell_width / 2.0);
    assert_close(cell_left + cell_width - point.x, cell_width / 2.0);
    assert_close(point.y - cell_top, cell_height / 2.0);
    assert_close(cell_top + cell_height - point.y, cell_height / 2.0);
}

#[test]
fn resolve_rejects_symbols_outside_alphabet() {
    let space = active_space();
    // Bypass the validating constructor to exercise resolve's own check.
    let address = GridAddress { row: '!', column: 'a' };
    assert_eq!(space.resolve(&address), Err(GridError::UnknownSymbol('!')));
    assert_eq!(space.rect(), Some(SCREEN));
}

#[test]
fn resolve_before_activation_fails() {
    let space = GridAddressSpace::new();
    assert_eq!(space.resolve(&addr("aa")), Err(GridError::Inactive));
}

// --- zoom ---

#[test]
fn zoom_shrinks_both_axes_by_the_exact_ratio() {
    let mut space = active_space();
    let rect = space.zoom(&addr("ht"), 0.6).unwrap();
    assert_eq!(rect.width, 0.6 * 1920.0);
    assert_eq!(rect.height, 0.6 * 1080.0);
}

#[test]
fn zoom_on_origin_corner_clamps_to_origin() {
    let mut space = active_space();
    let rect = space.zoom(&addr("aa"), 0.6).unwrap();
    // Candidate origin would be negative; clamped to the old origin.
    assert_eq!(rect.x, 0.0);
    assert_eq!(rect.y, 0.0);
    assert_eq!(rect.width, 0.6 * 1920.0);
    assert_eq!(rect.height, 0.6 * 1080.0);
}

#[test]
fn zoom_on_far_corner_clamps_to_far_edge() {
    let mut space = active_space();
    let rect = space.zoom(&addr("99"), 0.6).unwrap();
    assert_close(rect.x, (1.0 - 0.6) * 1920.0); // 768
    assert_close(rect.y, (1.0 - 0.6) * 1080.0); // 432
    assert_close(rect.right(), 1920.0);
    assert_close(rect.bottom(), 1080.0);
}

#[test]
fn zoom_centers_on_interior_cells() {
    let mut space = active_space();
    let center = space.resolve(&addr("ss")).unwrap();
    let rect = space.zoom(&addr("ss"), 0.6).unwrap();
    assert_close(rect.x, center.x - 0.5 * 0.6 * 1920.0);
    assert_close(rect.y, center.y - 0.5 * 0.6 * 1080.0);
    // Unclamped, the new rect is centered on the resolved point.
    assert_close(rect.center().x, center.x);
    assert_close(rect.center().y, center.y);
}

#[test]
fn zoom_result_is_contained_in_the_prior_rect() {
    let mut space = active_space();
    let mut previous = SCREEN;
    for coordinate in ["aa", "99", "hk", "a9", "9a"] {
        let rect = space.zoom(&addr(coordinate), 0.6).unwrap();
        assert_contained(rect, previous);
        previous = rect;
    }
}

#[test]
fn successive_zooms_walk_relative_to_the_prior_rect() {
    let mut space = active_space();
    let first = space.zoom(&addr("99"), 0.6).unwrap();
    let second = space.zoom(&addr("99"), 0.6).unwrap();
    // The second clamp window starts where the first rect starts, so the
    // origin keeps moving toward the corner.
    assert!(second.x > first.x);
    assert!(second.y > first.y);
    assert_contained(second, first);
}

#[test]
fn repeated_zoom_converges_monotonically_without_reaching_zero() {
    let mut space = active_space();
    let mut previous = SCREEN;
    for _ in 0..64 {
        let rect = space.zoom(&addr("m4"), 0.6).unwrap();
        assert!(rect.width < previous.width);
        assert!(rect.height < previous.height);
        assert!(rect.width > 0.0 && rect.height > 0.0);
        assert_contained(rect, SCREEN);
        previous = rect;
    }
}

#[test]
fn zoom_accepts_any_ratio_in_unit_interval() {
    for ratio in [0.05, 0.25, 0.5, 0.9, 0.99] {
        let mut space = active_space();
        let rect = space.zoom(&addr("hk"), ratio).unwrap();
        assert_eq!(rect.width, ratio * 1920.0);
        assert_eq!(rect.height, ratio * 1080.0);
        assert_contained(rect, SCREEN);
    }
}

#[test]
fn zoom_with_unknown_symbol_leaves_rect_untouched() {
    let mut space = active_space();
    let address = GridAddress { row: 'a', column: '%' };
    assert_eq!(space.zoom(&address, 0.6), Err(GridError::UnknownSymbol('%')));
    assert_eq!(space.rect(), Some(SCREEN));
}

#[test]
fn zoom_before_activation_fails() {
    let mut space = GridAddressSpace::new();
    assert_eq!(space.zoom(&addr("aa"), 0.6), Err(GridError::Inactive));
    assert!(!space.is_active());
}

// --- lifecycle ---

#[test]
fn ensure_active_derives_bounds_only_once() {
    let mut space = GridAddressSpace::new();
    assert!(!space.is_active());
    assert_eq!(space.ensure_active(SCREEN), SCREEN);
    space.zoom(&addr("aa"), 0.6).unwrap();
    let zoomed = space.rect().unwrap();
    // A second activation keeps the zoomed bounds.
    assert_eq!(space.ensure_active(SCREEN), zoomed);
}

#[test]
fn reset_then_activation_restores_full_bounds() {
    let mut space = active_space();
    space.zoom(&addr("hk"), 0.6).unwrap();
    space.zoom(&addr("hk"), 0.6).unwrap();
    space.reset();
    assert!(!space.is_active());
    assert_eq!(space.rect(), None);
    assert_eq!(space.ensure_active(SCREEN), SCREEN);
    assert_eq!(space.rect(), Some(SCREEN));
}

#[test]
fn reset_on_unset_space_is_a_no_op() {
    let mut space = GridAddressSpace::new();
    space.reset();
    assert!(!space.is_active());
}

// --- concrete reference scenario ---

#[test]
fn reference_scenario_on_a_1080p_screen() {
    let mut space = active_space();

    let point = space.resolve(&addr("aa")).unwrap();
    assert!((point.x - 26.67).abs() < 0.01);
    assert!((point.y - 15.0).abs() < 0.01);

    let rect = space.zoom(&addr("aa"), 0.6).unwrap();
    assert_eq!(Point { x: rect.x, y: rect.y }, Point { x: 0.0, y: 0.0 });

    let refined = space.resolve(&addr("aa")).unwrap();
    assert!(rect.contains(refined));
    assert_close(refined.x, rect.width * 0.5 / 36.0);
    assert_close(refined.y, rect.height * 0.5 / 36.0);
}
