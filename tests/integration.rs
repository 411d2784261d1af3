// Integration tests (native) for the `tabletalk` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use std::collections::HashSet;

use tabletalk::diagram::{Layout, VIEW_HEIGHT, VIEW_WIDTH};

#[test]
fn request_phrases_nonempty_and_unique() {
    assert!(!tabletalk::REQUEST_PHRASES.is_empty());
    let mut seen = HashSet::new();
    for p in tabletalk::REQUEST_PHRASES {
        assert!(!p.is_empty(), "empty phrase in REQUEST_PHRASES");
        assert!(seen.insert(*p), "duplicate phrase '{}' in REQUEST_PHRASES", p);
    }
}

#[test]
fn static_phrase_is_the_first_request() {
    assert_eq!(tabletalk::STATIC_PHRASE, tabletalk::REQUEST_PHRASES[0]);
}

#[test]
fn diagram_description_nonempty() {
    assert!(!tabletalk::DIAGRAM_DESCRIPTION.is_empty());
}

// Geometry sanity for the default viewBox: the person stands left of the
// table, the speech path runs between them, everything inside the viewBox.
#[test]
fn layout_positions_are_consistent() {
    let layout = Layout::compute(VIEW_WIDTH, VIEW_HEIGHT);

    assert!(layout.person.x < layout.table.x);
    assert_eq!(layout.person, tabletalk::diagram::Point::new(70.0, 120.0));
    assert_eq!(layout.table, tabletalk::diagram::Point::new(380.0, 118.0));

    // Ground line sits below both figures and spans most of the width.
    assert_eq!(layout.ground_y, 160.0);
    assert!(layout.ground_y > layout.person.y);
    assert!(layout.ground_y > layout.table.y + layout.table_height);
    assert!(layout.ground_x0 < layout.person.x);
    assert!(layout.ground_x1 > layout.table.x);
    assert!(layout.ground_x1 <= layout.width);

    // Table legs fit under the surface.
    assert!(layout.leg_height > 0.0);
    assert!(layout.table.y + layout.table_height + layout.leg_height <= layout.ground_y);

    // Captions hang below their figures, centered.
    assert_eq!(layout.person_label.x, layout.person.x);
    assert!(layout.person_label.y > layout.person.y);
    assert_eq!(layout.table_label.x, layout.table.x + layout.table_width / 2.0);
    assert!(layout.table_label.y > layout.table.y + layout.table_height + layout.leg_height);
    assert!(layout.table_label.y <= layout.height);
}

#[test]
fn speech_path_runs_from_person_to_table() {
    let layout = Layout::compute(VIEW_WIDTH, VIEW_HEIGHT);
    let path = layout.speech_path;

    assert_eq!(path.p0, tabletalk::diagram::Point::new(98.0, 108.0));
    assert_eq!(path.p2, tabletalk::diagram::Point::new(366.0, 123.0));
    assert_eq!(path.p1, tabletalk::diagram::Point::new(232.0, 76.0));

    // Start near the person, end at the table's left edge, arcing above both.
    assert!(path.p0.x > layout.person.x);
    assert!(path.p2.x < layout.table.x);
    assert!(path.p1.y < path.p0.y);
    assert!(path.p1.y < path.p2.y);

    // The whole arc stays inside the viewBox.
    for i in 0..=20 {
        let p = path.point_at(f64::from(i) / 20.0);
        assert!(p.x >= 0.0 && p.x <= layout.width, "x out of bounds at step {}", i);
        assert!(p.y >= 0.0 && p.y <= layout.height, "y out of bounds at step {}", i);
    }
}
