//! Fixed scene coordinates, all derived from the viewBox size.

use super::curve::{Point, QuadBezier};

/// viewBox width in SVG user units.
pub const VIEW_WIDTH: f64 = 560.0;
/// viewBox height in SVG user units.
pub const VIEW_HEIGHT: f64 = 220.0;

/// Every fixed coordinate of the diagram. Person on the left, storage table
/// on the right and slightly lower, speech path arcing between them.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    /// Torso anchor of the person figure; head, limbs and label hang off it.
    pub person: Point,
    /// Top-left corner of the table surface.
    pub table: Point,
    pub table_width: f64,
    pub table_height: f64,
    pub leg_width: f64,
    pub leg_height: f64,
    pub ground_y: f64,
    pub ground_x0: f64,
    pub ground_x1: f64,
    /// Arc the speech capsule travels, mouth-ish to table edge.
    pub speech_path: QuadBezier,
    pub capsule_width: f64,
    pub capsule_height: f64,
    /// Caption anchors (text-anchor middle), under each figure.
    pub person_label: Point,
    pub table_label: Point,
}

impl Layout {
    pub fn compute(width: f64, height: f64) -> Self {
        let person = Point::new(70.0, height / 2.0 + 10.0);
        let table = Point::new(380.0, height / 2.0 + 8.0);
        let table_width = 150.0;
        let table_height = 10.0;
        let leg_height = 32.0;

        let start = Point::new(person.x + 28.0, person.y - 12.0);
        let end = Point::new(table.x - 14.0, table.y + table_height / 2.0);
        let control = Point::new((start.x + end.x) / 2.0, start.y - 32.0);

        Self {
            width,
            height,
            person,
            table,
            table_width,
            table_height,
            leg_width: 10.0,
            leg_height,
            ground_y: person.y + 40.0,
            ground_x0: 60.0,
            ground_x1: width - 40.0,
            speech_path: QuadBezier::new(start, control, end),
            capsule_width: 160.0,
            capsule_height: 24.0,
            person_label: Point::new(person.x, person.y + 52.0),
            table_label: Point::new(
                table.x + table_width / 2.0,
                table.y + table_height + leg_height + 18.0,
            ),
        }
    }
}
