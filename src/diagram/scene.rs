//! The narrow surface the cycle controller is allowed to touch.

use super::curve::Point;

/// Visual mutations of the assembled diagram. The SVG scene implements this
/// against live DOM nodes; tests implement it with a recording double.
pub trait Scene {
    /// Text inside the speech capsule.
    fn set_phrase(&mut self, text: &str);
    /// Capsule position along the speech path.
    fn set_position(&mut self, p: Point);
    /// Storage-table "responding" highlight on the surface and compartment dot.
    fn set_highlight(&mut self, on: bool);
    /// Voice-wave strokes next to the person's head.
    fn set_voice_waves(&mut self, visible: bool);
}
