//! Tabletalk core crate.
//!
//! Renders the landing-page explainer diagram: a stylised person makes a short
//! spoken request ("Where are my keys?"), a speech capsule glides along an arc
//! toward the storage table, and the table briefly lights up its compartment
//! strip in reply. Purely decorative, with no data and no network. The host
//! page provides a `.diagram-container` element plus CSS for the `diagram-*`
//! class hooks and calls [`start_diagram`] once the DOM is ready.

use wasm_bindgen::prelude::*;

pub mod diagram;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

// -----------------------------------------------------------------------------
// Phrase dataset
// The speech capsule rotates through these requests; index 0 doubles as the
// reduced-motion fallback text.
// -----------------------------------------------------------------------------

pub const REQUEST_PHRASES: &[&str] = &[
    "Where are my keys?",
    "Where did I put my headphones?",
    "I need scissors.",
    "Find my glasses.",
    "Something to cut paper.",
    "My USB-C cable.",
];

/// Phrase shown when the environment prefers reduced motion.
pub const STATIC_PHRASE: &str = "Where are my keys?";

/// Assistive-technology description of the diagram, independent of animation
/// state.
pub const DIAGRAM_DESCRIPTION: &str =
    "User making a short spoken request to storage furniture which selects a compartment.";

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Mount the diagram into the first `.diagram-container` on the page.
///
/// A missing container is not an error: the diagram is decoration and must
/// never block the page, so setup silently does nothing in that case.
#[wasm_bindgen]
pub fn start_diagram() -> Result<(), JsValue> {
    diagram::mount(diagram::CONTAINER_SELECTOR)
}

/// Like [`start_diagram`], but with a caller-chosen container selector so a
/// page can host several independent diagrams.
#[wasm_bindgen]
pub fn start_diagram_in(selector: &str) -> Result<(), JsValue> {
    diagram::mount(selector)
}
