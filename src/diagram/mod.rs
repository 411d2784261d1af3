//! Diagram mount, motion-preference gate, frame loop and teardown.
//!
//! All per-frame work happens in [`CycleController::tick`]; this module only
//! wires it to the browser: requestAnimationFrame timestamps in, scene
//! mutations out, plus a beforeunload hook that cancels the pending frame.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Window, window};

mod curve;
mod cycle;
mod layout;
mod phrases;
mod scene;
mod svg_scene;

pub use curve::{Point, QuadBezier, ease_in_out};
pub use cycle::{CycleConfig, CycleController, render_static_frame};
pub use layout::{Layout, VIEW_HEIGHT, VIEW_WIDTH};
pub use phrases::{PhraseSelector, no_repeat_index};
pub use scene::Scene;

use svg_scene::SvgScene;

/// Container the host page is expected to provide.
pub const CONTAINER_SELECTOR: &str = ".diagram-container";

/// Everything one mounted diagram owns. Behind an `Rc` so the frame and
/// teardown closures share it; each mount gets its own, so several diagrams
/// can coexist on one page.
struct DiagramState {
    scene: SvgScene,
    controller: CycleController,
    frame_id: Option<i32>,
    stopped: bool,
}

pub(crate) fn mount(selector: &str) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // The diagram is decoration: without its container, do nothing at all.
    let Some(container) = doc.query_selector(selector)? else {
        log::debug!("diagram container {selector:?} missing, skipping setup");
        return Ok(());
    };

    let layout = Layout::compute(VIEW_WIDTH, VIEW_HEIGHT);
    let mut scene = SvgScene::build(&doc, &container, &layout)?;

    if prefers_reduced_motion(&win) {
        // One deterministic frame: no frame callbacks, no deadlines, ever.
        render_static_frame(&mut scene, &layout.speech_path);
        log::debug!("reduced motion preferred, rendered static diagram");
        return Ok(());
    }

    let now = now_ms(&win);
    let phrases = PhraseSelector::new(crate::REQUEST_PHRASES, now as u64);
    let mut controller = CycleController::new(layout.speech_path, CycleConfig::default(), phrases);
    controller.begin(now, &mut scene);

    let state = Rc::new(RefCell::new(DiagramState {
        scene,
        controller,
        frame_id: None,
        stopped: false,
    }));
    start_frame_loop(&win, state.clone());
    install_teardown(&win, state)?;
    log::debug!("diagram mounted in {selector:?}");
    Ok(())
}

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop(win: &Window, state: Rc<RefCell<DiagramState>>) {
    let f: FrameClosure = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_state = state.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let mut st = frame_state.borrow_mut();
        if st.stopped {
            return;
        }
        let DiagramState {
            scene, controller, ..
        } = &mut *st;
        controller.tick(ts, scene);
        st.frame_id = window().and_then(|w| {
            w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
                .ok()
        });
    }) as Box<dyn FnMut(f64)>));
    let first = win
        .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        .ok();
    state.borrow_mut().frame_id = first;
}

fn install_teardown(win: &Window, state: Rc<RefCell<DiagramState>>) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        let mut st = state.borrow_mut();
        st.stopped = true;
        if let Some(id) = st.frame_id.take() {
            if let Some(w) = window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        log::debug!("page unloading, cancelled pending frame");
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn prefers_reduced_motion(win: &Window) -> bool {
    win.match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

fn now_ms(win: &Window) -> f64 {
    win.performance().map(|p| p.now()).unwrap_or(0.0)
}
