// Browser smoke tests for the wasm entry points; native `cargo test` skips
// this file entirely. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn mount_without_container_is_a_silent_no_op() {
    // The harness page carries no .diagram-container; setup must degrade to
    // nothing instead of erroring.
    assert!(tabletalk::start_diagram().is_ok());
}

#[wasm_bindgen_test]
fn mount_builds_the_svg_inside_the_container() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let host = doc.create_element("div").unwrap();
    host.set_attribute("class", "diagram-host").unwrap();
    doc.document_element().unwrap().append_child(&host).unwrap();

    tabletalk::start_diagram_in(".diagram-host").unwrap();

    let svg = host.query_selector("svg").unwrap();
    assert!(svg.is_some(), "expected an svg inside the mounted container");
}
