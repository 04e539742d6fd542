//! Browser tests for the element builder.
//!
//! Run with `wasm-pack test --headless --firefox crates/dom-builder`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use dom_builder::{Builder, Visibility};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn builder() -> Builder {
    Builder::from_window().expect("document available in browser tests")
}

#[wasm_bindgen_test]
fn test_chain_sets_attributes() {
    let el = builder()
        .create("input")
        .unwrap()
        .id("amount")
        .name("amount")
        .input_type("text")
        .aria_label("amount")
        .placeholder("Enter calories")
        .data("kind", "gained")
        .build();

    assert_eq!(el.id(), "amount");
    assert_eq!(el.get_attribute("name").as_deref(), Some("amount"));
    assert_eq!(el.get_attribute("type").as_deref(), Some("text"));
    assert_eq!(el.get_attribute("aria-label").as_deref(), Some("amount"));
    assert_eq!(el.get_attribute("placeholder").as_deref(), Some("Enter calories"));
    assert_eq!(el.get_attribute("data-kind").as_deref(), Some("gained"));
}

#[wasm_bindgen_test]
fn test_classes_and_text() {
    let el = builder()
        .create("span")
        .unwrap()
        .text("gained 500 calories")
        .classes([" font-bold  text-gray-600", ""])
        .build();

    assert_eq!(el.text_content().as_deref(), Some("gained 500 calories"));
    assert_eq!(el.class_name(), "font-bold text-gray-600");
}

#[wasm_bindgen_test]
fn test_value_round_trip_on_input() {
    let input = builder().create("input").unwrap();
    input.set_value("120");
    assert_eq!(input.value(), "120");
    input.set_value("");
    assert_eq!(input.value(), "");
}

#[wasm_bindgen_test]
fn test_append_and_visibility() {
    let b = builder();
    let parent = b.create("div").unwrap().build();
    let child = b
        .create("p")
        .unwrap()
        .visible(Visibility::Hidden)
        .label_for("amount")
        .append_to(&parent)
        .build();

    assert_eq!(parent.child_element_count(), 1);
    assert_eq!(child.get_attribute("for").as_deref(), Some("amount"));
    let style = child.get_attribute("style").unwrap_or_default();
    assert!(style.contains("visibility: hidden"));
}

#[wasm_bindgen_test]
fn test_on_click_runs_handler() {
    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let button = builder()
        .create("button")
        .unwrap()
        .text("Add Gained Calories")
        .on_click(move |_| counter.set(counter.get() + 1))
        .build();

    let button: web_sys::HtmlElement = button.dyn_into().unwrap();
    button.click();
    button.click();
    assert_eq!(clicks.get(), 2);
}
