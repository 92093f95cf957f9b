//! WASM binding tests
//!
//! Run with: wasm-pack test --node

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

use gridsheet_wasm::*;

// =============================================================================
// Helpers
// =============================================================================

fn number_cell(row: u32, col: u32, value: f64) -> JsValue {
    let id = js_sys::Array::of2(&JsValue::from(row), &JsValue::from(col));

    let inner = js_sys::Object::new();
    js_sys::Reflect::set(&inner, &"type".into(), &"NUMBER".into()).unwrap();
    js_sys::Reflect::set(&inner, &"value".into(), &JsValue::from_f64(value)).unwrap();

    let cell = js_sys::Object::new();
    js_sys::Reflect::set(&cell, &"id".into(), &id).unwrap();
    js_sys::Reflect::set(&cell, &"value".into(), &inner).unwrap();
    cell.into()
}

fn product_grid(height: u32, width: u32) -> JsValue {
    let rows = js_sys::Array::new();
    for row in 0..height {
        let cells = js_sys::Array::new();
        for col in 0..width {
            cells.push(&number_cell(row, col, (row * col) as f64));
        }
        rows.push(&cells);
    }
    rows.into()
}

fn error_name(err: JsValue) -> String {
    err.dyn_into::<js_sys::Error>()
        .map(|e| String::from(e.name()))
        .unwrap_or_default()
}

// =============================================================================
// Primitive Tests
// =============================================================================

#[wasm_bindgen_test]
fn test_fib() {
    assert_eq!(fib(5).unwrap(), 8);
    assert_eq!(fib(0).unwrap(), 1);
    assert!(fib(60).is_err());
}

#[wasm_bindgen_test]
fn test_task() {
    let task = Task::new(42, "write a blog post".to_string());
    assert_eq!(task.id(), 42);
    assert_eq!(task.description(), "write a blog post");
    assert!(!task.done());
    assert!(task.complete().done());
}

#[wasm_bindgen_test]
fn test_make_id_is_hex() {
    let a = make_id();
    let b = make_id();
    assert!(a.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')));
    assert_ne!(a, b);
}

// =============================================================================
// Sheet Tests
// =============================================================================

#[wasm_bindgen_test]
fn test_sheet_from_js_grid() {
    let sheet = Sheet::new(product_grid(10, 5)).unwrap();
    assert_eq!(sheet.width(), 5);
    assert_eq!(sheet.height(), 10);
    assert_eq!(sheet.get_average(3).unwrap(), 27.0);
    assert_eq!(sheet.column_mean(3).unwrap(), 13.5);
}

#[wasm_bindgen_test]
fn test_sheet_index_error() {
    let sheet = Sheet::new(product_grid(2, 2)).unwrap();
    assert_eq!(error_name(sheet.get_average(2).unwrap_err()), "IndexError");
    assert_eq!(error_name(sheet.get_average(-1).unwrap_err()), "IndexError");
}

#[wasm_bindgen_test]
fn test_sheet_shape_error() {
    let rows = js_sys::Array::new();
    rows.push(&js_sys::Array::of2(&number_cell(0, 0, 1.0), &number_cell(0, 1, 2.0)));
    rows.push(&js_sys::Array::of1(&number_cell(1, 0, 3.0)));

    let err = Sheet::new(rows.into()).err().unwrap();
    assert_eq!(error_name(err), "ShapeError");
}

#[wasm_bindgen_test]
fn test_sheet_decode_error() {
    let err = Sheet::new(JsValue::from_str("not a grid")).err().unwrap();
    assert_eq!(error_name(err), "DecodeError");
}

#[wasm_bindgen_test]
fn test_get_column() {
    let sheet = Sheet::new(product_grid(3, 2)).unwrap();
    let column: js_sys::Array = sheet.get_column(1).unwrap().dyn_into().unwrap();
    assert_eq!(column.length(), 3);

    let cell = column.get(2);
    let value = js_sys::Reflect::get(&cell, &"value".into()).unwrap();
    let number = js_sys::Reflect::get(&value, &"value".into()).unwrap();
    assert_eq!(number.as_f64(), Some(2.0));
}
