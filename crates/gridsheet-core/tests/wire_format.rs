//! JSON shape of cells, ids and tasks
//!
//! Run with: cargo test --features serde

#![cfg(feature = "serde")]

use gridsheet_core::{make_id, Cell, CellId, CellValue, ItemId, Sheet, Task};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_number_cell_shape() {
    let cell = Cell::at(1, 3, 2.5);
    assert_eq!(
        serde_json::to_value(&cell).unwrap(),
        json!({ "id": [1, 3], "value": { "type": "NUMBER", "value": 2.5 } })
    );
}

#[test]
fn test_value_variants_decode() {
    let decode = |v: serde_json::Value| serde_json::from_value::<CellValue>(v).unwrap();

    assert_eq!(
        decode(json!({ "type": "NUMBER", "value": 7 })),
        CellValue::Number(7.0)
    );
    assert_eq!(
        decode(json!({ "type": "STRING", "value": "hi" })),
        CellValue::string("hi")
    );
    assert_eq!(
        decode(json!({ "type": "BOOLEAN", "value": true })),
        CellValue::Boolean(true)
    );
    assert_eq!(
        decode(json!({ "type": "REFERENCE", "value": { "column": 2, "row": 5 } })),
        CellValue::Reference { column: 2, row: 5 }
    );
    assert_eq!(decode(json!({ "type": "EMPTY" })), CellValue::Empty);
}

#[test]
fn test_unknown_type_rejected() {
    let result = serde_json::from_value::<CellValue>(json!({ "type": "FORMULA", "value": "=1" }));
    assert!(result.is_err());
}

#[test]
fn test_grid_decodes_into_sheet() {
    let rows: Vec<serde_json::Value> = (0..10)
        .map(|row| {
            let cells: Vec<serde_json::Value> = (0..5)
                .map(|col| json!({ "id": [row, col], "value": { "type": "NUMBER", "value": row * col } }))
                .collect();
            serde_json::Value::Array(cells)
        })
        .collect();

    let grid: Vec<Vec<Cell>> = serde_json::from_value(serde_json::Value::Array(rows)).unwrap();
    assert_eq!(grid[2][4].id, CellId::new(2, 4));

    let sheet = Sheet::new(grid).unwrap();
    assert_eq!(sheet.width(), 5);
    assert_eq!(sheet.height(), 10);
    assert_eq!(sheet.get_average(3).unwrap(), 27.0);
}

#[test]
fn test_item_id_is_a_string() {
    let id = make_id();
    let encoded = serde_json::to_value(id).unwrap();
    assert_eq!(encoded, json!(id.to_string()));
    assert_eq!(serde_json::from_value::<ItemId>(encoded).unwrap(), id);
    assert!(serde_json::from_value::<ItemId>(json!("not-hex")).is_err());
}

#[test]
fn test_task_shape() {
    let task = Task::new(42, "write a blog post");
    assert_eq!(
        serde_json::to_value(&task).unwrap(),
        json!({ "id": 42, "description": "write a blog post", "done": false })
    );
}
