//! WebAssembly bindings for gridsheet
//!
//! Exposes `fib`, `Task`, `Sheet` and `make_id` to JavaScript. Grids are passed
//! in as plain JS arrays of `{ id: [row, col], value: { type, value } }` objects.

use wasm_bindgen::prelude::*;

use gridsheet_core::{Cell, Error as CoreError, Sheet as CoreSheet, Task as CoreTask};

// =============================================================================
// Error Conversion
// =============================================================================

/// Turn a core error into a JS `Error` whose `name` tells the failure kind apart
fn to_js_error(e: CoreError) -> JsValue {
    let err = js_sys::Error::new(&e.to_string());
    err.set_name(e.kind().as_str());
    err.into()
}

fn decode_error(e: serde_wasm_bindgen::Error) -> JsValue {
    let err = js_sys::Error::new(&format!("Invalid grid: {}", e));
    err.set_name("DecodeError");
    err.into()
}

// =============================================================================
// Sequence and ids
// =============================================================================

/// n-th term of the sequence 1, 1, 2, 3, 5, 8, ...
#[wasm_bindgen]
pub fn fib(n: u32) -> Result<u32, JsValue> {
    gridsheet_core::checked_fib(n)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| js_sys::RangeError::new(&format!("fib({}) does not fit in u32", n)).into())
}

/// Fresh random identifier as lowercase hex
#[wasm_bindgen]
pub fn make_id() -> String {
    gridsheet_core::make_id().to_string()
}

// =============================================================================
// Task - JavaScript wrapper
// =============================================================================

#[wasm_bindgen(inspectable)]
pub struct Task {
    inner: CoreTask,
}

#[wasm_bindgen]
impl Task {
    #[wasm_bindgen(constructor)]
    pub fn new(id: u32, description: String) -> Self {
        Self {
            inner: CoreTask::new(id, description),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn id(&self) -> u32 {
        self.inner.id
    }

    #[wasm_bindgen(getter)]
    pub fn description(&self) -> String {
        self.inner.description.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn done(&self) -> bool {
        self.inner.done
    }

    /// Copy of this task marked as done
    pub fn complete(&self) -> Task {
        Task {
            inner: self.inner.clone().complete(),
        }
    }
}

// =============================================================================
// Sheet - JavaScript wrapper
// =============================================================================

#[wasm_bindgen]
pub struct Sheet {
    inner: CoreSheet,
}

#[wasm_bindgen]
impl Sheet {
    /// Build a sheet from a nested array of cells
    #[wasm_bindgen(constructor)]
    pub fn new(grid: JsValue) -> Result<Sheet, JsValue> {
        let rows: Vec<Vec<Cell>> = serde_wasm_bindgen::from_value(grid).map_err(decode_error)?;
        let inner = CoreSheet::new(rows).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize {
        self.inner.height()
    }

    pub fn get_average(&self, column: i32) -> Result<f64, JsValue> {
        self.inner.get_average(column).map_err(to_js_error)
    }

    pub fn column_mean(&self, column: i32) -> Result<f64, JsValue> {
        self.inner.column_mean(column).map_err(to_js_error)
    }

    /// Cells of one column in the same shape the constructor accepts
    pub fn get_column(&self, column: i32) -> Result<JsValue, JsValue> {
        let cells = self.inner.get_column(column).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&cells).map_err(|e| JsError::new(&e.to_string()).into())
    }
}
