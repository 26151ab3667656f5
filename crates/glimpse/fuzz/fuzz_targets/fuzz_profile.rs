//! Fuzz target for the profiling engine.
//!
//! Builds arbitrary row sets directly and checks that profiling never panics
//! and always respects the chart caps.

#![no_main]

use arbitrary::Arbitrary;
use glimpse::{FieldValue, Profiler, RowSet};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Cell {
    Missing,
    Number(f64),
    Bool(bool),
    Text(String),
}

impl From<Cell> for FieldValue {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Missing => FieldValue::Missing,
            Cell::Number(n) => FieldValue::Number(n),
            Cell::Bool(b) => FieldValue::Bool(b),
            Cell::Text(s) => FieldValue::from_text(s),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    width: u8,
    cells: Vec<Cell>,
}

fuzz_target!(|input: Input| {
    let width = usize::from(input.width % 8) + 1;
    let columns = (0..width).map(|i| format!("c{}", i)).collect();

    let mut cells: Vec<FieldValue> = input.cells.into_iter().map(Into::into).collect();
    cells.truncate(cells.len() - cells.len() % width);
    let rows = cells.chunks(width).map(|chunk| chunk.to_vec()).collect();

    let Ok(rows) = RowSet::new(columns, rows) else {
        return;
    };
    let report = Profiler::new().profile(&rows);

    assert!(report.charts.bar.len() <= 10);
    assert!(report.charts.pie.len() <= 5);
    assert!(report.charts.line.len() <= 20);
});
