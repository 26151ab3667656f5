//! Input decoding and the row set handed to the profiling engine.

mod json;
mod parser;
mod rows;
mod source;
mod value;

pub use json::{decode_json_rows, field_from_json};
pub use parser::{parse_delimiter, Parser, ParserConfig, DEFAULT_MAX_BYTES};
pub use rows::{Row, RowSet};
pub use source::SourceMetadata;
pub use value::FieldValue;
