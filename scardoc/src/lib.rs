pub mod error;
pub mod export;
pub mod model;
pub mod reader;
pub mod wrap;

pub use error::{ExportError, ReadError};
pub use export::{encode, export_container, write_scardoc, ExportSummary, WriteMode};
pub use model::{Argument, Constant, DocContainer, Entry, Function};
