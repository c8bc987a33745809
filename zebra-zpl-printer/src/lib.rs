//! Self-contained ZPL label printing for Zebra network printers.
//! - Persists printer settings and the label counter in one JSON file
//! - Allocates a fresh 6-digit serial per physical label (wraps at 999999)
//! - Renders the fixed SPX inspection label layout
//! - Sends each copy over its own raw TCP connection

pub mod builder;
pub mod consts;
pub mod control;
pub mod error;
pub mod job;
pub mod printer;
pub mod serial;
pub mod settings;
pub mod zpl;

pub use builder::{build_label, format_timestamp};
pub use control::ControlCategory;
pub use error::{LabelError, LabelResult, SettingsError};
pub use job::{print_batch, print_labels, render_preview, BatchReport, CopyOutcome, LabelRequest};
pub use printer::{send_raw_to_printer, PrinterTransport, TcpPrinter};
pub use serial::{advance, peek_serial};
pub use settings::{SettingsEdit, SettingsRecord, SettingsStore};
