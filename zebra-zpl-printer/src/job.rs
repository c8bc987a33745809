//! One print action: settings load, then serial allocation, label build and
//! delivery once per copy.
//!
//! Copies are independent. A copy that fails to reach the printer is logged
//! and recorded in the [`BatchReport`]; the remaining copies are still sent.
//! Only a failure to persist the label counter stops the batch.

use chrono::{Local, NaiveDateTime};
use tracing::{debug, error, info};

use crate::builder::{build_label, format_timestamp};
use crate::consts::MAX_COPIES;
use crate::control::ControlCategory;
use crate::error::{LabelError, LabelResult};
use crate::printer::PrinterTransport;
use crate::serial::peek_serial;
use crate::settings::{SettingsRecord, SettingsStore};

/// What the operator asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRequest {
    pub control: ControlCategory,
    pub name: String,
    pub copies: u32,
}

impl LabelRequest {
    /// Build from raw form text. The copy count must be a whole number in
    /// `1..=MAX_COPIES`.
    pub fn new(control: ControlCategory, name: impl Into<String>, copies: &str) -> LabelResult<Self> {
        let copies = match copies.trim().parse::<u32>() {
            Ok(n) if (1..=MAX_COPIES).contains(&n) => n,
            _ => return Err(LabelError::InvalidCopies(copies.to_string())),
        };
        Ok(Self {
            control,
            name: name.into(),
            copies,
        })
    }
}

/// Result of one physical copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    /// 1-based position in the batch
    pub copy: u32,
    pub serial: String,
    pub result: Result<(), String>,
}

impl CopyOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub host: String,
    pub port: u16,
    pub timestamp: String,
    pub outcomes: Vec<CopyOutcome>,
    /// Settings as persisted after the last allocation
    pub settings: SettingsRecord,
}

impl BatchReport {
    pub fn printed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> Vec<&CopyOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok()).collect()
    }

    pub fn all_printed(&self) -> bool {
        self.outcomes.iter().all(CopyOutcome::is_ok)
    }
}

fn render(record: &SettingsRecord, request: &LabelRequest, timestamp: &str, serial: &str) -> String {
    build_label(
        record.company(),
        record.ra_code(),
        record.control_by(),
        timestamp,
        &request.name,
        serial,
        request.control.as_str(),
    )
}

/// Run a batch stamped with `now`. All copies share the timestamp; each gets
/// its own serial, persisted before the copy is sent.
pub fn print_batch<T: PrinterTransport + ?Sized>(
    store: &SettingsStore,
    transport: &mut T,
    request: &LabelRequest,
    now: NaiveDateTime,
) -> LabelResult<BatchReport> {
    let mut record = store.load();
    let host = record.host().to_string();
    let port = record.port_number()?;
    let timestamp = format_timestamp(&now);

    info!(
        copies = request.copies,
        control = %request.control,
        printer = %host,
        port,
        "starting print batch"
    );

    let mut outcomes = Vec::new();
    for copy in 1..=request.copies {
        let (serial, updated) = store.next_serial(record)?;
        record = updated;

        let zpl = render(&record, request, &timestamp, &serial);
        let result = transport.send(&host, port, &zpl).map_err(|e| {
            error!(copy, serial = %serial, error = %e, "failed to send label");
            e.to_string()
        });

        debug!(
            datetime = %timestamp,
            ip = %host,
            port,
            control = record.control_by(),
            copies = request.copies,
            label_number = %serial,
            ra = record.ra_code(),
            company = record.company(),
            name = %request.name,
            selected_control = %request.control,
            ok = result.is_ok(),
            "label processed"
        );

        outcomes.push(CopyOutcome { copy, serial, result });
    }

    let report = BatchReport {
        host,
        port,
        timestamp,
        outcomes,
        settings: record,
    };
    info!(
        printed = report.printed(),
        failed = report.outcomes.len() - report.printed(),
        "print batch finished"
    );
    Ok(report)
}

/// [`print_batch`] stamped with the local wall clock.
pub fn print_labels<T: PrinterTransport + ?Sized>(
    store: &SettingsStore,
    transport: &mut T,
    request: &LabelRequest,
) -> LabelResult<BatchReport> {
    print_batch(store, transport, request, Local::now().naive_local())
}

/// Document the next copy would carry. No serial is allocated and nothing is
/// sent.
pub fn render_preview(record: &SettingsRecord, request: &LabelRequest, now: NaiveDateTime) -> String {
    render(record, request, &format_timestamp(&now), &peek_serial(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    struct Refusing;

    impl PrinterTransport for Refusing {
        fn send(&mut self, _: &str, _: u16, _: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"))
        }
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_copy_is_not_logged_as_sent() {
        let tmp = TempDir::new().unwrap();
        let store = SettingsStore::new(tmp.path().join("app_settings.json"));
        let request = LabelRequest::new(ControlCategory::Kc, "A", "1").unwrap();

        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let report = tracing::subscriber::with_default(subscriber, || {
            print_labels(&store, &mut Refusing, &request).unwrap()
        });
        assert_eq!(report.printed(), 0);

        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("failed to send label"));
        assert!(text.contains("label processed"));
        assert!(text.contains("ok=false"));
        assert!(!text.contains("label sent"));
    }

    #[test]
    fn copies_text_is_validated() {
        let ok = LabelRequest::new(ControlCategory::Kc, "A", " 3 ").unwrap();
        assert_eq!(ok.copies, 3);
        let most = LabelRequest::new(ControlCategory::Kc, "A", "9999").unwrap();
        assert_eq!(most.copies, MAX_COPIES);

        for bad in ["0", "-1", "two", "", "1.5", "10000", "4294967295", "4294967296"] {
            let err = LabelRequest::new(ControlCategory::Kc, "A", bad).unwrap_err();
            assert!(matches!(err, LabelError::InvalidCopies(_)), "{bad}");
        }
    }

    #[test]
    fn report_counts_failures() {
        let report = BatchReport {
            host: "h".into(),
            port: 1,
            timestamp: "t".into(),
            outcomes: vec![
                CopyOutcome { copy: 1, serial: "000001".into(), result: Ok(()) },
                CopyOutcome { copy: 2, serial: "000002".into(), result: Err("refused".into()) },
            ],
            settings: SettingsRecord::default(),
        };
        assert_eq!(report.printed(), 1);
        assert_eq!(report.failed().len(), 1);
        assert_eq!(report.failed()[0].copy, 2);
        assert!(!report.all_printed());
    }
}
