use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, warn};
use zebra_zpl_printer::{
    peek_serial, print_labels, render_preview, ControlCategory, LabelRequest, SettingsEdit,
    SettingsRecord, SettingsStore, TcpPrinter,
};

pub fn open_store(path: Option<PathBuf>) -> Result<SettingsStore> {
    let store = match path {
        Some(path) => SettingsStore::new(path),
        None => SettingsStore::default_location().context("cannot locate the settings file")?,
    };
    if !store.exists() {
        warn!(
            path = %store.path().display(),
            "no settings file yet, run `spx-label setup` to configure the printer"
        );
    }
    Ok(store)
}

pub fn print(store: &SettingsStore, control: &str, name: String, copies: &str) -> Result<ExitCode> {
    let control: ControlCategory = control.parse()?;
    let request = LabelRequest::new(control, name, copies)?;

    let report = print_labels(store, &mut TcpPrinter, &request)
        .context("print batch aborted")?;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(()) => println!("copy {}  Nr. {}  sent", outcome.copy, outcome.serial),
            Err(e) => println!("copy {}  Nr. {}  FAILED: {}", outcome.copy, outcome.serial, e),
        }
    }
    println!(
        "{} of {} label(s) sent to {}:{}",
        report.printed(),
        report.outcomes.len(),
        report.host,
        report.port
    );

    if report.all_printed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

pub fn preview(store: &SettingsStore, control: &str, name: String) -> Result<ExitCode> {
    let control: ControlCategory = control.parse()?;
    let request = LabelRequest::new(control, name, "1")?;
    let now = Local::now().naive_local();
    println!("{}", render_preview(&store.load(), &request, now));
    Ok(ExitCode::SUCCESS)
}

pub fn show_settings(store: &SettingsStore) -> Result<ExitCode> {
    let record = store.load();
    let edit = SettingsEdit::from_record(&record);
    println!("settings file:       {}", store.path().display());
    println!("ip:                  {}", edit.ip);
    println!("port:                {}", edit.port);
    println!("company_name:        {}", edit.company_name);
    println!("ra:                  {}", edit.ra);
    println!("control:             {}", edit.control);
    println!("label_number:        {}", label_number(&record));
    println!("next serial:         {}", peek_serial(&record));
    Ok(ExitCode::SUCCESS)
}

fn label_number(record: &SettingsRecord) -> &str {
    record.label_number.as_deref().unwrap_or("(not set)")
}

/// Fields given on the command line; `None` keeps the current value.
pub struct Changes {
    pub ip: Option<String>,
    pub port: Option<String>,
    pub company_name: Option<String>,
    pub ra: Option<String>,
    pub control: Option<String>,
}

pub fn edit_settings(store: &SettingsStore, changes: Changes) -> Result<ExitCode> {
    let mut edit = SettingsEdit::from_record(&store.load());
    if let Some(ip) = changes.ip {
        edit.ip = ip;
    }
    if let Some(port) = changes.port {
        edit.port = port;
    }
    if let Some(company_name) = changes.company_name {
        edit.company_name = company_name;
    }
    if let Some(ra) = changes.ra {
        edit.ra = ra;
    }
    if let Some(control) = changes.control {
        edit.control = control;
    }
    save_edit(store, edit)
}

pub fn setup(
    store: &SettingsStore,
    ip: String,
    port: String,
    company_name: String,
    ra: String,
    control: String,
) -> Result<ExitCode> {
    save_edit(
        store,
        SettingsEdit {
            ip,
            port,
            company_name,
            ra,
            control,
        },
    )
}

fn save_edit(store: &SettingsStore, edit: SettingsEdit) -> Result<ExitCode> {
    // reject a bad port here rather than at the next print
    SettingsRecord {
        port: Some(edit.port.clone()),
        ..Default::default()
    }
    .port_number()?;

    store
        .apply_edit(edit)
        .with_context(|| format!("settings not saved to {}", store.path().display()))?;
    info!(path = %store.path().display(), "settings updated");
    Ok(ExitCode::SUCCESS)
}

pub fn list_controls() -> Result<ExitCode> {
    for control in ControlCategory::ALL {
        println!("{}", control);
    }
    Ok(ExitCode::SUCCESS)
}
