use tracing::debug;

use crate::consts::{SERIAL_MODULUS, SERIAL_SEED, SERIAL_WIDTH};
use crate::error::SettingsError;
use crate::settings::{SettingsRecord, SettingsStore};

/// Stored counter value; absent or non-numeric counts as the seed. Any
/// integer is accepted, including negative and out-of-range ones.
fn current(record: &SettingsRecord) -> i128 {
    record
        .label_number
        .as_deref()
        .and_then(|raw| raw.trim().parse::<i128>().ok())
        .unwrap_or(i128::from(SERIAL_SEED))
}

fn format_serial(value: i128) -> String {
    format!("{:0width$}", value, width = SERIAL_WIDTH)
}

/// Serial the next allocation will hand out. Nothing is mutated.
pub fn peek_serial(record: &SettingsRecord) -> String {
    let modulus = i128::from(SERIAL_MODULUS);
    // reduce before adding so i128::MAX cannot overflow
    format_serial((current(record).rem_euclid(modulus) + 1).rem_euclid(modulus))
}

/// Advance the counter: `(stored + 1) mod 1_000_000`, zero-padded to six
/// digits and written back into a copy of the record.
pub fn advance(record: &SettingsRecord) -> (String, SettingsRecord) {
    let serial = peek_serial(record);
    let mut updated = record.clone();
    updated.label_number = Some(serial.clone());
    (serial, updated)
}

impl SettingsStore {
    /// Allocate one serial and persist the whole record before returning it.
    ///
    /// Read-modify-write is not atomic across processes; two instances
    /// sharing a file can hand out the same serial.
    pub fn next_serial(
        &self,
        record: SettingsRecord,
    ) -> Result<(String, SettingsRecord), SettingsError> {
        let (serial, updated) = advance(&record);
        self.save(&updated)?;
        debug!(serial = %serial, "label serial allocated");
        Ok((serial, updated))
    }
}
