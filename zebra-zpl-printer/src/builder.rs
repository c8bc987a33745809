use chrono::NaiveDateTime;

use crate::consts::*;
use crate::zpl::{graphic_box, text_field, zpl_line};

/// Timestamp text shared by every copy of a batch, e.g. `16OCT26 14:05`.
pub fn format_timestamp(now: &NaiveDateTime) -> String {
    now.format(TIMESTAMP_FORMAT).to_string().to_uppercase()
}

/// Build the ZPL document for one SPX inspection label (730x173 dots frame).
/// - top row: company name (left cell) and RA code (right cell)
/// - middle: control description and the selected category in large type
/// - bottom row: date/time, name and serial separated by vertical dividers
///
/// Every argument is substituted verbatim; a `^` or `~` inside `name` or
/// `company_name` ends up as a ZPL command. Field lengths are not checked
/// against the printable area.
pub fn build_label(
    company_name: &str,
    ra: &str,
    control: &str,
    timestamp: &str,
    name: &str,
    serial: &str,
    selected_control: &str,
) -> String {
    let mut buf = String::with_capacity(1536);
    zpl_line(&mut buf, "^XA");
    zpl_line(&mut buf, &format!("{}^CI28", INDENT)); // UTF-8 field data
    zpl_line(&mut buf, &format!("{}^FO{},{}", INDENT, FRAME_X, FRAME_Y));

    for (w, h, pad, note) in FRAME_BOXES {
        graphic_box(&mut buf, FRAME_X, FRAME_Y, w, h, LINE_THICKNESS, pad, note);
    }
    for (x, note) in DIVIDERS {
        graphic_box(&mut buf, x, DIVIDER_Y, 0, DIVIDER_H, LINE_THICKNESS, DIVIDER_PAD, note);
    }

    text_field(&mut buf, 20, 15, ROW_Y, "Date&Time", 4, "Datum a čas");
    text_field(&mut buf, 20, 115, ROW_Y, timestamp, 4, "Datum a čas");
    text_field(&mut buf, 50, 250, 100, selected_control, 19, "SPX BY XRY");
    text_field(&mut buf, 30, 100, 15, company_name, 17, "Název společnosti");
    text_field(&mut buf, 30, 30, 50, control, 13, "Bezpečnostní kontrola");
    text_field(&mut buf, 30, 450, 15, ra, 16, "Kód");
    text_field(&mut buf, 20, 255, ROW_Y, "NAME", 15, "Jméno");
    text_field(&mut buf, 25, 365, ROW_Y, name, 15, "Jméno");
    text_field(&mut buf, 20, 575, ROW_Y, "Nr.", 19, "Číslo");
    text_field(&mut buf, 20, 650, ROW_Y, serial, 19, "Číslo");

    zpl_line(&mut buf, "");
    buf.push_str(INDENT);
    buf.push_str("^XZ");
    buf
}
