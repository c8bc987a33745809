// ======== ZPL helpers (LF-terminated text lines) ========

/// Append one command line. Lines are `\n`-terminated; callers close the
/// document themselves since `^XZ` carries no terminator.
pub fn zpl_line(buf: &mut String, s: &str) {
    buf.push_str(s);
    buf.push('\n');
}

/// Append a command followed by `pad` spaces and a `; note` annotation.
/// The printer ignores the annotation text.
pub fn zpl_annotated(buf: &mut String, cmd: &str, pad: usize, note: &str) {
    buf.push_str(cmd);
    buf.extend(std::iter::repeat(' ').take(pad));
    buf.push_str("; ");
    buf.push_str(note);
    buf.push('\n');
}

/// `^GB` graphic box at (x, y). A zero width draws a vertical line.
pub fn graphic_box(
    buf: &mut String,
    x: u32, y: u32, w: u32, h: u32, thickness: u32,
    pad: usize, note: &str,
) {
    let cmd = format!("^FO{},{}^GB{},{},{}^FS", x, y, w, h, thickness);
    zpl_annotated(buf, &cmd, pad, note);
}

/// Text field block: scalable font 0 at `font` dots, origin, then data.
/// `data` is written verbatim; ZPL control characters are not escaped.
pub fn text_field(
    buf: &mut String,
    font: u32, x: u32, y: u32, data: &str,
    pad: usize, note: &str,
) {
    zpl_line(buf, &format!("^CF0,{},{}", font, font));
    zpl_line(buf, &format!("^FO{},{}", x, y));
    zpl_annotated(buf, &format!("^FD{}^FS", data), pad, note);
}
