// Label layout and printer defaults

// Settings file, relative to the home directory
pub const SETTINGS_DIR: &str = "Documents";
pub const SETTINGS_FILE: &str = "app_settings.json";

pub const DEFAULT_IP: &str = "192.168.1.1";
pub const DEFAULT_PORT: u16 = 9100;

// Largest batch accepted from the form
pub const MAX_COPIES: u32 = 9_999;

// Serial counter
pub const SERIAL_SEED: u32 = 117_823;
pub const SERIAL_MODULUS: u32 = 1_000_000;
pub const SERIAL_WIDTH: usize = 6;

// strftime pattern, upper-cased after formatting (16OCT26 14:05)
pub const TIMESTAMP_FORMAT: &str = "%d%b%y %H:%M";

// Frame: every box starts at the label origin
pub const FRAME_X: u32 = 10;
pub const FRAME_Y: u32 = 10;
pub const LINE_THICKNESS: u32 = 3;

/// (width, height, padding before note, note)
pub const FRAME_BOXES: [(u32, u32, usize, &str); 5] = [
    (730, 173, 8, "Vnější rámeček"),
    (365, 35, 10, "Horní levá buňka"),
    (730, 35, 10, "Horní pravá buňka"),
    (730, 70, 10, "Střední buňka"),
    (730, 140, 9, "Spodní rámeček"),
];

// Bottom row dividers
pub const DIVIDER_Y: u32 = 150;
pub const DIVIDER_H: u32 = 30;
pub const DIVIDER_PAD: usize = 12;

/// (column, note)
pub const DIVIDERS: [(u32, &str); 5] = [
    (105, "První vertikální čára"),
    (245, "Druhá vertikální čára"),
    (310, "Třetí vertikální čára"),
    (545, "Čtvrtá vertikální čára"),
    (625, "Pátá vertikální čára"),
];

// Bottom row baseline
pub const ROW_Y: u32 = 155;

// Leading whitespace of the indented commands in the deployed template
pub const INDENT: &str = "        ";
