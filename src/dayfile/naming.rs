use chrono::Local;

/// Working extension for managed source files. Everything the tool creates or
/// archives carries this extension; the dated-name pattern below is anchored to it.
pub const WORKING_EXT: &str = "cpp";
const DOTTED_EXT: &str = ".cpp";

const DATE_LEN: usize = 8;
const SERIAL_LEN: usize = 3;

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Format a managed file name as `{date}-{serial:03}.cpp`.
///
/// Serials above 999 render with four digits and fall outside the dated-name
/// pattern; callers keep the serial within three digits (a workspace would need a
/// thousand same-day files to hit this).
pub fn encode(date: &str, serial: u32) -> String {
    format!("{date}-{serial:03}{DOTTED_EXT}")
}

/// Return the 8-digit date prefix iff `name` matches the full dated pattern
/// `YYYYMMDD-NNN.cpp`, anchored at both ends. The date is not validated against a
/// real calendar.
pub fn decode_date(name: &str) -> Option<&str> {
    let stem = name.strip_suffix(DOTTED_EXT)?;
    let (date, rest) = stem.split_at_checked(DATE_LEN)?;
    let serial = rest.strip_prefix('-')?;
    if is_digits(date, DATE_LEN) && is_digits(serial, SERIAL_LEN) {
        Some(date)
    } else {
        None
    }
}

/// Parse the serial out of `name` iff it matches `{date_prefix}-NNN.cpp` exactly.
pub fn extract_serial(name: &str, date_prefix: &str) -> Option<u32> {
    let stem = name.strip_suffix(DOTTED_EXT)?;
    let serial = stem.strip_prefix(date_prefix)?.strip_prefix('-')?;
    if !is_digits(serial, SERIAL_LEN) {
        return None;
    }
    serial.parse().ok()
}

/// Archive-candidate filter: the extension matches the working extension,
/// case-insensitively. Dated and undated names both qualify.
pub fn is_candidate_name(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(WORKING_EXT))
}

/// Today's local date as an 8-digit `YYYYMMDD` stamp.
pub fn today_stamp() -> String {
    Local::now().format("%Y%m%d").to_string()
}
