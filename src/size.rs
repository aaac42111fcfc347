//! Human-readable byte sizes for media info panes.

const DECIMAL_UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];
const BINARY_UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

fn readable(bytes: i64, base: f64, units: &[&str; 5]) -> String {
    if bytes <= 0 {
        return "0".to_string();
    }
    let group = (((bytes as f64).log10() / base.log10()) as usize).min(units.len() - 1);
    let value = bytes as f64 / base.powi(group as i32);
    // At most one fractional digit, trailing ".0" dropped.
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0} {}", units[group])
    } else {
        format!("{rounded:.1} {}", units[group])
    }
}

/// Formats a byte count with decimal units (kB, MB, ...), as used for
/// stream bitrates and sizes.
pub fn readable_size(bytes: i64) -> String {
    readable(bytes, 1000.0, &DECIMAL_UNITS)
}

/// Formats a byte count with binary units (KiB, MiB, ...), as used for
/// file sizes.
pub fn readable_file_size(bytes: i64) -> String {
    readable(bytes, 1024.0, &BINARY_UNITS)
}
