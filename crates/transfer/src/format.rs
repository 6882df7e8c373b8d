const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Formats a byte count the way the explorer lists show it.
///
/// `>= 1 MiB` renders as `"x.xx MB"`, `>= 1 KiB` as `"x.xx KB"`, anything
/// smaller as `"n bytes"`.
pub fn format_file_size(size: u64) -> String {
    if size >= MIB {
        format!("{:.2} MB", size as f64 / MIB as f64)
    } else if size >= KIB {
        format!("{:.2} KB", size as f64 / KIB as f64)
    } else {
        format!("{size} bytes")
    }
}

/// Size badge rendered next to an entity name: `"(1.50 KB)"`.
pub fn size_badge(size: u64) -> String {
    format!("({})", format_file_size(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_below_one_kib() {
        assert_eq!(format_file_size(0), "0 bytes");
        assert_eq!(format_file_size(1023), "1023 bytes");
    }

    #[test]
    fn kib_range() {
        assert_eq!(format_file_size(1024), "1.00 KB");
        assert_eq!(format_file_size(1536), "1.50 KB");
    }

    #[test]
    fn mib_range() {
        assert_eq!(format_file_size(MIB), "1.00 MB");
        assert_eq!(format_file_size(2 * MIB + MIB / 4), "2.25 MB");
    }

    #[test]
    fn badge_wraps_in_parens() {
        assert_eq!(size_badge(512), "(512 bytes)");
    }
}
