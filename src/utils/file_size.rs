pub struct FileSizeUtils;

impl FileSizeUtils {
    /// Human readable size with one decimal, dropping a trailing `.0`.
    pub fn format_size(size: u64) -> String {
        const UNITS: [&str; 3] = ["B", "KB", "MB"];
        let mut size = size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        let rounded = (size * 10.0).round() / 10.0;
        if rounded.fract() == 0.0 {
            format!("{} {}", rounded as u64, UNITS[unit_index])
        } else {
            format!("{:.1} {}", rounded, UNITS[unit_index])
        }
    }
}
