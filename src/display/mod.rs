//! Display formatting for terminal output
//!
//! Renders records as aligned plain-text tables and detail views.

pub mod course;
pub mod enrollment;
pub mod person;

pub use course::format_course_list;
pub use enrollment::{format_enrollment_list, format_transcript};
pub use person::{format_instructor_list, format_student_details, format_student_list};

/// Human-readable byte count
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(30), "30 bytes");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
