//! Enrollment and transcript display formatting

use crate::models::Enrollment;
use crate::services::TranscriptReport;
use crate::storage::RecordStore;

/// Format enrollments as a numbered table
///
/// The `#` column is the position `grade` accepts. Student names are looked
/// up in `store`.
pub fn format_enrollment_list(enrollments: &[(usize, &Enrollment)], store: &RecordStore) -> String {
    if enrollments.is_empty() {
        return "No enrollments found.".to_string();
    }

    let student_of = |e: &Enrollment| {
        store
            .student(e.student())
            .map_or_else(|| format!("#{}", e.student()), |s| s.full_name().to_string())
    };

    let name_width = enrollments
        .iter()
        .map(|&(_, e)| student_of(e).len())
        .max()
        .unwrap_or(7)
        .max(7);
    let code_width = enrollments
        .iter()
        .map(|(_, e)| e.course().as_str().len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<name_width$}  {:<code_width$}  {:<8}  {:<5}  {}\n",
        "#",
        "Student",
        "Course",
        "Semester",
        "Grade",
        "Enrolled",
        name_width = name_width,
        code_width = code_width,
    ));
    output.push_str(&format!(
        "{:->3}  {:-<name_width$}  {:-<code_width$}  {:-<8}  {:-<5}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        code_width = code_width,
    ));

    for &(position, enrollment) in enrollments {
        output.push_str(&format!(
            "{:>3}  {:<name_width$}  {:<code_width$}  {:<8}  {:<5}  {}\n",
            position,
            student_of(enrollment),
            enrollment.course(),
            enrollment.semester(),
            enrollment.grade().map_or("-", |g| g.name()),
            enrollment.enrolled_on(),
            name_width = name_width,
            code_width = code_width,
        ));
    }

    output
}

/// Format a student's transcript with GPA
pub fn format_transcript(report: &TranscriptReport) -> String {
    let student = &report.student;
    let mut output = String::new();

    output.push_str(&format!(
        "Transcript: {} (ID {}, {})\n",
        student.full_name(),
        student.id(),
        student.email()
    ));

    if report.rows.is_empty() {
        output.push_str("\nNo enrollments.\n");
        output.push_str(&format!("GPA: {:.2}\n", report.gpa));
        return output;
    }

    let title_width = report
        .rows
        .iter()
        .map(|r| r.title.len())
        .max()
        .unwrap_or(5)
        .max(5);
    let code_width = report
        .rows
        .iter()
        .map(|r| r.enrollment.course().as_str().len())
        .max()
        .unwrap_or(6)
        .max(6);

    output.push('\n');
    output.push_str(&format!(
        "{:<8}  {:<code_width$}  {:<title_width$}  {:>7}  {:<5}  {:>6}\n",
        "Semester",
        "Course",
        "Title",
        "Credits",
        "Grade",
        "Points",
        code_width = code_width,
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:-<8}  {:-<code_width$}  {:-<title_width$}  {:->7}  {:-<5}  {:->6}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        code_width = code_width,
        title_width = title_width,
    ));

    for row in &report.rows {
        let grade = row.enrollment.grade();
        output.push_str(&format!(
            "{:<8}  {:<code_width$}  {:<title_width$}  {:>7}  {:<5}  {:>6}\n",
            row.enrollment.semester(),
            row.enrollment.course(),
            row.title,
            row.credits,
            grade.map_or("-", |g| g.name()),
            grade.map_or_else(|| "-".to_string(), |g| g.points().to_string()),
            code_width = code_width,
            title_width = title_width,
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "Credits: {} attempted, {} graded\n",
        report.attempted_credits, report.graded_credits
    ));
    output.push_str(&format!("GPA: {:.2}\n", report.gpa));
    output
}
