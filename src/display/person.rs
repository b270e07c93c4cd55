//! Student and instructor display formatting

use crate::models::{Instructor, Student};

/// Format students as a table
pub fn format_student_list(students: &[Student]) -> String {
    if students.is_empty() {
        return "No students found.".to_string();
    }

    let name_width = students
        .iter()
        .map(|s| s.full_name().len())
        .max()
        .unwrap_or(4)
        .max(4);
    let email_width = students
        .iter()
        .map(|s| s.email().len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<name_width$}  {:<email_width$}  {:>7}  {}\n",
        "ID",
        "Name",
        "Email",
        "Courses",
        "Status",
        name_width = name_width,
        email_width = email_width,
    ));
    output.push_str(&format!(
        "{:->4}  {:-<name_width$}  {:-<email_width$}  {:->7}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        email_width = email_width,
    ));

    for student in students {
        output.push_str(&format!(
            "{:>4}  {:<name_width$}  {:<email_width$}  {:>7}  {}\n",
            student.id(),
            student.full_name(),
            student.email(),
            student.enrolled_courses().len(),
            status(student.is_active()),
            name_width = name_width,
            email_width = email_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} student(s)\n", students.len()));
    output
}

/// Format a single student's details
pub fn format_student_details(student: &Student) -> String {
    let mut output = String::new();

    output.push_str(&format!("Student: {}\n", student.full_name()));
    output.push_str(&format!("  ID:         {}\n", student.id()));
    output.push_str(&format!("  Email:      {}\n", student.email()));
    output.push_str(&format!("  Registered: {}\n", student.created_on()));
    output.push_str(&format!("  Status:     {}\n", status(student.is_active())));

    if student.enrolled_courses().is_empty() {
        output.push_str("  Courses:    (none)\n");
    } else {
        let codes: Vec<&str> = student
            .enrolled_courses()
            .iter()
            .map(|c| c.as_str())
            .collect();
        output.push_str(&format!("  Courses:    {}\n", codes.join(", ")));
    }

    output
}

/// Format instructors as a table
pub fn format_instructor_list(instructors: &[Instructor]) -> String {
    if instructors.is_empty() {
        return "No instructors found.".to_string();
    }

    let name_width = instructors
        .iter()
        .map(|i| i.full_name().len())
        .max()
        .unwrap_or(4)
        .max(4);
    let email_width = instructors
        .iter()
        .map(|i| i.email().len())
        .max()
        .unwrap_or(5)
        .max(5);
    let dept_width = instructors
        .iter()
        .map(|i| i.department().len())
        .max()
        .unwrap_or(10)
        .max(10);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<name_width$}  {:<email_width$}  {:<dept_width$}  {}\n",
        "ID",
        "Name",
        "Email",
        "Department",
        "Status",
        name_width = name_width,
        email_width = email_width,
        dept_width = dept_width,
    ));
    output.push_str(&format!(
        "{:->4}  {:-<name_width$}  {:-<email_width$}  {:-<dept_width$}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        email_width = email_width,
        dept_width = dept_width,
    ));

    for instructor in instructors {
        output.push_str(&format!(
            "{:>4}  {:<name_width$}  {:<email_width$}  {:<dept_width$}  {}\n",
            instructor.id(),
            instructor.full_name(),
            instructor.email(),
            instructor.department(),
            status(instructor.is_active()),
            name_width = name_width,
            email_width = email_width,
            dept_width = dept_width,
        ));
    }

    output
}

fn status(active: bool) -> &'static str {
    if active {
        "Active"
    } else {
        "Inactive"
    }
}
