//! Course display formatting

use crate::models::Course;
use crate::storage::RecordStore;

/// Format courses as a numbered table
///
/// The `#` column is the 1-based position that commands accept in place of
/// a course code. Instructor names are looked up in `store`.
pub fn format_course_list(courses: &[&Course], store: &RecordStore) -> String {
    if courses.is_empty() {
        return "No courses found.".to_string();
    }

    let position_of = |course: &Course| {
        store
            .courses()
            .iter()
            .position(|c| c.code() == course.code())
            .map_or_else(|| "-".to_string(), |p| (p + 1).to_string())
    };
    let instructor_of = |course: &Course| {
        course
            .instructor()
            .and_then(|id| store.instructor(id))
            .map_or_else(|| "-".to_string(), |i| i.full_name().to_string())
    };

    let code_width = courses
        .iter()
        .map(|c| c.code().as_str().len())
        .max()
        .unwrap_or(4)
        .max(4);
    let title_width = courses
        .iter()
        .map(|c| c.title().len())
        .max()
        .unwrap_or(5)
        .max(5);
    let instructor_width = courses
        .iter()
        .map(|c| instructor_of(*c).len())
        .max()
        .unwrap_or(10)
        .max(10);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<code_width$}  {:<title_width$}  {:>7}  {:<instructor_width$}  {}\n",
        "#",
        "Code",
        "Title",
        "Credits",
        "Instructor",
        "Department",
        code_width = code_width,
        title_width = title_width,
        instructor_width = instructor_width,
    ));
    output.push_str(&format!(
        "{:->3}  {:-<code_width$}  {:-<title_width$}  {:->7}  {:-<instructor_width$}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        code_width = code_width,
        title_width = title_width,
        instructor_width = instructor_width,
    ));

    for course in courses {
        output.push_str(&format!(
            "{:>3}  {:<code_width$}  {:<title_width$}  {:>7}  {:<instructor_width$}  {}\n",
            position_of(*course),
            course.code(),
            course.title(),
            course.credits(),
            instructor_of(*course),
            course.department(),
            code_width = code_width,
            title_width = title_width,
            instructor_width = instructor_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::EnrollmentEngine;

    #[test]
    fn test_course_list_shows_positions_and_instructor() {
        let mut engine = EnrollmentEngine::new(Settings::default());
        engine.register_course("CS101", "Intro", Some(4)).unwrap();
        engine.register_course("MA101", "Calculus", None).unwrap();
        let raj = engine.register_instructor("Raj Patel", "Math").unwrap();
        engine.assign_instructor(raj.id(), &"MA101".into());

        let matches = engine.search_courses_by_code("MA");
        let output = format_course_list(&matches, engine.store());
        let row = output.lines().nth(2).unwrap();
        assert!(row.trim_start().starts_with("2  MA101"));
        assert!(row.contains("Raj Patel"));
        assert!(!output.contains("CS101"));
    }

    #[test]
    fn test_empty_course_list() {
        assert_eq!(
            format_course_list(&[], &RecordStore::new()),
            "No courses found."
        );
    }
}
