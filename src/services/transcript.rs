//! Transcripts and GPA
//!
//! GPA is credit-weighted: each graded enrollment contributes its grade
//! points times its course credits, divided by the graded credits. Ungraded
//! enrollments are left out of both sums.

use serde::Serialize;

use super::EnrollmentEngine;
use crate::models::{Enrollment, Student, StudentId};

/// One transcript line with the course details filled in
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptRow {
    pub enrollment: Enrollment,
    pub title: String,
    pub credits: u32,
}

/// A student's full transcript, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptReport {
    pub student: Student,
    pub rows: Vec<TranscriptRow>,
    pub gpa: f64,
    /// Credits across every enrollment
    pub attempted_credits: u32,
    /// Credits across graded enrollments only
    pub graded_credits: u32,
}

impl EnrollmentEngine {
    /// All of a student's enrollments, ordered by semester then course code
    ///
    /// An unknown student yields an empty transcript.
    pub fn transcript(&self, student_id: StudentId) -> Vec<Enrollment> {
        let mut rows: Vec<Enrollment> = self
            .store
            .enrollments()
            .iter()
            .filter(|e| e.student() == student_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            a.semester()
                .cmp(&b.semester())
                .then_with(|| a.course().cmp(b.course()))
        });
        rows
    }

    /// Credit-weighted GPA over graded enrollments, 0.0 when nothing is graded
    pub fn compute_gpa(&self, student_id: StudentId) -> f64 {
        let (weighted, credits) = self
            .transcript(student_id)
            .iter()
            .filter_map(|e| {
                let grade = e.grade()?;
                let credits = self.store.course_by_code(e.course().as_str())?.credits();
                Some((grade.points() * credits, credits))
            })
            .fold((0u32, 0u32), |(w, c), (pw, pc)| (w + pw, c + pc));

        if credits == 0 {
            0.0
        } else {
            f64::from(weighted) / f64::from(credits)
        }
    }

    /// Transcript with course titles, credit totals and GPA
    ///
    /// Returns `None` for an unknown student.
    pub fn transcript_report(&self, student_id: StudentId) -> Option<TranscriptReport> {
        let student = self.store.student(student_id)?.clone();

        let rows: Vec<TranscriptRow> = self
            .transcript(student_id)
            .into_iter()
            .map(|enrollment| {
                let (title, credits) = self
                    .store
                    .course_by_code(enrollment.course().as_str())
                    .map(|c| (c.title().to_string(), c.credits()))
                    .unwrap_or_default();
                TranscriptRow {
                    enrollment,
                    title,
                    credits,
                }
            })
            .collect();

        let attempted_credits = rows.iter().map(|r| r.credits).sum();
        let graded_credits = rows
            .iter()
            .filter(|r| r.enrollment.is_graded())
            .map(|r| r.credits)
            .sum();

        Some(TranscriptReport {
            student,
            gpa: self.compute_gpa(student_id),
            rows,
            attempted_credits,
            graded_credits,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Settings;
    use crate::models::{Grade, Semester, StudentId};
    use crate::services::EnrollmentEngine;
    use crate::storage::EnrollmentRef;

    #[test]
    fn test_single_a_in_four_credit_course() {
        let mut engine = EnrollmentEngine::new(Settings::default());
        let ann = engine.register_student("Ann Lee").unwrap();
        assert_eq!(ann.id().value(), 1);
        assert_eq!(ann.email(), "annlee@mail.com");

        engine.register_course("CS101", "Intro", Some(4)).unwrap();
        engine.enroll(ann.id(), &"CS101".into(), Semester::Fall).unwrap();
        assert!(engine.record_grade_named(&EnrollmentRef::Position(1), "A"));

        assert_eq!(engine.compute_gpa(ann.id()), 9.0);
    }

    #[test]
    fn test_gpa_is_zero_without_grades() {
        let mut engine = EnrollmentEngine::new(Settings::default());
        let ann = engine.register_student("Ann Lee").unwrap().id();
        engine.register_course("CS101", "Intro", Some(4)).unwrap();

        assert_eq!(engine.compute_gpa(ann), 0.0);
        engine.enroll(ann, &"CS101".into(), Semester::Fall).unwrap();
        assert_eq!(engine.compute_gpa(ann), 0.0);
        assert_eq!(engine.compute_gpa(StudentId::new(42).unwrap()), 0.0);
    }

    #[test]
    fn test_gpa_is_credit_weighted() {
        let mut engine = EnrollmentEngine::new(Settings::default());
        let ann = engine.register_student("Ann Lee").unwrap().id();
        engine.register_course("CS101", "Intro", Some(4)).unwrap();
        engine.register_course("MA101", "Calculus", Some(1)).unwrap();
        engine.register_course("PH101", "Mechanics", Some(3)).unwrap();
        engine.enroll(ann, &"CS101".into(), Semester::Fall).unwrap();
        engine.enroll(ann, &"MA101".into(), Semester::Fall).unwrap();
        engine.enroll(ann, &"PH101".into(), Semester::Fall).unwrap();

        engine.record_grade(&EnrollmentRef::Position(1), Grade::S);
        engine.record_grade(&EnrollmentRef::Position(2), Grade::F);

        // (10*4 + 0*1) / 5; the ungraded course is ignored
        assert_eq!(engine.compute_gpa(ann), 8.0);
    }

    #[test]
    fn test_transcript_order() {
        let mut engine = EnrollmentEngine::new(Settings::default());
        let ann = engine.register_student("Ann Lee").unwrap().id();
        let bo = engine.register_student("Bo Chen").unwrap().id();
        for code in ["MA101", "CS201", "CS101"] {
            engine.register_course(code, "Course", None).unwrap();
        }
        engine.enroll(ann, &"MA101".into(), Semester::Fall).unwrap();
        engine.enroll(ann, &"CS201".into(), Semester::Spring).unwrap();
        engine.enroll(bo, &"CS101".into(), Semester::Spring).unwrap();
        engine.enroll(ann, &"CS101".into(), Semester::Fall).unwrap();
        engine.enroll(ann, &"MA101".into(), Semester::Summer).unwrap();

        let order: Vec<_> = engine
            .transcript(ann)
            .iter()
            .map(|e| format!("{}:{}", e.semester(), e.course()))
            .collect();
        assert_eq!(
            order,
            vec!["SPRING:CS201", "SUMMER:MA101", "FALL:CS101", "FALL:MA101"]
        );

        // Repeated calls agree
        assert_eq!(engine.transcript(ann), engine.transcript(ann));
        assert!(engine.transcript(StudentId::new(99).unwrap()).is_empty());
    }

    #[test]
    fn test_transcript_report() {
        let mut engine = EnrollmentEngine::new(Settings::default());
        let ann = engine.register_student("Ann Lee").unwrap().id();
        engine.register_course("CS101", "Intro", Some(4)).unwrap();
        engine.register_course("MA101", "Calculus", Some(2)).unwrap();
        engine.enroll(ann, &"CS101".into(), Semester::Fall).unwrap();
        engine.enroll(ann, &"MA101".into(), Semester::Fall).unwrap();
        engine.record_grade(&EnrollmentRef::Position(1), Grade::B);

        let report = engine.transcript_report(ann).unwrap();
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].title, "Intro");
        assert_eq!(report.attempted_credits, 6);
        assert_eq!(report.graded_credits, 4);
        assert_eq!(report.gpa, 8.0);

        assert!(engine.transcript_report(StudentId::new(7).unwrap()).is_none());
    }
}
