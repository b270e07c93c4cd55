use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ccrm(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ccrm").unwrap();
    cmd.env("CCRM_DATA_DIR", dir).env_remove("RUST_LOG");
    cmd
}

fn seed(dir: &Path) {
    ccrm(dir).args(["student", "add", "Ann Lee"]).assert().success();
    ccrm(dir)
        .args(["course", "add", "CS101", "Intro", "--credits", "4"])
        .assert()
        .success();
}

#[test]
fn test_register_enroll_grade_transcript() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    ccrm(dir)
        .args(["student", "add", "Ann Lee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID 1, annlee@mail.com"));
    ccrm(dir)
        .args(["course", "add", "CS101", "Intro", "--credits", "4"])
        .assert()
        .success();
    ccrm(dir)
        .args(["enroll", "1", "cs101", "fall"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 of 21 credits"));
    ccrm(dir).args(["grade", "A", "--number", "1"]).assert().success();

    ccrm(dir)
        .args(["transcript", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GPA: 9.00"));

    assert_eq!(
        fs::read_to_string(dir.join("data/enrollments.csv")).unwrap(),
        "1,CS101,FALL,A\n"
    );
    assert_eq!(
        fs::read_to_string(dir.join("data/students.csv")).unwrap(),
        "1,Ann Lee,annlee@mail.com\n"
    );
}

#[test]
fn test_duplicate_enrollment_fails() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    ccrm(temp.path()).args(["enroll", "1", "CS101", "FALL"]).assert().success();
    ccrm(temp.path())
        .args(["enroll", "1", "1", "FALL"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already enrolled"));
}

#[test]
fn test_credit_limit_fails_and_leaves_files_unchanged() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    seed(dir);
    for code in ["CS102", "CS103", "CS104"] {
        ccrm(dir)
            .args(["course", "add", code, "Course", "--credits", "6"])
            .assert()
            .success();
    }
    for code in ["CS101", "CS102", "CS103"] {
        ccrm(dir).args(["enroll", "1", code, "SPRING"]).assert().success();
    }
    let before = fs::read_to_string(dir.join("data/enrollments.csv")).unwrap();

    // 16 + 6 > 21
    ccrm(dir)
        .args(["enroll", "1", "CS104", "SPRING"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the limit of 21"));

    assert_eq!(fs::read_to_string(dir.join("data/enrollments.csv")).unwrap(), before);
}

#[test]
fn test_unknown_student_is_rejected() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    ccrm(temp.path())
        .args(["enroll", "7", "CS101", "FALL"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown student ID 7"));
    ccrm(temp.path())
        .args(["enroll", "1", "CS101", "WINTER"])
        .assert()
        .failure();
}

#[test]
fn test_import_reports_skipped_lines() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("incoming.csv");
    fs::write(&input, "CS101,Intro,4\nBAD,Line\nMA101,Calculus,9\nMA102,Algebra,3\n").unwrap();

    ccrm(temp.path())
        .args(["import", "courses"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 courses loaded, 2 line(s) skipped"))
        .stdout(predicate::str::contains("line 2"));

    ccrm(temp.path())
        .args(["course", "search", "ma"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MA102"))
        .stdout(predicate::str::contains("CS101").not());
}

#[test]
fn test_export_json() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    ccrm(temp.path())
        .args(["export", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"student_count\": 1"))
        .stdout(predicate::str::contains("\"email\": \"annlee@mail.com\""));
}

#[test]
fn test_backup_create_list_and_size() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    ccrm(temp.path())
        .args(["backup", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backup_"));
    ccrm(temp.path())
        .args(["backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 1 backup(s)"));

    let measured = temp.path().join("measured");
    fs::create_dir_all(measured.join("inner")).unwrap();
    fs::write(measured.join("a.csv"), "0123456789").unwrap();
    fs::write(measured.join("inner/b.csv"), "01234567890123456789").unwrap();
    ccrm(temp.path())
        .args(["backup", "size"])
        .arg(&measured)
        .assert()
        .success()
        .stdout("30\n");
}

#[test]
fn test_assign_instructor() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    ccrm(temp.path())
        .args(["instructor", "add", "Raj Patel", "--department", "Physics"])
        .assert()
        .success();
    ccrm(temp.path()).args(["course", "assign", "1", "CS101"]).assert().success();
    ccrm(temp.path())
        .args(["course", "assign", "2", "CS101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Instructor not found"));
    ccrm(temp.path())
        .args(["course", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Raj Patel"));
}

#[test]
fn test_course_details_persist_between_runs() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    seed(dir);
    ccrm(dir)
        .args(["instructor", "add", "Raj Patel", "--department", "Physics"])
        .assert()
        .success();
    ccrm(dir)
        .args(["course", "add", "PH101", "Mechanics", "--department", "Physics"])
        .assert()
        .success();

    // Positions from `course list`
    ccrm(dir).args(["course", "assign", "1", "2"]).assert().success();

    assert_eq!(
        fs::read_to_string(dir.join("data/courses.csv")).unwrap(),
        "CS101,Intro,4\nPH101,Mechanics,3\n"
    );
    ccrm(dir)
        .args(["course", "search", "PH"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Raj Patel"))
        .stdout(predicate::str::contains("Physics"));
}

#[test]
fn test_enroll_by_position_and_grade_by_lower_case_code() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    seed(dir);

    ccrm(dir)
        .args(["enroll", "1", "1", "FALL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("in CS101"));
    ccrm(dir)
        .args(["grade", "B", "--student", "1", "--course", "cs101", "--semester", "fall"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.join("data/enrollments.csv")).unwrap(),
        "1,CS101,FALL,B\n"
    );
}
