//! CCRM - Campus course and records manager
//!
//! This library provides the academic-records engine behind the `ccrm`
//! command: students, instructors, courses and the enrollments linking them,
//! with per-semester credit limits, grading, transcripts and credit-weighted
//! GPA. Records live in memory for a session and are flushed to flat,
//! comma-separated files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (students, instructors, courses, enrollments)
//! - `storage`: In-memory record store and atomic file writes
//! - `services`: Business rules (registration, enrollment, GPA)
//! - `interchange`: Flat-file and JSON encoding of the record set
//! - `backup`: Timestamped directory snapshots
//! - `cli`, `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use ccrm::config::Settings;
//! use ccrm::models::Semester;
//! use ccrm::services::EnrollmentEngine;
//!
//! let mut engine = EnrollmentEngine::new(Settings::default());
//! let ann = engine.register_student("Ann Lee")?;
//! engine.register_course("CS101", "Intro", Some(4))?;
//! engine.enroll(ann.id(), &"CS101".into(), Semester::Fall)?;
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod interchange;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{CcrmError, CcrmResult};
