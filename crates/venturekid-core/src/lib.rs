//! # VentureKid Core Library
//!
//! This library provides the core business logic for VentureKid, an
//! entrepreneurship education product for children. It implements a
//! CLI-first philosophy where all operations are available via a
//! standalone CLI binary, with web and desktop front ends being thin
//! presentation layers over the same core library.
//!
//! ## Architecture
//!
//! - **Form subsystem**: caller-driven wizard state machines for the
//!   Enrollment and Career Guide popups, gated by a pure step validator
//! - **Scoring**: pure functions from completed answers to the guide
//!   result (venture score, aptitude score, careers, narrative)
//! - **Progress**: course catalog plus completion set, reduced to a
//!   percentage and a next-lesson pointer
//! - **Storage**: SQLite lead/completion log and TOML-based config
//! - **Backend**: write-only lead sink over the hosted service
//!
//! ## Key Components
//!
//! - [`FormSession`]: wizard state machine
//! - [`scoring::score`]: the guide scoring engine
//! - [`ProgressTracker`]: completion tracking against the catalog
//! - [`AppContext`]: explicitly-passed application context

pub mod backend;
pub mod catalog;
pub mod charts;
pub mod context;
pub mod error;
pub mod events;
pub mod form;
pub mod progress;
pub mod scoring;
pub mod stats;
pub mod storage;

pub use backend::{HostedBackendClient, LeadAck, LeadRecord, LeadSink, MemorySink};
pub use catalog::{CatalogSource, ContentKind, CourseCatalog, Lesson, Section};
pub use context::AppContext;
pub use error::{
    CatalogError, ConfigError, CoreError, DatabaseError, SubmissionError, ValidationError,
};
pub use events::Event;
pub use form::{FieldMap, FieldValue, FlowKind, FormFlow, FormSession, Stage};
pub use progress::{CompletionSet, ProgressSnapshot, ProgressTracker};
pub use scoring::{GuideResult, ScoringInput, TraitRatings};
pub use stats::DashboardStats;
pub use storage::{Config, Database};
