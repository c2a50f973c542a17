//! # EDT Core
//!
//! Domain logic for the EDT timetabling client. This crate is pure: it holds
//! the canonical course-slot model, the geometry of the weekly grid, the
//! normalization of backend records, week filtering, the role-based schedule
//! fetch policy and the slot edit workflow. It performs no I/O; the backend
//! API is consumed through `edt-client`.
//!
//! ## Architecture
//!
//! - **Models**: wire records as the backend emits them, plus the canonical
//!   `CourseSlot` every view consumes
//! - **Grid**: mapping of day/time pairs to positions on the fixed weekly grid
//! - **Normalize**: conversion of the three backend record shapes into
//!   canonical slots
//! - **Week**: per-week selection of non-cancelled slots
//! - **Policy**: which endpoint serves "my schedule" for a given role
//! - **Editor**: the slot create/edit state machine

/// Error taxonomy shared by every crate in the workspace
pub mod errors;
/// Wire and canonical data models
pub mod models;

/// Weekly grid geometry
pub mod grid;
/// Backend record normalization
pub mod normalize;
/// Week selection
pub mod week;
/// Role-based schedule fetch policy
pub mod policy;
/// Slot edit workflow state machine
pub mod editor;
