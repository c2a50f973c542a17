//! # EDT View
//!
//! Session and view-model layer. Views hold explicit state and drive the
//! backend through the `ScheduleBackend` port: no hidden singletons, every
//! dependency injected at construction. Mutations follow the
//! fetch-then-reload policy: a successful write triggers a scoped re-fetch
//! of exactly the collection it affected, never an optimistic local edit.

/// Explicit session lifecycle (login, validation, logout)
pub mod session;

/// Role-based personal week view
pub mod personal;

/// Timetable editor view (class/semester selection, week grid, slot editor)
pub mod manager;

/// Notification polling with explicit teardown
pub mod poller;
