//! # Labdash - Lab instrument upload core
//!
//! Shared logic of the lab automation dashboard: which forms exist, what
//! they send, and how a plotting-server reply becomes a user-facing message.
//! The browser frontend and the `labdash` CLI are thin shells around it.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────┐   ┌────────────────┐   ┌─────────────┐   ┌──────────────┐
//! │ FormController │──▶│ payload::build │──▶│  Uploader   │──▶│ /<endpoint>  │
//! │ (Idle/Submit)  │   │  (validation)  │   │ (reqwest or │   │  plotting    │
//! └───────▲────────┘   └────────────────┘   │  gloo-net)  │   │  backend     │
//!         │ UploadConfig snapshot           └──────┬──────┘   └──────────────┘
//! ┌───────┴────────┐                               │
//! │ DashboardShell │◀──── RequestOutcome ──────────┘
//! └────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Defaults, fixed messages and [`UploadConfig`]
//! - [`endpoint`] - The fixed endpoint set
//! - [`models`] - Files, slots and text fields
//! - [`catalog`] - Static form declarations
//! - [`payload`] - Multipart payload construction
//! - [`outcome`] - Reply to outcome mapping
//! - [`client`] - The [`Uploader`] seam
//! - [`form`] - Per-form state machine
//! - [`dashboard`] - Session shell and page layout

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Declarations
pub mod catalog;
pub mod endpoint;

// Request contract
pub mod client;
pub mod outcome;
pub mod payload;

// State
pub mod dashboard;
pub mod form;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{UploadConfig, DEFAULT_BACKEND_URL};

pub use error::{FormError, RequestError, UnknownEndpoint, ValidationError};

pub use endpoint::Endpoint;

pub use models::{DataFile, FileSlot, TextField};

pub use catalog::{spec_for, FieldSpec, FormKind, FormSpec, SlotSpec, FORMS};

pub use payload::{build, Part, SubmissionPayload};

pub use outcome::RequestOutcome;

pub use client::{endpoint_url, Uploader};

pub use form::{FormController, FormState, Notice, SubmitAttempt};

pub use dashboard::{DashboardShell, Section, SectionLayout, SECTIONS};
