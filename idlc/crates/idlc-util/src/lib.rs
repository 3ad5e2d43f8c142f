//! idlc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Shared foundation for the idlc front end. Every phase that reports a
//! problem to the user needs two things: a way to point at the offending
//! source text, and a way to collect messages without aborting.
//!
//! - [`span`] - byte ranges with 1-based line/column information, plus the
//!   [`SourceMap`] that owns loaded IDL files and renders locations.
//! - [`diagnostic`] - errors, warnings and notes, the fluent
//!   [`DiagnosticBuilder`], and the [`Handler`] that collects them.
//! - [`error`] - error types for the utilities themselves.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. CHEAP VALUES
//!    `Span`, `FileId` and `DiagnosticCode` are `Copy` so they can be
//!    stored in every token without bookkeeping.
//!
//! 2. COLLECT, DON'T ABORT
//!    Front-end phases keep going after a problem; the caller decides
//!    when enough errors have been seen.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};

// Fast hashing for small keys such as token kinds
pub use rustc_hash::FxHashSet;

static_assertions::assert_impl_all!(Span: Copy, Send, Sync);
static_assertions::assert_impl_all!(FileId: Copy, Send, Sync);
static_assertions::assert_impl_all!(DiagnosticCode: Copy, Send, Sync);
