// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Memory Book.

use thiserror::Error;

/// Top-level error type for all Memory Book operations.
#[derive(Debug, Error)]
pub enum MemoryBookError {
    // -- Layout errors --
    /// A numeric input to the layout or fit engine was non-positive or
    /// non-finite.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // -- Album errors --
    #[error("album has no photos")]
    EmptyAlbum,

    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("PDF operation failed: {0}")]
    PdfError(String),

    #[error("invalid album manifest: {0}")]
    Manifest(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MemoryBookError>;
