// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages.
//
// Every technical error is mapped to plain English with a clear suggestion.

use crate::error::MemoryBookError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user must change their input (add a photo, fix a file).
    ActionRequired,
    /// Something in the program or environment went wrong.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    pub severity: Severity,
}

/// Convert a `MemoryBookError` into a `HumanError`.
pub fn humanize_error(err: &MemoryBookError) -> HumanError {
    match err {
        MemoryBookError::EmptyAlbum => HumanError {
            message: "There are no photos in this memory book.".into(),
            suggestion: "Please add at least one photo, then try again.".into(),
            severity: Severity::ActionRequired,
        },

        MemoryBookError::ImageError(detail) => HumanError {
            message: "One of the photos couldn't be opened.".into(),
            suggestion: format!(
                "Make sure every photo is a JPEG or PNG file and isn't damaged. (Detail: {detail})"
            ),
            severity: Severity::ActionRequired,
        },

        MemoryBookError::Manifest(detail) => HumanError {
            message: "The album description is incomplete.".into(),
            suggestion: format!("Check the album file and fill in what's missing. (Detail: {detail})"),
            severity: Severity::ActionRequired,
        },

        MemoryBookError::Serialization(err) => HumanError {
            message: "The album file couldn't be read.".into(),
            suggestion: format!("Check that the file is valid JSON. (Detail: {err})"),
            severity: Severity::ActionRequired,
        },

        MemoryBookError::Io(err) if err.kind() == std::io::ErrorKind::NotFound => HumanError {
            message: "A file couldn't be found.".into(),
            suggestion: "Check that every photo path is spelled correctly.".into(),
            severity: Severity::ActionRequired,
        },

        MemoryBookError::Io(err) => HumanError {
            message: "A file couldn't be read or saved.".into(),
            suggestion: format!("Check that the folder exists and you can write to it. (Detail: {err})"),
            severity: Severity::Permanent,
        },

        MemoryBookError::InvalidArgument(detail) => HumanError {
            message: "The page layout couldn't be worked out.".into(),
            suggestion: format!("Check the sizes in your settings are positive numbers. (Detail: {detail})"),
            severity: Severity::ActionRequired,
        },

        MemoryBookError::PdfError(detail) => HumanError {
            message: "The PDF couldn't be created.".into(),
            suggestion: format!("Try again with fewer or smaller photos. (Detail: {detail})"),
            severity: Severity::Permanent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_album_is_action_required() {
        let human = humanize_error(&MemoryBookError::EmptyAlbum);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.suggestion.contains("at least one photo"));
    }

    #[test]
    fn missing_file_is_action_required() {
        let err = MemoryBookError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
    }

    #[test]
    fn permission_denied_is_permanent() {
        let err = MemoryBookError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Permanent);
    }

    #[test]
    fn image_error_keeps_detail() {
        let err = MemoryBookError::ImageError("bad header".into());
        let human = humanize_error(&err);
        assert!(human.suggestion.contains("bad header"));
    }
}
