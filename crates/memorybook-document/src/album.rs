// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Album contents: the framing text plus an ordered list of captioned photos.

use memorybook_core::AlbumDetails;

use crate::photo::Photo;

/// One photo page: the photo and its (possibly blank) caption.
#[derive(Debug, Clone)]
pub struct AlbumEntry {
    pub photo: Photo,
    pub caption: String,
}

/// Everything needed to render an album. Entry order is page order.
#[derive(Debug, Clone, Default)]
pub struct Album {
    pub details: AlbumDetails,
    pub entries: Vec<AlbumEntry>,
}

impl Album {
    pub fn new(details: AlbumDetails) -> Self {
        Self {
            details,
            entries: Vec::new(),
        }
    }

    /// Append a photo page.
    pub fn push(&mut self, photo: Photo, caption: impl Into<String>) {
        self.entries.push(AlbumEntry {
            photo,
            caption: caption.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a closing page will be added.
    pub fn has_closing_page(&self) -> bool {
        self.details
            .closing_message
            .as_deref()
            .is_some_and(|message| !message.trim().is_empty())
    }

    /// Total pages: cover, one per photo, and the optional closing page.
    pub fn page_count(&self) -> usize {
        1 + self.entries.len() + usize::from(self.has_closing_page())
    }
}
