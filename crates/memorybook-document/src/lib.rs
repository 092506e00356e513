// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// memorybook-document — Album assembly for Memory Book.
//
// Decodes photos, plans each page with the layout engine (title, names,
// captions, fitted photo frames), draws the pages with `printpdf`, and reads
// generated PDFs back with `lopdf`.

pub mod album;
pub mod pdf;
pub mod photo;
pub mod plan;

// Re-export the primary structs so callers can use `memorybook_document::AlbumWriter` etc.
pub use album::{Album, AlbumEntry};
pub use pdf::{AlbumWriter, BuiltinFontMetrics, PdfReader};
pub use photo::Photo;
pub use plan::{PagePlan, PagePlanner};
