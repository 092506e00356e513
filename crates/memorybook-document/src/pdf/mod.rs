// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — builtin font metrics, page canvas, album writing, and reading
// back generated files.

pub mod canvas;
pub mod metrics;
pub mod reader;
pub mod writer;

pub use metrics::BuiltinFontMetrics;
pub use reader::PdfReader;
pub use writer::AlbumWriter;
