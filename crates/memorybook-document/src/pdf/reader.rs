// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF reader — inspect generated albums using the `lopdf` crate.

use std::path::Path;

use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object};
use memorybook_core::error::MemoryBookError;
use tracing::{debug, info, instrument};

/// Read-only view of an existing PDF, used to check generated albums.
pub struct PdfReader {
    /// The underlying lopdf document.
    document: Document,
}

impl PdfReader {
    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, MemoryBookError> {
        let path_ref = path.as_ref();
        info!("Opening PDF: {}", path_ref.display());

        let document = Document::load(path_ref).map_err(|err| {
            MemoryBookError::PdfError(format!("failed to open {}: {}", path_ref.display(), err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded");

        Ok(Self { document })
    }

    /// Create a reader from raw PDF bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, MemoryBookError> {
        let document = Document::load_mem(data).map_err(|err| {
            MemoryBookError::PdfError(format!("failed to load PDF from memory: {}", err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");

        Ok(Self { document })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Number of embedded raster images.
    pub fn image_count(&self) -> usize {
        self.images().count()
    }

    /// Pixel `(width, height)` of each embedded raster image.
    pub fn image_sizes(&self) -> Vec<(i64, i64)> {
        self.images()
            .filter_map(|dict| {
                let width = dict.get(b"Width").and_then(Object::as_i64).ok()?;
                let height = dict.get(b"Height").and_then(Object::as_i64).ok()?;
                Some((width, height))
            })
            .collect()
    }

    /// Raw string operands of every text-showing operator (`Tj`, `TJ`) on
    /// page `number` (1-based), in content-stream order. Bytes are returned
    /// as written, before any font encoding is applied.
    pub fn page_text(&self, number: u32) -> Result<Vec<Vec<u8>>, MemoryBookError> {
        let page_id = *self
            .document
            .get_pages()
            .get(&number)
            .ok_or_else(|| MemoryBookError::PdfError(format!("no page {number}")))?;
        let data = self
            .document
            .get_page_content(page_id)
            .map_err(|err| MemoryBookError::PdfError(format!("page {number} content: {err}")))?;
        let content = Content::decode(&data)
            .map_err(|err| MemoryBookError::PdfError(format!("page {number} content: {err}")))?;

        let mut runs = Vec::new();
        for operation in &content.operations {
            match operation.operator.as_str() {
                "Tj" | "'" | "\"" => runs.extend(operation.operands.iter().filter_map(string_bytes)),
                "TJ" => {
                    for operand in &operation.operands {
                        if let Object::Array(items) = operand {
                            runs.extend(items.iter().filter_map(string_bytes));
                        }
                    }
                }
                _ => {}
            }
        }
        Ok(runs)
    }

    fn images(&self) -> impl Iterator<Item = &Dictionary> {
        self.document.objects.values().filter_map(|object| match object {
            Object::Stream(stream)
                if stream
                    .dict
                    .get(b"Subtype")
                    .and_then(Object::as_name)
                    .is_ok_and(|name| name == b"Image") =>
            {
                Some(&stream.dict)
            }
            _ => None,
        })
    }
}

fn string_bytes(object: &Object) -> Option<Vec<u8>> {
    match object {
        Object::String(bytes, _) => Some(bytes.clone()),
        _ => None,
    }
}
