// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Album writer — render a memory book to PDF using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`. Page geometry comes from the `PagePlanner`; this
// module only chooses colours and stacking order.

use std::path::Path;

use memorybook_core::error::{MemoryBookError, Result};
use memorybook_core::{AlbumConfig, RgbColor};
use memorybook_layout::Rect;
use printpdf::{PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, RawImage, RawImageData, RawImageFormat};
use tracing::{debug, info, instrument, warn};

use super::canvas::PageCanvas;
use super::metrics::BuiltinFontMetrics;
use crate::album::{Album, AlbumEntry};
use crate::plan::{ClosingPlan, CoverPlan, Dot, PagePlanner, PhotoPagePlan};

/// Corner radius of the cover's name box and photo caption boxes.
const BOX_RADIUS: f64 = 8.0;
const FRAME_RADIUS: f64 = 5.0;
const SHADOW_RADIUS: f64 = 3.0;
const BOX_OUTLINE: f64 = 1.0;
const CAPTION_OUTLINE: f64 = 1.2;

/// Renders [`Album`]s to PDF bytes.
pub struct AlbumWriter {
    config: AlbumConfig,
}

impl AlbumWriter {
    pub fn new(config: AlbumConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlbumConfig {
        &self.config
    }

    /// Render the album: cover, one page per photo in order, and the closing
    /// page when the album has a closing message.
    #[instrument(skip_all, fields(photos = album.len()))]
    pub fn render(&self, album: &Album) -> Result<Vec<u8>> {
        if album.is_empty() {
            return Err(MemoryBookError::EmptyAlbum);
        }

        let title = if album.details.title.trim().is_empty() {
            self.config.document_title.as_str()
        } else {
            album.details.title.as_str()
        };
        info!(paper = ?self.config.paper_size, title, "Creating album PDF");

        let metrics = BuiltinFontMetrics;
        let planner = PagePlanner::new(&self.config, &metrics);
        let mut doc = PdfDocument::new(title);
        let mut pages: Vec<PdfPage> = Vec::with_capacity(album.page_count());

        pages.push(self.draw_cover(&planner.cover(&album.details)?));

        for (index, entry) in album.entries.iter().enumerate() {
            let plan = planner.photo_page(index, entry.photo.dimensions(), &entry.caption)?;
            pages.push(self.draw_photo_page(&mut doc, &plan, entry));
        }

        let closing = album.details.closing_message.as_deref();
        if let Some(message) = closing.filter(|message| !message.trim().is_empty()) {
            pages.push(self.draw_closing(&planner.closing(message)?));
        }

        doc.with_pages(pages);
        debug!(pages = doc.pages.len(), "Album layout complete");

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            warn!(count = warnings.len(), "PDF serialisation reported warnings");
        }

        info!(bytes = output.len(), "Album rendered");
        Ok(output)
    }

    /// Render the album and write it directly to a file.
    pub fn write_to_file(&self, album: &Album, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render(album)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!("Wrote album PDF to {}", path.as_ref().display());
        Ok(())
    }

    // -- Pages ----------------------------------------------------------------

    fn draw_cover(&self, plan: &CoverPlan) -> PdfPage {
        let theme = &self.config.theme;
        let mut canvas = PageCanvas::new(self.config.paper_size);

        canvas.fill_rect(&self.full_page(), theme.cover_background);
        canvas.fill_rect(&plan.header_bar, theme.accent);
        for dot in &plan.header_dots {
            canvas.fill_dot(dot, theme.highlight);
        }

        canvas.text(&plan.title, theme.text);
        canvas.rule(&plan.rule, theme.accent);

        canvas.fill_rounded_rect(&plan.names_box, BOX_RADIUS, RgbColor::WHITE);
        canvas.stroke_rounded_rect(&plan.names_box, BOX_RADIUS, theme.accent, BOX_OUTLINE);
        canvas.text(&plan.from_line, theme.text);
        canvas.text(&plan.to_line, theme.text);

        self.draw_footer_dots(&mut canvas, &plan.footer_dots);
        canvas.into_page()
    }

    fn draw_photo_page(
        &self,
        doc: &mut PdfDocument,
        plan: &PhotoPagePlan,
        entry: &AlbumEntry,
    ) -> PdfPage {
        let theme = &self.config.theme;
        let profile = &self.config.profile;
        let mut canvas = PageCanvas::new(self.config.paper_size);

        canvas.fill_rect(&self.full_page(), theme.page_background);
        canvas.fill_rect(&plan.top_bar, theme.accent);

        canvas.fill_rounded_rect(&plan.shadow, SHADOW_RADIUS, theme.shadow);
        canvas.fill_rounded_rect(&plan.frame, FRAME_RADIUS, RgbColor::WHITE);

        let rgb = entry.photo.to_rgb8_within(self.config.max_photo_pixels);
        let (px_w, px_h) = rgb.dimensions();
        let raw = RawImage {
            pixels: RawImageData::U8(rgb.into_raw()),
            width: px_w as usize,
            height: px_h as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let xobject_id = doc.add_image(&raw);
        canvas.image(xobject_id, (px_w, px_h), &plan.photo);

        canvas.stroke_rounded_rect(&plan.frame, FRAME_RADIUS, theme.accent, profile.frame_outline);

        canvas.fill_rounded_rect(&plan.caption_box, BOX_RADIUS, RgbColor::WHITE);
        canvas.stroke_rounded_rect(&plan.caption_box, BOX_RADIUS, theme.soft, CAPTION_OUTLINE);
        if let Some(caption) = &plan.caption {
            canvas.text(caption, theme.text);
        }

        canvas.text(&plan.page_number, theme.muted);
        canvas.fill_dot(&plan.page_dot, theme.soft);

        debug!(page = plan.number, px_w, px_h, ops = canvas.op_count(), "Photo page drawn");
        canvas.into_page()
    }

    fn draw_closing(&self, plan: &ClosingPlan) -> PdfPage {
        let theme = &self.config.theme;
        let mut canvas = PageCanvas::new(self.config.paper_size);

        canvas.fill_rect(&self.full_page(), theme.cover_background);
        canvas.fill_rect(&plan.top_bar, theme.accent);
        canvas.text(&plan.message, theme.text);
        self.draw_footer_dots(&mut canvas, &plan.footer_dots);

        canvas.into_page()
    }

    fn draw_footer_dots(&self, canvas: &mut PageCanvas, dots: &[Dot; 3]) {
        let theme = &self.config.theme;
        for (index, dot) in dots.iter().enumerate() {
            // The middle dot is the accent colour.
            let color = if index == 1 { theme.accent } else { theme.soft };
            canvas.fill_dot(dot, color);
        }
    }

    fn full_page(&self) -> Rect {
        let (w, h) = self.config.paper_size.dimensions_pt();
        Rect::new(0.0, 0.0, w, h)
    }
}

impl Default for AlbumWriter {
    fn default() -> Self {
        Self::new(AlbumConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgb, RgbImage};
    use memorybook_core::AlbumDetails;

    use super::*;
    use crate::photo::Photo;
    use crate::pdf::reader::PdfReader;

    fn photo(width: u32, height: u32) -> Photo {
        Photo::from_dynamic(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            Rgb([180, 120, 90]),
        )))
    }

    fn album(closing: Option<&str>) -> Album {
        let mut album = Album::new(AlbumDetails {
            title: "Our Story 💕".into(),
            from_name: "Sam".into(),
            to_name: "Alex".into(),
            closing_message: closing.map(str::to_owned),
        });
        album.push(photo(40, 30), "Where it all began");
        album.push(photo(30, 40), "");
        album
    }

    #[test]
    fn empty_album_is_rejected() {
        let err = AlbumWriter::default().render(&Album::default()).unwrap_err();
        assert!(matches!(err, MemoryBookError::EmptyAlbum));
    }

    #[test]
    fn renders_cover_and_photo_pages() {
        let bytes = AlbumWriter::default().render(&album(None)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let reader = PdfReader::from_bytes(&bytes).unwrap();
        assert_eq!(reader.page_count(), 3);
        assert_eq!(reader.image_count(), 2);
    }

    #[test]
    fn closing_message_adds_a_page() {
        let bytes = AlbumWriter::new(AlbumConfig::compact())
            .render(&album(Some("To many more adventures")))
            .unwrap();
        assert_eq!(PdfReader::from_bytes(&bytes).unwrap().page_count(), 4);
    }

    #[test]
    fn large_photos_are_downscaled_before_embedding() {
        let config = AlbumConfig {
            max_photo_pixels: 16,
            ..AlbumConfig::default()
        };
        let mut album = Album::default();
        album.push(photo(64, 48), "small");
        let bytes = AlbumWriter::new(config).render(&album).unwrap();
        assert_eq!(PdfReader::from_bytes(&bytes).unwrap().image_sizes(), vec![(16, 12)]);
    }

    #[test]
    fn small_photos_are_embedded_at_full_size() {
        let bytes = AlbumWriter::default().render(&album(None)).unwrap();
        let mut sizes = PdfReader::from_bytes(&bytes).unwrap().image_sizes();
        sizes.sort();
        assert_eq!(sizes, vec![(30, 40), (40, 30)]);
    }

    #[test]
    fn accented_captions_are_written_as_plain_ascii() {
        let mut album = Album::default();
        album.push(photo(4, 3), "naïve café");
        let bytes = AlbumWriter::default().render(&album).unwrap();

        let runs = PdfReader::from_bytes(&bytes).unwrap().page_text(2).unwrap();
        assert!(runs.iter().any(|run| run.as_slice() == b"nave caf"));
        assert!(runs.iter().flatten().all(u8::is_ascii));
    }

    #[test]
    fn writes_album_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("album.pdf");
        AlbumWriter::default().write_to_file(&album(None), &path).unwrap();

        let reader = PdfReader::open(&path).unwrap();
        assert_eq!(reader.page_count(), 3);
    }
}
