// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text preview of an album's page plan.

use std::fmt::Write;

use memorybook_document::PagePlan;
use memorybook_document::plan::PlacedText;
use memorybook_layout::Rect;

/// Describe each planned page: its text lines and the boxes photos land in.
pub fn describe(pages: &[PagePlan]) -> String {
    let mut out = String::new();
    for plan in pages {
        match plan {
            PagePlan::Cover(cover) => {
                let _ = writeln!(out, "Cover");
                describe_text(&mut out, "title", &cover.title);
                describe_text(&mut out, "from", &cover.from_line);
                describe_text(&mut out, "to", &cover.to_line);
            }
            PagePlan::Photo(page) => {
                let _ = writeln!(out, "Page {}", page.number);
                let _ = writeln!(out, "  photo   {}", rect(&page.photo));
                match &page.caption {
                    Some(caption) => describe_text(&mut out, "caption", caption),
                    None => {
                        let _ = writeln!(out, "  caption (none)");
                    }
                }
            }
            PagePlan::Closing(closing) => {
                let _ = writeln!(out, "Closing");
                describe_text(&mut out, "message", &closing.message);
            }
        }
    }
    out
}

fn describe_text(out: &mut String, label: &str, text: &PlacedText) {
    for line in &text.lines {
        let _ = writeln!(out, "  {label:<7} {:?}", line.text);
    }
    if text.dropped_lines > 0 {
        let _ = writeln!(out, "  {label:<7} (+{} lines cut off)", text.dropped_lines);
    }
}

fn rect(r: &Rect) -> String {
    format!(
        "{:.1} x {:.1} at ({:.1}, {:.1})",
        r.width, r.height, r.x, r.y
    )
}
