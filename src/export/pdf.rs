use pdf_writer::{Content, Name, Pdf, Rect, Ref};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One table block of the printable report (one per company).
pub struct PdfSection {
    pub heading: String,
    pub rows: Vec<Vec<String>>,
    pub footer: String,
}

/// Flowing multi-page layout: title, table sections, closing summary lines.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Helvetica (Type1, WinAnsi) only covers Latin-1: replace what it can't draw.
fn pdf_text(text: &str) -> Vec<u8> {
    text.replace('€', "EUR")
        .chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 18.0,

            next_id,
            font_id,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let bytes = pdf_text(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(pdf_writer::Str(&bytes));
        content.end_text();
    }

    fn fill_band(&self, content: &mut Content, y: f32, w: f32, grey: f32) {
        content.save_state();
        content.set_fill_rgb(grey, grey, grey + 0.03);
        content.rect(self.margin, y, w, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        size: f32,
    ) {
        let mut x = self.margin;

        for (i, text) in row.iter().enumerate() {
            let w = col_widths.get(i).copied().unwrap_or(0.0);
            // ~5pt per character at 9pt Helvetica
            let max_chars = ((w - 6.0) / 5.0).max(1.0) as usize;
            let cell = crate::utils::formatting::truncate(text, max_chars);
            self.draw_text(content, x + 3.0, y + 5.0, size, &cell);

            content.save_state();
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(x, y, w, self.row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Column widths from header + content, scaled to fit the page.
    fn compute_col_widths(&self, headers: &[&str], sections: &[PdfSection]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.len() as f32 * 6.0 + 8.0)
            .collect();

        for row in sections.iter().flat_map(|s| s.rows.iter()) {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (cell.chars().count() as f32 * 5.2 + 8.0).max(*w);
                }
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Pagina {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            &pg,
        );
    }

    /// Render the whole report. Starts a new page whenever the cursor
    /// would cross the bottom margin.
    pub fn write_report(
        &mut self,
        title: &str,
        headers: &[&str],
        sections: &[PdfSection],
        summary: &[String],
    ) {
        let col_widths = self.compute_col_widths(headers, sections);
        let table_w: f32 = col_widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut page_idx = 1;
        let mut content = self.new_page();
        self.draw_page_header_footer(&mut content, title, page_idx);
        let mut y = self.page_h - self.margin - 30.0;

        for section in sections {
            let mut first_row = true;
            let mut rows = section.rows.iter().enumerate().peekable();

            // heading + table header + at least one row must fit
            loop {
                if y - 3.0 * self.row_h < self.margin {
                    self.finalize_page(content);
                    page_idx += 1;
                    content = self.new_page();
                    self.draw_page_header_footer(&mut content, title, page_idx);
                    y = self.page_h - self.margin - 30.0;
                }

                if first_row {
                    self.draw_text(
                        &mut content,
                        self.margin,
                        y + 5.0,
                        self.header_font_size + 1.0,
                        &section.heading,
                    );
                    y -= self.row_h;
                    first_row = false;
                }

                self.fill_band(&mut content, y, table_w, 0.85);
                self.draw_row(
                    &mut content,
                    y,
                    &col_widths,
                    &header_row,
                    self.header_font_size,
                );
                y -= self.row_h;

                while let Some((i, row)) = rows.peek() {
                    if y - self.row_h < self.margin {
                        break;
                    }
                    if i % 2 == 0 {
                        self.fill_band(&mut content, y, table_w, 0.96);
                    }
                    self.draw_row(&mut content, y, &col_widths, row, self.font_size);
                    y -= self.row_h;
                    rows.next();
                }

                if rows.peek().is_none() {
                    break;
                }
                y = self.margin; // force page break
            }

            self.draw_text(
                &mut content,
                self.margin,
                y + 5.0,
                self.header_font_size,
                &section.footer,
            );
            y -= 1.5 * self.row_h;
        }

        for line in summary {
            if y - self.row_h < self.margin {
                self.finalize_page(content);
                page_idx += 1;
                content = self.new_page();
                self.draw_page_header_footer(&mut content, title, page_idx);
                y = self.page_h - self.margin - 30.0;
            }
            self.draw_text(&mut content, self.margin, y + 5.0, self.header_font_size, line);
            y -= self.row_h;
        }

        self.finalize_page(content);
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
