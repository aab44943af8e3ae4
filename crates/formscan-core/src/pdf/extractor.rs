//! Glyph geometry and page size extraction using lopdf.

use std::collections::BTreeMap;

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, trace};

use super::lines::{LineGrouping, group_into_lines};
use super::{BBox, Glyph, LayoutProvider, PageSize, Result, TextLine};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

type Matrix = [f64; 6];

const IDENTITY: Matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// PDF layout extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    grouping: LineGrouping,
    /// Glyph advance, in thousandths of an em, for fonts without `/Widths`.
    default_glyph_width: f64,
    decrypt_empty_password: bool,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            grouping: LineGrouping::default(),
            default_glyph_width: 500.0,
            decrypt_empty_password: true,
        }
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self::new()
            .with_line_grouping(LineGrouping {
                line_tolerance: config.line_tolerance,
                char_margin: config.char_margin,
            })
            .with_default_glyph_width(config.default_glyph_width)
            .with_empty_password_decryption(config.decrypt_empty_password)
    }

    pub fn with_line_grouping(mut self, grouping: LineGrouping) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn with_default_glyph_width(mut self, width: f64) -> Self {
        self.default_glyph_width = width;
        self
    }

    pub fn with_empty_password_decryption(mut self, enabled: bool) -> Self {
        self.decrypt_empty_password = enabled;
        self
    }

    /// Parse a PDF from bytes.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            if !self.decrypt_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    /// Extract every glyph drawn by the page content stream, in drawing order.
    pub fn glyphs(&self, page: u32) -> Result<Vec<Glyph>> {
        let doc = self.document()?;
        let page_id = self.page_id(page)?;

        let fonts = doc.get_page_fonts(page_id).unwrap_or_default();
        let content_data = doc.get_page_content(page_id).map_err(|e| PdfError::Content {
            page,
            reason: e.to_string(),
        })?;
        let content = Content::decode(&content_data).map_err(|e| PdfError::Content {
            page,
            reason: e.to_string(),
        })?;

        let mut interpreter = TextInterpreter::new(doc, &fonts, self.default_glyph_width);
        for op in &content.operations {
            interpreter.apply(op);
        }

        debug!("Page {}: {} glyphs", page, interpreter.glyphs.len());
        Ok(interpreter.glyphs)
    }

    fn document(&self) -> Result<&Document> {
        self.document.as_ref().ok_or(PdfError::NotLoaded)
    }

    fn page_id(&self, page: u32) -> Result<ObjectId> {
        let doc = self.document()?;
        doc.get_pages()
            .get(&page)
            .copied()
            .ok_or(PdfError::InvalidPage(page))
    }

    /// Look up a page attribute, following `/Parent` links for inherited values.
    fn get_inherited_attribute<'a>(
        &self,
        doc: &'a Document,
        node_id: ObjectId,
        key: &[u8],
    ) -> Option<&'a Object> {
        let node = doc.get_object(node_id).ok()?;
        if let Object::Dictionary(dict) = node {
            if let Ok(value) = dict.get(key) {
                return doc.dereference(value).ok().map(|(_, obj)| obj);
            }

            if let Ok(Object::Reference(parent_id)) = dict.get(b"Parent") {
                return self.get_inherited_attribute(doc, *parent_id, key);
            }
        }
        None
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutProvider for PdfExtractor {
    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn page_size(&self, page: u32) -> Option<PageSize> {
        let doc = self.document.as_ref()?;
        let page_id = self.page_id(page).ok()?;

        let media_box = self.get_inherited_attribute(doc, page_id, b"MediaBox")?;
        let values: Vec<f64> = media_box
            .as_array()
            .ok()?
            .iter()
            .filter_map(|obj| doc.dereference(obj).ok().and_then(|(_, o)| get_number(o)))
            .collect();

        if values.len() != 4 {
            debug!("Page {} has a malformed MediaBox: {:?}", page, values);
            return None;
        }

        Some(PageSize {
            width: values[2] - values[0],
            height: values[3] - values[1],
        })
    }

    fn text_lines(&self, page: u32) -> Result<Vec<TextLine>> {
        let glyphs = self.glyphs(page)?;
        let lines = group_into_lines(glyphs, &self.grouping);
        debug!("Page {}: {} text lines", page, lines.len());
        Ok(lines)
    }
}

/// Metrics of a font resource needed to place glyphs.
struct FontMetrics {
    name: String,
    first_char: i64,
    widths: Vec<f64>,
    missing_width: f64,
    ascent: f64,
    descent: f64,
}

impl FontMetrics {
    fn load(doc: &Document, resource_name: &str, dict: Option<&Dictionary>, default_width: f64) -> Self {
        let mut metrics = Self {
            name: resource_name.to_string(),
            first_char: 0,
            widths: Vec::new(),
            missing_width: default_width,
            ascent: 0.0,
            descent: 0.0,
        };

        let Some(dict) = dict else {
            return metrics;
        };

        if let Ok(base_font) = dict.get(b"BaseFont").and_then(|o| o.as_name()) {
            metrics.name = String::from_utf8_lossy(base_font).to_string();
        }

        metrics.first_char = dict
            .get(b"FirstChar")
            .ok()
            .and_then(|o| o.as_i64().ok())
            .unwrap_or(0);

        if let Some(Object::Array(widths)) = dict
            .get(b"Widths")
            .ok()
            .and_then(|o| doc.dereference(o).ok())
            .map(|(_, o)| o)
        {
            metrics.widths = widths
                .iter()
                .map(|w| {
                    doc.dereference(w)
                        .ok()
                        .and_then(|(_, o)| get_number(o))
                        .unwrap_or(default_width)
                })
                .collect();
        }

        if let Some(Object::Dictionary(descriptor)) = dict
            .get(b"FontDescriptor")
            .ok()
            .and_then(|o| doc.dereference(o).ok())
            .map(|(_, o)| o)
        {
            let number = |key: &[u8]| descriptor.get(key).ok().and_then(get_number);
            metrics.ascent = number(b"Ascent").unwrap_or(0.0) / 1000.0;
            metrics.descent = number(b"Descent").unwrap_or(0.0) / 1000.0;
            if let Some(missing) = number(b"MissingWidth") {
                metrics.missing_width = missing;
            }
        }

        trace!(
            "Font {} ({}): {} widths from {}, ascent={}, descent={}",
            resource_name,
            metrics.name,
            metrics.widths.len(),
            metrics.first_char,
            metrics.ascent,
            metrics.descent
        );
        metrics
    }

    /// Horizontal advance of a character code in text space units (per unit font size).
    fn advance(&self, code: Option<u8>) -> f64 {
        let width = code
            .and_then(|c| usize::try_from(i64::from(c) - self.first_char).ok())
            .and_then(|idx| self.widths.get(idx).copied())
            .unwrap_or(self.missing_width);
        width / 1000.0
    }
}

/// Text state machine over content stream operators.
struct TextInterpreter<'a> {
    doc: &'a Document,
    fonts: &'a BTreeMap<Vec<u8>, &'a Dictionary>,
    font_cache: BTreeMap<String, FontMetrics>,
    default_glyph_width: f64,
    ctm: Matrix,
    ctm_stack: Vec<Matrix>,
    text_matrix: Matrix,
    line_matrix: Matrix,
    font: String,
    font_size: f64,
    char_spacing: f64,
    word_spacing: f64,
    horizontal_scaling: f64,
    leading: f64,
    rise: f64,
    glyphs: Vec<Glyph>,
}

impl<'a> TextInterpreter<'a> {
    fn new(
        doc: &'a Document,
        fonts: &'a BTreeMap<Vec<u8>, &'a Dictionary>,
        default_glyph_width: f64,
    ) -> Self {
        Self {
            doc,
            fonts,
            font_cache: BTreeMap::new(),
            default_glyph_width,
            ctm: IDENTITY,
            ctm_stack: Vec::new(),
            text_matrix: IDENTITY,
            line_matrix: IDENTITY,
            font: String::new(),
            font_size: 12.0,
            char_spacing: 0.0,
            word_spacing: 0.0,
            horizontal_scaling: 1.0,
            leading: 0.0,
            rise: 0.0,
            glyphs: Vec::new(),
        }
    }

    fn apply(&mut self, op: &Operation) {
        let operands = &op.operands;
        let num = |i: usize| operands.get(i).and_then(get_number);

        match op.operator.as_str() {
            "q" => self.ctm_stack.push(self.ctm),
            "Q" => {
                if let Some(ctm) = self.ctm_stack.pop() {
                    self.ctm = ctm;
                }
            }
            "cm" => {
                if let Some(m) = matrix_from(operands) {
                    self.ctm = multiply(&m, &self.ctm);
                }
            }
            "BT" => {
                self.text_matrix = IDENTITY;
                self.line_matrix = IDENTITY;
            }
            "Tf" => {
                if let Some(name) = operands.first().and_then(|o| o.as_name().ok()) {
                    self.font = String::from_utf8_lossy(name).to_string();
                }
                if let Some(size) = num(1) {
                    self.font_size = size;
                }
            }
            "Tc" => self.char_spacing = num(0).unwrap_or(0.0),
            "Tw" => self.word_spacing = num(0).unwrap_or(0.0),
            "Tz" => self.horizontal_scaling = num(0).unwrap_or(100.0) / 100.0,
            "TL" => self.leading = num(0).unwrap_or(0.0),
            "Ts" => self.rise = num(0).unwrap_or(0.0),
            "Td" => self.move_line(num(0).unwrap_or(0.0), num(1).unwrap_or(0.0)),
            "TD" => {
                let ty = num(1).unwrap_or(0.0);
                self.leading = -ty;
                self.move_line(num(0).unwrap_or(0.0), ty);
            }
            "Tm" => {
                if let Some(m) = matrix_from(operands) {
                    self.text_matrix = m;
                    self.line_matrix = m;
                }
            }
            "T*" => self.move_line(0.0, -self.leading),
            "Tj" => {
                if let Some(operand) = operands.first() {
                    self.show_string(operand);
                }
            }
            "TJ" => {
                if let Some(Ok(items)) = operands.first().map(|o| o.as_array()) {
                    for item in items {
                        match get_number(item) {
                            Some(adjust) => self.advance(-adjust / 1000.0 * self.font_size),
                            None => self.show_string(item),
                        }
                    }
                }
            }
            "'" => {
                self.move_line(0.0, -self.leading);
                if let Some(operand) = operands.first() {
                    self.show_string(operand);
                }
            }
            "\"" => {
                self.word_spacing = num(0).unwrap_or(self.word_spacing);
                self.char_spacing = num(1).unwrap_or(self.char_spacing);
                self.move_line(0.0, -self.leading);
                if let Some(operand) = operands.get(2) {
                    self.show_string(operand);
                }
            }
            _ => {}
        }
    }

    fn move_line(&mut self, tx: f64, ty: f64) {
        self.line_matrix = multiply(&[1.0, 0.0, 0.0, 1.0, tx, ty], &self.line_matrix);
        self.text_matrix = self.line_matrix;
    }

    /// Move the text matrix by an unscaled horizontal displacement.
    fn advance(&mut self, tx: f64) {
        let tx = tx * self.horizontal_scaling;
        self.text_matrix = multiply(&[1.0, 0.0, 0.0, 1.0, tx, 0.0], &self.text_matrix);
    }

    fn show_string(&mut self, operand: &Object) {
        let Object::String(bytes, _) = operand else {
            return;
        };

        let text = decode_string(self.doc, self.fonts, &self.font, bytes);
        let chars: Vec<char> = text.chars().collect();
        // Byte codes are only meaningful for single-byte encodings
        let single_byte = chars.len() == bytes.len();

        if !self.font_cache.contains_key(&self.font) {
            let dict = self.fonts.get(self.font.as_bytes()).copied();
            let metrics = FontMetrics::load(self.doc, &self.font, dict, self.default_glyph_width);
            self.font_cache.insert(self.font.clone(), metrics);
        }

        for (i, ch) in chars.into_iter().enumerate() {
            let code = if single_byte { Some(bytes[i]) } else { None };
            let (advance, glyph) = match self.font_cache.get(&self.font) {
                Some(metrics) => (metrics.advance(code), self.place_glyph(ch, code, metrics)),
                None => return,
            };
            self.glyphs.push(glyph);

            let is_space = match code {
                Some(c) => c == b' ',
                None => ch == ' ',
            };
            let spacing = self.char_spacing + if is_space { self.word_spacing } else { 0.0 };
            self.advance(advance * self.font_size + spacing);
        }
    }

    fn place_glyph(&self, ch: char, code: Option<u8>, metrics: &FontMetrics) -> Glyph {
        let render = multiply(&self.text_matrix, &self.ctm);
        let scale_x = render[0].hypot(render[1]);
        let scale_y = render[2].hypot(render[3]);
        let size = self.font_size * scale_y;

        let origin = multiply(
            &[
                self.font_size * self.horizontal_scaling,
                0.0,
                0.0,
                self.font_size,
                0.0,
                self.rise,
            ],
            &render,
        );

        let x0 = origin[4];
        let y0 = origin[5] + metrics.descent * size;
        let width = metrics.advance(code) * self.font_size * self.horizontal_scaling * scale_x;
        let height = if metrics.ascent > metrics.descent {
            (metrics.ascent - metrics.descent) * size
        } else {
            size
        };

        Glyph::new(
            ch,
            BBox::new(x0, y0, x0 + width, y0 + height),
            metrics.name.clone(),
            size,
        )
        .with_baseline(origin[5])
    }
}

fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    [
        a[0] * b[0] + a[1] * b[2],
        a[0] * b[1] + a[1] * b[3],
        a[2] * b[0] + a[3] * b[2],
        a[2] * b[1] + a[3] * b[3],
        a[4] * b[0] + a[5] * b[2] + b[4],
        a[4] * b[1] + a[5] * b[3] + b[5],
    ]
}

fn matrix_from(operands: &[Object]) -> Option<Matrix> {
    if operands.len() < 6 {
        return None;
    }
    let mut m = IDENTITY;
    for (slot, operand) in m.iter_mut().zip(operands) {
        *slot = get_number(operand)?;
    }
    Some(m)
}

/// Helper to get f64 from Object
fn get_number(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(f64::from(*r)),
        _ => None,
    }
}

/// Decode a string operand through the current font's encoding.
fn decode_string(
    doc: &Document,
    fonts: &BTreeMap<Vec<u8>, &Dictionary>,
    current_font: &str,
    bytes: &[u8],
) -> String {
    if let Some(font_dict) = fonts.get(current_font.as_bytes()) {
        if let Ok(encoding) = font_dict.get_font_encoding(doc) {
            if let Ok(text) = Document::decode_text(&encoding, bytes) {
                return text;
            }
        }
    }

    // Fallback: try UTF-16BE then Latin-1
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::dictionary;
    use lopdf::{Object, Stream};

    /// Build a one-page PDF with the given text lines at `(x, y)` using Helvetica.
    pub(crate) fn build_pdf(lines: &[(&str, f64, f64)], media_box: Option<[i64; 4]>) -> Vec<u8> {
        let mut operations = Vec::new();
        for (text, x, y) in lines {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 10.into()]));
            operations.push(Operation::new("Td", vec![Object::Real(*x as f32), Object::Real(*y as f32)]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*text)]));
            operations.push(Operation::new("ET", vec![]));
        }
        build_pdf_from(operations, None, media_box)
    }

    /// Build a one-page PDF showing `runs` of `(text, size)` one after another
    /// from `(x, y)`. The font carries a descriptor with the given ascent and
    /// descent.
    pub(crate) fn build_pdf_with_runs(
        runs: &[(&str, i64)],
        x: f64,
        y: f64,
        ascent_descent: (i64, i64),
        media_box: Option<[i64; 4]>,
    ) -> Vec<u8> {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Td", vec![Object::Real(x as f32), Object::Real(y as f32)]),
        ];
        for (text, size) in runs {
            operations.push(Operation::new("Tf", vec!["F1".into(), (*size).into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*text)]));
        }
        operations.push(Operation::new("ET", vec![]));
        build_pdf_from(operations, Some(ascent_descent), media_box)
    }

    fn build_pdf_from(
        operations: Vec<Operation>,
        ascent_descent: Option<(i64, i64)>,
        media_box: Option<[i64; 4]>,
    ) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let mut font = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "FirstChar" => 32,
            "Widths" => (32..127).map(|_| Object::Integer(600)).collect::<Vec<_>>(),
        };
        if let Some((ascent, descent)) = ascent_descent {
            let descriptor_id = doc.add_object(dictionary! {
                "Type" => "FontDescriptor",
                "FontName" => "Helvetica",
                "Ascent" => ascent,
                "Descent" => descent,
            });
            font.set("FontDescriptor", descriptor_id);
        }
        let font_id = doc.add_object(font);
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap_or_default(),
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });

        let mut pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        };
        if let Some(mb) = media_box {
            pages.set(
                "MediaBox",
                mb.iter().map(|v| Object::Integer(*v)).collect::<Vec<_>>(),
            );
        }
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
        assert!(extractor.page_size(1).is_none());
        assert!(matches!(extractor.glyphs(1), Err(PdfError::NotLoaded)));
    }

    #[test]
    fn test_page_size_inherited_from_pages_node() {
        let data = build_pdf(&[("A", 10.0, 10.0)], Some([0, 0, 612, 792]));
        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        assert_eq!(extractor.page_count(), 1);
        assert_eq!(
            extractor.page_size(1),
            Some(PageSize {
                width: 612.0,
                height: 792.0
            })
        );
        assert!(extractor.page_size(2).is_none());
    }

    #[test]
    fn test_missing_media_box() {
        let data = build_pdf(&[("A", 10.0, 10.0)], None);
        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        assert!(extractor.page_size(1).is_none());
    }

    #[test]
    fn test_glyph_positions_follow_widths() {
        let data = build_pdf(&[("AB", 100.0, 700.0)], Some([0, 0, 612, 792]));
        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        let glyphs = extractor.glyphs(1).unwrap();
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[0].ch, 'A');
        assert_eq!(glyphs[0].font_name, "Helvetica");
        assert_eq!(glyphs[0].font_size, 10.0);
        assert!((glyphs[0].bbox.x0 - 100.0).abs() < 1e-3);
        assert!((glyphs[0].bbox.y0 - 700.0).abs() < 1e-3);
        // 600/1000 em at 10pt
        assert!((glyphs[1].bbox.x0 - 106.0).abs() < 1e-3);
    }

    #[test]
    fn test_text_lines_ordered_top_to_bottom() {
        let data = build_pdf(
            &[("NAME: BOB", 20.0, 600.0), ("ID: 42", 20.0, 700.0)],
            Some([0, 0, 612, 792]),
        );
        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        let lines = extractor.text_lines(1).unwrap();
        let texts: Vec<String> = lines.iter().map(|l| l.text()).collect();
        assert_eq!(texts, vec!["ID: 42", "NAME: BOB"]);
    }

    #[test]
    fn test_mixed_font_sizes_share_a_line() {
        let data = build_pdf_with_runs(
            &[("TOTAL:", 8), ("111", 16)],
            20.0,
            700.0,
            (800, -200),
            Some([0, 0, 612, 792]),
        );
        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        let glyphs = extractor.glyphs(1).unwrap();
        // Box bottoms differ by the scaled descent, baselines do not
        assert!((glyphs[0].bbox.y0 - 698.4).abs() < 1e-3);
        assert!((glyphs[6].bbox.y0 - 696.8).abs() < 1e-3);
        assert!(glyphs.iter().all(|g| (g.baseline - 700.0).abs() < 1e-3));

        let lines = extractor.text_lines(1).unwrap();
        let texts: Vec<String> = lines.iter().map(|l| l.text()).collect();
        assert_eq!(texts, vec!["TOTAL:111"]);
    }

    #[test]
    fn test_invalid_page() {
        let data = build_pdf(&[("A", 10.0, 10.0)], Some([0, 0, 612, 792]));
        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        assert!(matches!(extractor.glyphs(3), Err(PdfError::InvalidPage(3))));
    }

    #[test]
    fn test_load_garbage() {
        let mut extractor = PdfExtractor::new();
        assert!(matches!(extractor.load(b"not a pdf"), Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_matrix_multiply_translation() {
        let scaled = multiply(&[2.0, 0.0, 0.0, 2.0, 0.0, 0.0], &[1.0, 0.0, 0.0, 1.0, 10.0, 20.0]);
        assert_eq!(scaled, [2.0, 0.0, 0.0, 2.0, 10.0, 20.0]);

        let moved = multiply(&[1.0, 0.0, 0.0, 1.0, 5.0, 5.0], &[2.0, 0.0, 0.0, 2.0, 0.0, 0.0]);
        assert_eq!(moved, [2.0, 0.0, 0.0, 2.0, 10.0, 10.0]);
    }
}
