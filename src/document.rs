use crate::{
    content::build_content,
    font::{Font, HELVETICA},
    layout::PageGeometry,
    pagesize::media_box,
    parser::PageSpec,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use pdf_writer::Ref;
use std::{
    io::{self, Write},
    path::Path,
};

const HEADER: &[u8] = b"%PDF-1.4\n";
/// A comment with high-bit bytes so transfer tools treat the file as binary
const BINARY_MARKER: &[u8] = b"%\xE2\xE3\xCF\xD3\n";

/// A set of parsed pages, ready to be rendered into a PDF 1.4 file.
///
/// Output is fully deterministic: the same pages always produce the same bytes.
#[derive(Debug, Clone)]
pub struct Document {
    pub pages: Vec<PageSpec>,
    pub geometry: PageGeometry,
    pub font: Font,
}

impl Document {
    /// Create a document laid out on the default page geometry
    pub fn new(pages: Vec<PageSpec>) -> Document {
        Document::with_geometry(pages, PageGeometry::default())
    }

    pub fn with_geometry(pages: Vec<PageSpec>, geometry: PageGeometry) -> Document {
        Document {
            pages,
            geometry,
            font: HELVETICA,
        }
    }

    /// Render the whole document in memory.
    ///
    /// Objects are numbered catalog (1), page tree (2), font (3), then one page
    /// dictionary per page followed by one content stream per page, and are written
    /// in that order followed by a classic cross-reference table.
    #[allow(clippy::write_with_newline)]
    pub fn to_bytes(&self) -> Result<Vec<u8>, PDFError> {
        if self.pages.is_empty() {
            return Err(PDFError::EmptyDocument);
        }

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);
        let font_id = refs.gen(RefType::Font);
        let page_refs: Vec<Ref> = (0..self.pages.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();
        let content_refs: Vec<Ref> = (0..self.pages.len())
            .map(|i| refs.gen(RefType::ContentForPage(i)))
            .collect();

        let mut writer = ObjectWriter::new()?;

        writer.object(catalog_id, |buf| {
            write!(buf, "<< /Type /Catalog /Pages {} 0 R >>\n", page_tree_id.get())
        })?;

        writer.object(page_tree_id, |buf| {
            write!(buf, "<< /Type /Pages /Kids [")?;
            for page_ref in page_refs.iter() {
                write!(buf, " {} 0 R", page_ref.get())?;
            }
            write!(buf, " ] /Count {} >>\n", page_refs.len())
        })?;

        writer.object(font_id, |buf| {
            write!(
                buf,
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} >>\n",
                self.font.base_font()
            )
        })?;

        let media_box = media_box(self.geometry.size);
        for (page_ref, content_ref) in page_refs.iter().zip(content_refs.iter()) {
            writer.object(*page_ref, |buf| {
                write!(buf, "<< /Type /Page\n")?;
                write!(buf, "   /Parent {} 0 R\n", page_tree_id.get())?;
                write!(buf, "   /MediaBox {media_box}\n")?;
                write!(
                    buf,
                    "   /Resources << /Font << /{} {} 0 R >> >>\n",
                    self.font.resource_name(),
                    font_id.get()
                )?;
                write!(buf, "   /Contents {} 0 R\n", content_ref.get())?;
                write!(buf, ">>\n")
            })?;
        }

        for (page, content_ref) in self.pages.iter().zip(content_refs.iter()) {
            let content = build_content(page, &self.geometry, &self.font)?;
            writer.object(*content_ref, |buf| {
                write!(buf, "<< /Length {} >>\n", content.len())?;
                write!(buf, "stream\n")?;
                buf.write_all(&content)?;
                write!(buf, "\nendstream\n")
            })?;
        }

        let bytes = writer.finish(catalog_id)?;
        log::info!(
            "rendered {} page(s) into {} bytes",
            self.pages.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Write the entire document to the writer. The document is rendered in memory
    /// first, so nothing is written if rendering fails.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), PDFError> {
        let bytes = self.to_bytes()?;
        w.write_all(&bytes).map_err(Into::into)
    }

    /// Render the document and save it to `path`. The file is only created once the
    /// complete document has been rendered.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PDFError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes).map_err(|source| PDFError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Serializes indirect objects into a buffer, remembering where each one starts
struct ObjectWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl ObjectWriter {
    fn new() -> Result<ObjectWriter, io::Error> {
        let mut buf = Vec::new();
        buf.write_all(HEADER)?;
        buf.write_all(BINARY_MARKER)?;
        Ok(ObjectWriter {
            buf,
            offsets: Vec::new(),
        })
    }

    /// Write object `id` with the body produced by `body`. Objects must be written
    /// in ascending order, starting at 1, so that the offsets line up with the
    /// cross-reference table.
    #[allow(clippy::write_with_newline)]
    fn object<F>(&mut self, id: Ref, body: F) -> Result<(), io::Error>
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), io::Error>,
    {
        debug_assert_eq!(id.get() as usize, self.offsets.len() + 1);
        self.offsets.push(self.buf.len());
        write!(&mut self.buf, "{} 0 obj\n", id.get())?;
        body(&mut self.buf)?;
        write!(&mut self.buf, "endobj\n")
    }

    /// Append the cross-reference table and trailer, naming `root` as the catalog
    #[allow(clippy::write_with_newline)]
    fn finish(self, root: Ref) -> Result<Vec<u8>, io::Error> {
        let ObjectWriter { mut buf, offsets } = self;
        let xref_offset = buf.len();
        let size = offsets.len() + 1;

        write!(&mut buf, "xref\n")?;
        write!(&mut buf, "0 {size}\n")?;
        write!(&mut buf, "0000000000 65535 f \n")?;
        for offset in offsets.iter() {
            write!(&mut buf, "{offset:010} 00000 n \n")?;
        }

        write!(&mut buf, "trailer\n")?;
        write!(&mut buf, "<< /Size {size} /Root {} 0 R >>\n", root.get())?;
        write!(&mut buf, "startxref\n")?;
        write!(&mut buf, "{xref_offset}\n")?;
        write!(&mut buf, "%%EOF\n")?;

        Ok(buf)
    }
}
