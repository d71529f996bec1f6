//! Turns layout files, a small line-oriented markup of pages and styled text lines,
//! into minimal PDF 1.4 documents set in Helvetica.
//!
//! ```
//! use layout2pdf::{parse_str, Document};
//!
//! let pages = parse_str("[cover] 14, red, center\nHello\n[/cover]\n");
//! let pdf = Document::new(pages).to_bytes().expect("can render");
//! assert!(pdf.starts_with(b"%PDF-1.4"));
//! assert!(pdf.ends_with(b"%%EOF\n"));
//! ```

mod colour;
pub use colour::*;

mod content;
pub use content::build_content;

mod document;
pub use document::*;

mod font;
pub use font::*;

/// Page geometry and line placement
pub mod layout;

pub mod pagesize;

mod parser;
pub use parser::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod style;
pub use style::*;

pub mod text;

mod units;
pub use units::*;

mod error;
pub use error::*;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// The layout file and PDF paths for a base name: `<name>.txt` and `<name>.pdf`.
/// The suffixes are appended, so a name that already contains a dot keeps it.
pub fn layout_paths<P: AsRef<Path>>(name: P) -> (PathBuf, PathBuf) {
    let with_suffix = |suffix: &str| {
        let mut path: OsString = name.as_ref().as_os_str().to_owned();
        path.push(suffix);
        PathBuf::from(path)
    };
    (with_suffix(".txt"), with_suffix(".pdf"))
}

/// Convert the layout file at `input` into a PDF at `output`, returning the number
/// of pages written.
///
/// The PDF is rendered completely in memory before `output` is created, so a
/// failure never leaves a partial file behind.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<usize, PDFError> {
    let input = input.as_ref();
    let pages = parse_file(input)?;
    if pages.is_empty() {
        return Err(PDFError::NoPages {
            path: input.to_path_buf(),
        });
    }

    let count = pages.len();
    Document::new(pages).save(output)?;
    Ok(count)
}

/// Convert `<name>.txt` into `<name>.pdf`, returning the path of the PDF
pub fn convert<P: AsRef<Path>>(name: P) -> Result<PathBuf, PDFError> {
    let (input, output) = layout_paths(name);
    convert_file(&input, &output)?;
    Ok(output)
}
