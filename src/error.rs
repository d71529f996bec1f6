use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred while rendering
    Io(#[from] std::io::Error),

    #[error("failed to open layout file: {}", path.display())]
    /// The layout file could not be opened or read
    OpenLayout {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no pages parsed from layout file: {}", path.display())]
    /// The layout file was read but did not contain a single page
    NoPages { path: PathBuf },

    #[error("document has no pages")]
    /// A document without pages can't be rendered into a valid PDF
    EmptyDocument,

    #[error("failed to open output PDF: {}", path.display())]
    /// The rendered PDF could not be written
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
