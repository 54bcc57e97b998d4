//! Supported-format registry

use std::fmt;
use std::path::Path;

/// A supported input format, derived from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileType {
    /// Portable Document Format
    Pdf,
    /// Word document
    Docx,
    /// Plain text
    Txt,
    /// Markdown
    Markdown,
    /// HTML page
    Html,
    /// JPEG image (`.jpg` or `.jpeg`)
    Jpeg,
    /// PNG image
    Png,
    /// TIFF image
    Tiff,
    /// Bitmap image
    Bmp,
    /// Comma-separated values
    Csv,
    /// Excel workbook
    Xlsx,
    /// PowerPoint deck
    Pptx,
}

impl FileType {
    /// All supported formats
    pub const ALL: [FileType; 12] = [
        FileType::Pdf,
        FileType::Docx,
        FileType::Txt,
        FileType::Markdown,
        FileType::Html,
        FileType::Jpeg,
        FileType::Png,
        FileType::Tiff,
        FileType::Bmp,
        FileType::Csv,
        FileType::Xlsx,
        FileType::Pptx,
    ];

    /// Look up a format by extension, with or without the leading dot
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve_domain::FileType;
    ///
    /// assert_eq!(FileType::from_extension(".PDF"), Some(FileType::Pdf));
    /// assert_eq!(FileType::from_extension("jpeg"), Some(FileType::Jpeg));
    /// assert_eq!(FileType::from_extension("exe"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(FileType::Pdf),
            "docx" => Some(FileType::Docx),
            "txt" => Some(FileType::Txt),
            "md" => Some(FileType::Markdown),
            "html" => Some(FileType::Html),
            "jpg" | "jpeg" => Some(FileType::Jpeg),
            "png" => Some(FileType::Png),
            "tiff" => Some(FileType::Tiff),
            "bmp" => Some(FileType::Bmp),
            "csv" => Some(FileType::Csv),
            "xlsx" => Some(FileType::Xlsx),
            "pptx" => Some(FileType::Pptx),
            _ => None,
        }
    }

    /// Look up a format from a path's extension
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
            FileType::Txt => "txt",
            FileType::Markdown => "md",
            FileType::Html => "html",
            FileType::Jpeg => "jpg",
            FileType::Png => "png",
            FileType::Tiff => "tiff",
            FileType::Bmp => "bmp",
            FileType::Csv => "csv",
            FileType::Xlsx => "xlsx",
            FileType::Pptx => "pptx",
        }
    }

    /// Whether the format needs OCR to yield text
    pub fn is_image(&self) -> bool {
        matches!(
            self,
            FileType::Jpeg | FileType::Png | FileType::Tiff | FileType::Bmp
        )
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
