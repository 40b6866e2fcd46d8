// Configuration constants for catalog-pages
use std::path::Path;

/// Catalog the extractor reads.
pub const SOURCE_PDF: &str = "/home/ubuntu/upload/TK_2026_Catalog.pdf";

/// Directory the numbered page images land in.
pub const OUTPUT_DIR: &str = "/home/ubuntu/critzers-quote-system/temp/tk_catalog_pages";

// Rendering
pub const RENDER_DPI: f32 = 150.0;
pub const POINTS_PER_INCH: f32 = 72.0;

// Output encoding
pub const JPEG_QUALITY: u8 = 85;
pub const PAGE_FILE_PREFIX: &str = "catalog_page_";
pub const PAGE_FILE_EXTENSION: &str = "jpg";
pub const PAGE_INDEX_WIDTH: usize = 4;

// Where to look for libpdfium before falling back to the system copy
pub const DEFAULT_PDFIUM_DIR: &str = "./lib";

/// Knobs the extractor needs at run time. `Default` gives the fixed values above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractSettings {
    pub dpi: f32,
    pub jpeg_quality: u8,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            dpi: RENDER_DPI,
            jpeg_quality: JPEG_QUALITY,
        }
    }
}

pub fn source_pdf() -> &'static Path {
    Path::new(SOURCE_PDF)
}

pub fn output_dir() -> &'static Path {
    Path::new(OUTPUT_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_constants() {
        let settings = ExtractSettings::default();
        assert_eq!(settings.dpi, 150.0);
        assert_eq!(settings.jpeg_quality, 85);
    }

    #[test]
    fn fixed_paths_are_absolute() {
        assert!(source_pdf().is_absolute());
        assert!(output_dir().is_absolute());
        assert_eq!(source_pdf().extension().and_then(|e| e.to_str()), Some("pdf"));
    }
}
