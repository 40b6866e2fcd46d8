use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::ExtractSettings;
use crate::encode::save_jpeg;
use crate::error::ExtractError;
use crate::naming::page_file_path;
use crate::render::Rasterizer;

/// Renders every page of a PDF and saves them as numbered JPEGs.
pub struct PageExtractor<R: Rasterizer> {
    rasterizer: R,
    settings: ExtractSettings,
}

impl<R: Rasterizer> PageExtractor<R> {
    pub fn new(rasterizer: R) -> Self {
        Self::with_settings(rasterizer, ExtractSettings::default())
    }

    pub fn with_settings(rasterizer: R, settings: ExtractSettings) -> Self {
        Self { rasterizer, settings }
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Extract pages with progress printed to stdout. Returns the page count.
    pub fn extract(&self, pdf_path: &Path, output_dir: &Path) -> Result<usize> {
        let stdout = io::stdout();
        let mut progress = stdout.lock();
        self.extract_with_progress(pdf_path, output_dir, &mut progress)
    }

    /// Same as [`extract`](Self::extract), writing the progress lines to `progress`.
    ///
    /// A missing `pdf_path` fails with [`ExtractError::SourceMissing`] before
    /// anything is created. Pages already written stay on disk if a later one fails.
    pub fn extract_with_progress<W: Write>(
        &self,
        pdf_path: &Path,
        output_dir: &Path,
        progress: &mut W,
    ) -> Result<usize> {
        if !pdf_path.exists() {
            return Err(ExtractError::SourceMissing(pdf_path.to_path_buf()).into());
        }

        writeln!(progress, "Processing PDF: {}", pdf_path.display())?;

        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;

        writeln!(progress, "Converting PDF pages to images...")?;
        let pages = self.rasterizer.rasterize(pdf_path, self.settings.dpi)?;

        let total = pages.len();
        writeln!(progress, "Extracted {} pages from PDF", total)?;

        for (index, page) in pages.into_iter().enumerate() {
            let page_number = index + 1;
            let output_path = page_file_path(output_dir, page_number);

            save_jpeg(&page, &output_path, self.settings.jpeg_quality)?;
            writeln!(
                progress,
                "Saved page {}/{}: {}",
                page_number,
                total,
                output_path.display()
            )?;
        }

        Ok(total)
    }
}

/// Run one extraction and report the outcome on `out`. Returns the process exit code.
///
/// A missing source prints `Error: PDF not found at <path>` and yields 1 without
/// touching the rasterizer. Any other failure is returned as an error.
pub fn run<R: Rasterizer, W: Write>(
    extractor: &PageExtractor<R>,
    pdf_path: &Path,
    output_dir: &Path,
    out: &mut W,
) -> Result<i32> {
    match extractor.extract_with_progress(pdf_path, output_dir, out) {
        Ok(pages_extracted) => {
            writeln!(
                out,
                "\nCompleted! Extracted {} pages to {}",
                pages_extracted,
                output_dir.display()
            )?;
            Ok(0)
        }
        Err(e) => match e.downcast_ref::<ExtractError>() {
            Some(precondition) => {
                writeln!(out, "Error: {}", precondition)?;
                Ok(precondition.exit_code())
            }
            None => Err(e),
        },
    }
}
