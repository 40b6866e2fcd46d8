use anyhow::{Context, Result, anyhow};
use image::{DynamicImage, RgbImage, RgbaImage};
use log::{debug, info};
use pdfium_render::prelude::*;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_PDFIUM_DIR, POINTS_PER_INCH};

/// Turns a whole PDF into page rasters, in document page order.
pub trait Rasterizer {
    fn rasterize(&self, pdf_path: &Path, dpi: f32) -> Result<Vec<RgbImage>>;
}

/// Pixel size of a page measured in PDF points when rendered at `dpi`.
pub fn pixel_dimensions(width_points: f32, height_points: f32, dpi: f32) -> (u32, u32) {
    let scale = dpi / POINTS_PER_INCH;
    let to_pixels = |points: f32| ((points * scale).round() as u32).max(1);
    (to_pixels(width_points), to_pixels(height_points))
}

/// Bind libpdfium from `lib_dir`, falling back to the system library.
pub fn bind_pdfium(lib_dir: &Path) -> Result<Pdfium> {
    let local = Pdfium::pdfium_platform_library_name_at_path(lib_dir);
    let bindings = match Pdfium::bind_to_library(&local) {
        Ok(bindings) => {
            debug!("Bound PDFium from {}", local.display());
            bindings
        }
        Err(local_err) => {
            debug!("No PDFium at {} ({}), trying system library", local.display(), local_err);
            Pdfium::bind_to_system_library().context("Could not load the PDFium library")?
        }
    };

    Ok(Pdfium::new(bindings))
}

/// PDFium-backed rasterizer. Built from a library directory, it binds on first use.
pub struct PdfiumRasterizer {
    lib_dir: PathBuf,
    pdfium: OnceCell<Pdfium>,
}

impl PdfiumRasterizer {
    pub fn new(pdfium: Pdfium) -> Self {
        Self {
            lib_dir: PathBuf::from(DEFAULT_PDFIUM_DIR),
            pdfium: OnceCell::from(pdfium),
        }
    }

    pub fn from_library_dir(lib_dir: &Path) -> Self {
        Self {
            lib_dir: lib_dir.to_path_buf(),
            pdfium: OnceCell::new(),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.pdfium.get().is_some()
    }

    fn pdfium(&self) -> Result<&Pdfium> {
        if let Some(pdfium) = self.pdfium.get() {
            return Ok(pdfium);
        }
        let pdfium = bind_pdfium(&self.lib_dir)?;
        Ok(self.pdfium.get_or_init(|| pdfium))
    }
}

impl Rasterizer for PdfiumRasterizer {
    fn rasterize(&self, pdf_path: &Path, dpi: f32) -> Result<Vec<RgbImage>> {
        let document = self
            .pdfium()?
            .load_pdf_from_file(pdf_path, None)
            .with_context(|| format!("Failed to open {}", pdf_path.display()))?;

        let pages = document.pages();
        info!("{} has {} pages", pdf_path.display(), pages.len());

        let mut images = Vec::with_capacity(pages.len() as usize);
        for (index, page) in pages.iter().enumerate() {
            let (width, height) = pixel_dimensions(page.width().value, page.height().value, dpi);

            let render_config = PdfRenderConfig::new().set_target_size(width as i32, height as i32);

            let bitmap = page
                .render_with_config(&render_config)
                .with_context(|| format!("Failed to render page {}", index + 1))?;

            let (bitmap_width, bitmap_height) = (bitmap.width() as u32, bitmap.height() as u32);
            debug!("Page {}: {}x{} px", index + 1, bitmap_width, bitmap_height);

            let rgba = RgbaImage::from_raw(bitmap_width, bitmap_height, bitmap.as_rgba_bytes())
                .ok_or_else(|| anyhow!("Page {} bitmap has an unexpected size", index + 1))?;

            images.push(DynamicImage::ImageRgba8(rgba).into_rgb8());
        }

        Ok(images)
    }
}
