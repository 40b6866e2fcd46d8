//! Rasterize the pages of a PDF catalog into numbered JPEG files.

pub mod config;
pub mod encode;
pub mod error;
pub mod extract;
pub mod naming;
pub mod render;

pub use config::ExtractSettings;
pub use error::ExtractError;
pub use extract::{PageExtractor, run};
pub use render::{PdfiumRasterizer, Rasterizer};
