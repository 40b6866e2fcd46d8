use anyhow::Result;
use catalog_pages::config::{self, DEFAULT_PDFIUM_DIR};
use catalog_pages::{PageExtractor, PdfiumRasterizer, run};
use clap::Parser;
use std::io;
use std::path::PathBuf;

/// Convert the catalog PDF into one JPEG per page
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the PDFium shared library
    #[arg(long, value_name = "DIR", env = "PDFIUM_LIB_DIR", default_value = DEFAULT_PDFIUM_DIR)]
    pdfium_lib: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // PDFium is only bound once the source file is known to exist
    let extractor = PageExtractor::new(PdfiumRasterizer::from_library_dir(&cli.pdfium_lib));

    let code = run(&extractor, config::source_pdf(), config::output_dir(), &mut io::stdout().lock())?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
