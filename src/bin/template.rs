//! Template Method demo: two loaders sharing one loading skeleton.
//!
//! Run with: cargo run --bin template

use anyhow::{Context, Result};
use colored::Colorize;
use design_patterns::logging;
use design_patterns::template::{ExcelLoader, LoadFile, PdfLoader};

fn main() -> Result<()> {
    logging::init();
    println!("{}", "=== Template Method ===".bold());

    let excel = ExcelLoader::new("file.xlsx");
    excel.load_file().context("failed to load excel file")?;

    let pdf = PdfLoader::new("file.pdf");
    pdf.load_file().context("failed to load pdf file")?;

    Ok(())
}
