//! Pattern: Template Method
//! Category: Behavioral
//!
//! [`LoadFile::load_file`] fixes the order of the loading steps. Loaders
//! implement [`FileLoader`] to fill in the steps that vary:
//!
//! 1. `ensure_file_exists` - fixed
//! 2. [`FileLoader::load`] - required
//! 3. [`FileLoader::post_processing`] - optional hook, no-op by default
//! 4. separator line - fixed
//!
//! Because `LoadFile` is implemented for every `FileLoader` by a blanket
//! impl, no loader can reorder or replace the skeleton.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::trace;

pub const SEPARATOR: &str = "--------------------";

/// The primitive steps a loader provides.
pub trait FileLoader {
    fn filepath(&self) -> &Path;

    /// Format-specific loading.
    fn load(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Runs after `load`. Does nothing unless overridden.
    fn post_processing(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// The template method itself.
pub trait LoadFile {
    /// Run the loading steps, writing progress to stdout.
    fn load_file(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.load_file_to(&mut handle)
    }

    /// Run the loading steps, writing progress to `out`.
    fn load_file_to(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl<T: FileLoader + ?Sized> LoadFile for T {
    fn load_file_to(&self, out: &mut dyn Write) -> io::Result<()> {
        let path = self.filepath();

        trace!(path = %path.display(), step = "ensure_file_exists");
        ensure_file_exists(path);

        trace!(path = %path.display(), step = "load");
        self.load(out)?;

        trace!(path = %path.display(), step = "post_processing");
        self.post_processing(out)?;

        trace!(path = %path.display(), step = "separator");
        writeln!(out, "{}", SEPARATOR)
    }
}

// Placeholder: the demo loaders point at files that need not exist.
fn ensure_file_exists(_path: &Path) {}

#[derive(Debug, Clone)]
pub struct ExcelLoader {
    filepath: PathBuf,
}

impl ExcelLoader {
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
        }
    }
}

impl FileLoader for ExcelLoader {
    fn filepath(&self) -> &Path {
        &self.filepath
    }

    fn load(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Unique Excel file loading of {}", self.filepath.display())
    }
}

#[derive(Debug, Clone)]
pub struct PdfLoader {
    filepath: PathBuf,
}

impl PdfLoader {
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
        }
    }
}

impl FileLoader for PdfLoader {
    fn filepath(&self) -> &Path {
        &self.filepath
    }

    fn load(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Unique PDF file loading of {}", self.filepath.display())
    }

    fn post_processing(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "With some additional post_processing")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(loader: &dyn FileLoader) -> Vec<String> {
        let mut out = Vec::new();
        loader.load_file_to(&mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_excel_uses_default_hook() {
        assert_eq!(
            run(&ExcelLoader::new("file.xlsx")),
            vec!["Unique Excel file loading of file.xlsx", SEPARATOR]
        );
    }

    #[test]
    fn test_pdf_overrides_hook() {
        assert_eq!(
            run(&PdfLoader::new("file.pdf")),
            vec![
                "Unique PDF file loading of file.pdf",
                "With some additional post_processing",
                SEPARATOR,
            ]
        );
    }

    #[test]
    fn test_separator_is_twenty_dashes() {
        assert_eq!(SEPARATOR.len(), 20);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
    }

    /// Writes a marker line from each primitive step it provides.
    struct StepRecorder {
        path: PathBuf,
        with_hook: bool,
    }

    impl FileLoader for StepRecorder {
        fn filepath(&self) -> &Path {
            &self.path
        }

        fn load(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "load")
        }

        fn post_processing(&self, out: &mut dyn Write) -> io::Result<()> {
            if self.with_hook {
                writeln!(out, "post_processing")?;
            }
            Ok(())
        }
    }

    #[test]
    fn test_step_order_is_fixed() {
        for with_hook in [false, true] {
            let recorder = StepRecorder {
                path: PathBuf::from("steps.bin"),
                with_hook,
            };

            let mut expected = vec!["load"];
            if with_hook {
                expected.push("post_processing");
            }
            expected.push(SEPARATOR);
            assert_eq!(run(&recorder), expected);
        }
    }

    struct Failing;

    impl FileLoader for Failing {
        fn filepath(&self) -> &Path {
            Path::new("broken")
        }

        fn load(&self, _out: &mut dyn Write) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::InvalidData, "corrupt"))
        }
    }

    #[test]
    fn test_failed_load_skips_remaining_steps() {
        let mut out = Vec::new();
        assert!(Failing.load_file_to(&mut out).is_err());
        assert!(out.is_empty());
    }
}
