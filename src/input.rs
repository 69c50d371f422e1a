//! Opening input sources.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Something the importers can read from.
pub trait InputSource {
    type Reader: std::io::Read;

    /// Human-readable description of where the data comes from.
    fn source(&self) -> String;

    /// Open the source for one read from start to end.
    fn open(&self) -> Result<Self::Reader>;
}

/// A dataset file on disk.
#[derive(Debug, Clone)]
pub struct InputFile {
    path: PathBuf,
}

impl InputFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InputSource for InputFile {
    type Reader = BufReader<File>;

    fn source(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> Result<Self::Reader> {
        let f = File::open(&self.path)
            .map_err(|e| Error::malformed(format!("failed to open {}: {e}", self.path.display())))?;
        Ok(BufReader::new(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::tempdir;

    #[test]
    fn open_existing_and_missing() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("areas.csv");
        std::fs::write(&p, "a,b,c\n").unwrap();

        let mut s = String::new();
        InputFile::new(&p).open().unwrap().read_to_string(&mut s).unwrap();
        assert_eq!(s, "a,b,c\n");

        let missing = InputFile::new(dir.path().join("nope.csv"));
        assert!(matches!(missing.open(), Err(Error::MalformedInput(_))));
    }
}
