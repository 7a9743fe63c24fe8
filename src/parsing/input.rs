//! Opening input files.
//!
//! Inputs are plain text, or gzip/bgzip compressed when the path ends in
//! `.gz` or `.bgz`.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open an input file for line-by-line reading.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened.
pub fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        // bgzip output is a series of gzip members
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("run1.txt.gz")));
        assert!(is_gzipped(Path::new("RUN1.TXT.BGZ")));
        assert!(!is_gzipped(Path::new("run1.txt")));
    }

    #[test]
    fn test_open_plain_and_gzipped() {
        let dir = tempfile::tempdir().unwrap();

        let plain = dir.path().join("plain.txt");
        std::fs::write(&plain, "Ref ACGT 4\n").unwrap();
        let lines: Vec<String> = open_input(&plain).unwrap().lines().map(Result::unwrap).collect();
        assert_eq!(lines, vec!["Ref ACGT 4"]);

        let gz = dir.path().join("packed.txt.gz");
        let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(b"Ref ACGT 4\nseq .G.. 4\n").unwrap();
        encoder.finish().unwrap();
        let lines: Vec<String> = open_input(&gz).unwrap().lines().map(Result::unwrap).collect();
        assert_eq!(lines, vec!["Ref ACGT 4", "seq .G.. 4"]);
    }

    #[test]
    fn test_open_missing_file() {
        assert!(open_input(Path::new("/nonexistent/seqdiff/input.txt")).is_err());
    }
}
