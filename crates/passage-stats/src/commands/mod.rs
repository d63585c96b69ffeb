//! Command implementations.

use std::io::BufReader;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use passage_stats_core::{Config, Passage};

pub mod analyze;
pub mod count;
pub mod info;
pub mod sentence;
pub mod top;

/// Pick the passage file: the command-line argument, else the configured default.
pub fn passage_path(arg: Option<Utf8PathBuf>, config: &Config) -> Utf8PathBuf {
    arg.unwrap_or_else(|| config.passage_file.clone())
}

/// Read a passage file, rejecting it up front if it exceeds `max_bytes`.
///
/// Lines are joined with single spaces by [`Passage::from_reader`]. Any read
/// failure aborts with context and no text reaches the analysis.
pub fn read_passage_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<Passage> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > max as u64 {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let file =
        std::fs::File::open(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    Passage::from_reader(BufReader::new(file)).with_context(|| format!("failed to read {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_tmp(contents: &[u8]) -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("passage.txt")).unwrap();
        std::fs::write(&path, contents).unwrap();
        (tmp, path)
    }

    #[test]
    fn reads_and_joins_lines() {
        let (_tmp, path) = write_tmp(b"One line.\nTwo line.\n");
        let passage = read_passage_file(&path, None).unwrap();
        assert_eq!(passage.as_str(), "One line. Two line. ");
    }

    #[test]
    fn rejects_oversized_input() {
        let (_tmp, path) = write_tmp(b"0123456789");
        let err = read_passage_file(&path, Some(5)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn missing_file_has_context() {
        let err = read_passage_file(Utf8Path::new("/definitely/not/here.txt"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn invalid_utf8_fails() {
        let (_tmp, path) = write_tmp(&[0xc3, 0x28, b'\n']);
        assert!(read_passage_file(&path, None).is_err());
    }

    #[test]
    fn argument_beats_configured_file() {
        let config = Config::default();
        assert_eq!(passage_path(None, &config).as_str(), "passage.txt");
        assert_eq!(
            passage_path(Some(Utf8PathBuf::from("essay.txt")), &config).as_str(),
            "essay.txt"
        );
    }
}
