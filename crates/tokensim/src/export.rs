//! CSV export to disk

use std::fmt;
use std::path::{Path, PathBuf};

use tokensim_core::IterationResult;
use tokensim_core::export::to_csv;

use crate::util::io::atomic_write;

#[derive(Debug)]
pub enum ExportError {
    EmptyPath,
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::EmptyPath => write!(f, "no file path given"),
            ExportError::Io { path, source } => {
                write!(f, "could not write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io { source, .. } => Some(source),
            ExportError::EmptyPath => None,
        }
    }
}

/// File name offered when exporting, stamped with the local time
pub fn default_file_name() -> String {
    let stamp = jiff::Zoned::now().strftime("%Y%m%d-%H%M%S");
    format!("tokensim-{stamp}.csv")
}

/// Default export path: `default_file_name()` inside `dir` when given
pub fn default_export_path(dir: Option<&Path>) -> PathBuf {
    match dir {
        Some(dir) => dir.join(default_file_name()),
        None => PathBuf::from(default_file_name()),
    }
}

/// Write `rows` as CSV to `path`, returning the number of data rows written
pub fn write_csv(path: &Path, rows: &[IterationResult]) -> Result<usize, ExportError> {
    if path.as_os_str().is_empty() {
        return Err(ExportError::EmptyPath);
    }

    atomic_write(path, &to_csv(rows)).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), rows = rows.len(), "Exported results to CSV");
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tokensim_core::{RunDraw, SimulationConfig, run_simulations};

    fn rows() -> Vec<IterationResult> {
        let mut draw = RunDraw {
            initial_valuation: 20.0,
            sell_percentage: 0.5,
            sell_valuation: 20.0,
        };
        run_simulations(&SimulationConfig::default(), &mut draw).unwrap()
    }

    #[test]
    fn test_write_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = rows();

        assert_eq!(write_csv(&path, &rows).unwrap(), 30);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 31);
        assert!(lines[0].starts_with("Iteration,ID,Valuation"));
        assert!(lines[1].starts_with("1,735_50@20,$20.00,50.00%,$7340.00,367,368,"));
        assert!(lines[30].starts_with("30,"));
    }

    #[test]
    fn test_write_csv_errors() {
        assert!(matches!(
            write_csv(Path::new(""), &rows()),
            Err(ExportError::EmptyPath)
        ));

        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("out.csv");
        let err = write_csv(&path, &rows()).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(err.to_string().contains("out.csv"));
    }

    #[test]
    fn test_default_export_path() {
        let name = default_file_name();
        assert!(name.starts_with("tokensim-"));
        assert!(name.ends_with(".csv"));

        let path = default_export_path(Some(Path::new("/tmp/exports")));
        assert!(path.starts_with("/tmp/exports"));
    }
}
