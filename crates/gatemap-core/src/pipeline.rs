//! The conversion pass and its file I/O.

use std::fs;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::dedup::dedup_first_seen;
use crate::emit::GateMapDocument;
use crate::error::{GatemapError, Result};
use crate::extract::extract_names;
use crate::gatemap::GateMap;
use crate::platform::PlatformDescription;
use crate::report::Report;

/// Result of converting one platform description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub document: GateMapDocument,
    pub report: Report,
}

/// Extract, deduplicate and map every instruction name of a platform.
#[instrument(skip_all)]
pub fn convert(platform: &PlatformDescription) -> Conversion {
    let raw = extract_names(platform);
    if raw.is_empty() {
        warn!("Platform description references no instructions");
    }
    let no_gates_found = raw.is_empty();
    let num_raw = raw.len();

    let unique = dedup_first_seen(raw);
    info!("Found {} distinct instruction names ({num_raw} references)", unique.len());

    let document = GateMapDocument::from_names(unique);
    let report = Report {
        no_gates_found,
        total: document.len(),
        unmapped: document.unmapped(),
    };
    info!(
        "Mapped {} of {} names, {} need manual editing",
        report.num_mapped(),
        report.total,
        report.unmapped.len()
    );

    Conversion { document, report }
}

/// Read and parse a platform description file.
pub fn read_platform(path: &Path) -> Result<PlatformDescription> {
    let source = read_source(path)?;
    serde_json::from_str(&source).map_err(|source| GatemapError::InputParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a gate-map document, replacing any existing file.
///
/// The document is rendered in memory first, so the file is only touched
/// once there is something complete to put in it.
pub fn write_gatemap(path: &Path, document: &GateMapDocument) -> Result<()> {
    let text = document.to_json()?;
    fs::write(path, text).map_err(|source| GatemapError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} entries to {}", document.len(), path.display());
    Ok(())
}

/// Read and load a (hand-finished) gate-map file.
pub fn read_gatemap(path: &Path) -> Result<GateMap> {
    let source = read_source(path)?;
    Ok(GateMap::from_json(&source)?)
}

fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(GatemapError::InputNotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| GatemapError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{GateDescriptor, Mapping};

    #[test]
    fn test_convert_reports_unmapped() {
        let platform = PlatformDescription::new(["x q0", "foobar q0", "cz q0,q1", "x q1"], []);
        let conversion = convert(&platform);
        assert_eq!(conversion.document.len(), 3);
        assert!(!conversion.report.no_gates_found);
        assert_eq!(conversion.report.total, 3);
        assert_eq!(
            conversion.report.unmapped.iter().collect::<Vec<_>>(),
            ["foobar"]
        );
        assert_eq!(
            conversion.document.get("cz"),
            Some(&Mapping::Resolved(GateDescriptor::Tag("C-Z")))
        );
    }

    #[test]
    fn test_convert_empty_platform() {
        let conversion = convert(&PlatformDescription::default());
        assert!(conversion.report.no_gates_found);
        assert!(conversion.report.is_clean());
        assert!(conversion.document.is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_platform(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, GatemapError::InputNotFound(_)));
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_read_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("platform.json");
        fs::write(&path, "{ not json").unwrap();
        let err = read_platform(&path).unwrap_err();
        assert!(matches!(err, GatemapError::InputParse { .. }));
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gates.json");
        let platform = PlatformDescription::new(["x q0", "rx q0", "measz q0"], []);
        let conversion = convert(&platform);
        write_gatemap(&path, &conversion.document).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, conversion.document.to_json().unwrap());

        let map = read_gatemap(&path).unwrap();
        assert_eq!(map.len(), 3);
        assert!(map.has_angle("rx"));
    }

    #[test]
    fn test_write_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("gates.json");
        let err = write_gatemap(&path, &GateMapDocument::default()).unwrap_err();
        assert!(matches!(err, GatemapError::Write { .. }));
    }

    #[test]
    fn test_write_onto_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let platform = PlatformDescription::new(["x q0"], []);
        let err = write_gatemap(dir.path(), &convert(&platform).document).unwrap_err();
        assert!(matches!(err, GatemapError::Write { .. }));
        assert!(dir.path().is_dir());
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gates.json");
        fs::write(&path, "stale contents that are longer than the new document").unwrap();
        write_gatemap(&path, &GateMapDocument::default()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_read_top_level_array_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("platform.json");
        fs::write(&path, r#"[["x q0", "cz q0,q1"]]"#).unwrap();
        let err = read_platform(&path).unwrap_err();
        assert!(matches!(err, GatemapError::InputParse { .. }));
    }
}
