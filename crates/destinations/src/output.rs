//! JSON output document.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DestinationError, Result};
use crate::record::DestinationRecord;

/// Render records as a pretty JSON array (2-space indent) with a trailing
/// newline.
pub fn to_json(records: &[DestinationRecord]) -> Result<String> {
    let mut text = serde_json::to_string_pretty(records)?;
    text.push('\n');
    Ok(text)
}

/// Write records to `path`, replacing whatever was there.
///
/// The document is rendered in full first and written to a sibling temp
/// file that is then renamed over the target, so a failed run never leaves
/// a truncated file behind.
pub fn write_records(path: impl AsRef<Path>, records: &[DestinationRecord]) -> Result<()> {
    let path = path.as_ref();
    let text = to_json(records)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| DestinationError::io(parent, e))?;
        }
    }

    let tmp = temp_path(path);
    fs::write(&tmp, text.as_bytes()).map_err(|e| DestinationError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(DestinationError::io(path, e));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "destinations.json".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RawRow;
    use crate::record::RecordBuilder;
    use crate::schema::ColumnMap;

    fn records() -> Vec<DestinationRecord> {
        let columns = ColumnMap::v2();
        let builder = RecordBuilder::new(&columns);
        vec![
            builder
                .build(&RawRow::from_pairs(0, &[("City", "Austin"), ("State", "TX"), ("Gas", "$2.95")]))
                .record,
        ]
    }

    #[test]
    fn test_to_json_format() {
        let text = to_json(&records()).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\": \"austin-texas\","));
        assert!(text.ends_with("]\n"));
        assert!(text.contains("\"gasPrice\": 2.95,"));
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(to_json(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn test_write_overwrites_and_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("destinations.json");

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale content that is much longer than the real output ...").unwrap();

        write_records(&path, &records()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, to_json(&records()).unwrap());
        assert!(!temp_path(&path).exists());

        let fresh = dir.path().join("a").join("b").join("out.json");
        write_records(&fresh, &[]).unwrap();
        assert_eq!(fs::read_to_string(&fresh).unwrap(), "[]\n");
    }
}
