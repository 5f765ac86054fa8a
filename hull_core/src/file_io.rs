//! # File I/O Module
//!
//! Reads and writes loading-condition files:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Conditions are saved as `.hlc` files containing JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hull_core::calculations::StrengthInput;
//! use hull_core::condition::LoadingCondition;
//! use hull_core::file_io::{load_condition, save_condition};
//! use std::path::Path;
//!
//! let condition = LoadingCondition::new("MV Example", "Departure", "C/O", StrengthInput::default());
//! let path = Path::new("departure.hlc");
//!
//! save_condition(&condition, path).unwrap();
//! let loaded = load_condition(path).unwrap();
//! assert_eq!(loaded.meta.vessel, "MV Example");
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use log::debug;

use crate::condition::{LoadingCondition, SCHEMA_VERSION};
use crate::errors::{CalcError, CalcResult};

/// Save a condition to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize condition to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp over the target (atomic on most filesystems)
pub fn save_condition(condition: &LoadingCondition, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(condition)?;

    let tmp_path = path.with_extension("hlc.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!("Saved condition '{}' to {}", condition.meta.condition_name, path.display());
    Ok(())
}

/// Load a condition from a file.
///
/// # Returns
///
/// * `Ok(LoadingCondition)` - Successfully loaded condition
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_condition(path: &Path) -> CalcResult<LoadingCondition> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let condition: LoadingCondition = serde_json::from_str(&contents).map_err(|e| {
        CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    validate_version(&condition.meta.version)?;

    debug!(
        "Loaded condition '{}' ({} point loads) from {}",
        condition.meta.condition_name,
        condition.input.point_loads.len(),
        path.display()
    );
    Ok(condition)
}

/// Validate that a file version is compatible with the current schema.
///
/// Only major and minor are compared. A missing minor counts as 0 and any
/// patch or pre-release suffix (`0.1.0-beta`) is ignored.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let (file_major, file_minor) = major_minor(file_version).ok_or_else(mismatch)?;
    let (current_major, current_minor) = major_minor(SCHEMA_VERSION).ok_or_else(mismatch)?;

    if file_major != current_major {
        return Err(mismatch());
    }

    // In 0.x every minor bump may break the format
    if current_major == 0 && file_minor != current_minor {
        return Err(mismatch());
    }

    Ok(())
}

/// Leading numeric major and minor of a dotted version
fn major_minor(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.trim().split('.');
    let major = leading_number(parts.next()?)?;
    let minor = match parts.next() {
        Some(part) => leading_number(part)?,
        None => 0,
    };
    Some((major, minor))
}

fn leading_number(part: &str) -> Option<u32> {
    let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::StrengthInput;
    use crate::loads::PointLoad;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_condition_path(name: &str) -> PathBuf {
        temp_dir().join(format!("hullstress_test_{}.hlc", name))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_condition_path("roundtrip");

        let mut condition = LoadingCondition::new("MV Test", "Departure", "C/O", StrengthInput::default());
        condition.add_point_load(PointLoad::new("h1", 42.0, 12_000.0).with_label("No.1 Hold"));
        save_condition(&condition, &path).unwrap();

        let loaded = load_condition(&path).unwrap();
        assert_eq!(loaded.meta.vessel, "MV Test");
        assert_eq!(loaded.meta.condition_name, "Departure");
        assert_eq!(loaded.input, condition.input);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_condition_path("atomic");
        let tmp_path = path.with_extension("hlc.tmp");

        let condition = LoadingCondition::new("MV Test", "Arrival", "", StrengthInput::default());
        save_condition(&condition, &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let err = load_condition(&temp_condition_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_invalid_json() {
        let path = temp_condition_path("invalid_json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_condition(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_newer_file_is_rejected() {
        let path = temp_condition_path("newer");
        let mut condition = LoadingCondition::new("MV Test", "Departure", "", StrengthInput::default());
        condition.meta.version = "0.2.0".to_string();
        save_condition(&condition, &path).unwrap();

        let err = load_condition(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("0.0.9").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_version_suffixes_and_short_forms() {
        assert!(validate_version("0.1").is_ok());
        assert!(validate_version("0.1.0-beta").is_ok());
        assert!(validate_version("0.1.0+build.7").is_ok());
        assert!(validate_version("0.1-rc1").is_ok());
        assert!(validate_version(" 0.1.0 ").is_ok());
        // Missing minor reads as 0.0
        assert!(validate_version("0").is_err());
        assert!(validate_version("").is_err());
        assert!(validate_version("v0.1.0").is_err());
        assert!(validate_version("0.x").is_err());
        assert!(validate_version("0.2.0-beta").is_err());
    }

    #[test]
    fn test_major_minor() {
        assert_eq!(major_minor("0.1.0-beta"), Some((0, 1)));
        assert_eq!(major_minor("3"), Some((3, 0)));
        assert_eq!(major_minor("1.12.4"), Some((1, 12)));
        assert_eq!(major_minor(".1"), None);
    }
}
