use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;

pub const EMPLOYEES_FILE: &str = "employees.json";
pub const ATTENDANCE_FILE: &str = "attendance.json";

/// Employees and attendance records exported from the sheet. Read-only for
/// the lifetime of the process.
#[derive(Debug, Default)]
pub struct Directory {
    pub employees: Vec<Employee>,
    pub records: Vec<AttendanceRecord>,
}

impl Directory {
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }
}

fn load_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        log::warn!("{} not found, starting with an empty list", path.display());
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("malformed {}", path.display()))
}

pub fn init_directory(data_dir: &Path) -> Result<Directory> {
    let employees: Vec<Employee> = load_list(&data_dir.join(EMPLOYEES_FILE))?;
    let records: Vec<AttendanceRecord> = load_list::<AttendanceRecord>(&data_dir.join(ATTENDANCE_FILE))?
        .into_iter()
        .map(AttendanceRecord::normalized)
        .collect();

    log::info!(
        "Directory loaded: {} employees, {} attendance records",
        employees.len(),
        records.len()
    );

    Ok(Directory { employees, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_files_give_empty_directory() {
        let temp = tempdir().unwrap();
        let directory = init_directory(temp.path()).unwrap();
        assert!(directory.employees.is_empty());
        assert!(directory.records.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(EMPLOYEES_FILE), "[{").unwrap();
        assert!(init_directory(temp.path()).is_err());
    }

    #[test]
    fn bundled_snapshot_loads() {
        let directory = init_directory(Path::new(env!("CARGO_MANIFEST_DIR")).join("data").as_path()).unwrap();
        assert_eq!(directory.employees.len(), 5);
        assert_eq!(directory.records.len(), 5);
        assert_eq!(directory.employee("2").unwrap().name, "Monish Gupta");
        assert!(directory.employee("99").is_none());
    }
}
