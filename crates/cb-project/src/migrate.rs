//! Bench file version migration.

use crate::schema::BenchFile;
use crate::{ProjectError, ProjectResult};

pub const LATEST_VERSION: u32 = 1;

/// Bring a loaded file up to [`LATEST_VERSION`].
///
/// Version 0 files are pre-versioned exports; their missing
/// `wireProperties` have already been defaulted by serde, so the upgrade
/// is just a stamp. Files newer than this build are refused.
pub fn migrate_to_latest(mut file: BenchFile) -> ProjectResult<BenchFile> {
    match file.version {
        0 => {
            file.version = LATEST_VERSION;
            Ok(file)
        }
        LATEST_VERSION => Ok(file),
        newer => Err(ProjectError::Migration {
            what: format!("file version {newer} is newer than supported {LATEST_VERSION}"),
        }),
    }
}
