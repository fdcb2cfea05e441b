//! Rename planning and application.
//!
//! Turns a file path into a source/target pair by normalizing its base name,
//! and applies the pair to the filesystem on request.

use std::fmt;
use std::path::{Path, PathBuf};

use pubdate_parse::Normalizer;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::PubdateError;

/// A pending rename from `source` to `target` in the same directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamePlan {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl RenamePlan {
    pub fn is_unchanged(&self) -> bool {
        self.source.file_name() == self.target.file_name()
    }
}

impl fmt::Display for RenamePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source.display(), self.target.display())?;
        if self.is_unchanged() {
            f.write_str(" [unchanged]")?;
        }
        Ok(())
    }
}

/// Work out where `path` should be renamed to.
pub fn plan(path: &Path, normalizer: &Normalizer) -> Result<RenamePlan, PubdateError> {
    if !path.exists() {
        return Err(PubdateError::NotFound(path.to_path_buf()));
    }

    let unchanged = RenamePlan {
        source: path.to_path_buf(),
        target: path.to_path_buf(),
    };

    let Some(file_name) = path.file_name() else {
        return Ok(unchanged);
    };
    let Some(name) = file_name.to_str() else {
        warn!(path = %path.display(), "File name is not valid UTF-8, leaving it alone");
        return Ok(unchanged);
    };
    let new_name = normalizer.normalize(name)?;

    if new_name == name {
        return Ok(unchanged);
    }

    Ok(RenamePlan {
        target: path.with_file_name(&new_name),
        ..unchanged
    })
}

/// Perform a planned rename. Unchanged plans are a no-op.
///
/// Without `overwrite`, an existing file at the target is left in place and
/// reported as `TargetExists`.
pub fn apply(plan: &RenamePlan, overwrite: bool) -> Result<(), PubdateError> {
    if plan.is_unchanged() {
        return Ok(());
    }

    if !overwrite && plan.target.exists() {
        warn!(path = %plan.target.display(), "Refusing to replace existing file");
        return Err(PubdateError::TargetExists(plan.target.clone()));
    }

    std::fs::rename(&plan.source, &plan.target).map_err(|source| PubdateError::Rename {
        from: plan.source.clone(),
        to: plan.target.clone(),
        source,
    })?;
    info!(from = %plan.source.display(), to = %plan.target.display(), "Renamed");
    Ok(())
}
