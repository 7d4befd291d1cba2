//! Output path validation and the final file write.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{FixtureError, FixtureResult};

/// Pick the single output path out of the command line arguments.
///
/// The path is accepted when exactly one argument was given and the
/// folder it points into exists. A bare file name points into the
/// current directory.
pub fn validate_output_path(args: &[PathBuf]) -> FixtureResult<&Path> {
    let [path] = args else {
        return Err(FixtureError::InvalidArguments);
    };

    let parent = match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => return Err(FixtureError::InvalidOutputPath),
    };

    if !parent.is_dir() {
        return Err(FixtureError::InvalidOutputPath);
    }

    Ok(path)
}

/// Create or truncate `path` and write `contents` to it.
pub fn write_calendar(path: &Path, contents: &str) -> FixtureResult<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(())
}
