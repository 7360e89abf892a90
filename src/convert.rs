use crate::error::{ConvertError, Result};
use crate::render::md::{to_markdown, RenderOptions};
use crate::report::load_reports;
use crate::tree::build_hierarchy;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Converts the Ginkgo JSON report at `report` into a markdown outline at
/// `export`. The export is only touched once the whole outline is rendered.
pub fn convert_report(report: &Path, export: &Path, options: &RenderOptions) -> Result<()> {
    if !report.exists() {
        return Err(ConvertError::ReportNotFound(report.display().to_string()));
    }

    let specs = load_reports(report)?;
    let tree = build_hierarchy(&specs);
    let markdown = to_markdown(&tree, options);
    write_atomic(export, markdown.as_bytes())?;
    tracing::info!(export = %export.display(), bytes = markdown.len(), "wrote markdown");
    Ok(())
}

/// Writes `bytes` to a uniquely named temp file next to `path` and renames
/// it over `path`. The temp file is removed if any step fails.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(write_err)?;
            parent
        }
        None => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .and_then(|()| set_export_permissions(tmp.path()))
        .map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn set_export_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_export_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
