//! Flat-file storage codec.
//!
//! One record per line: `<slug> <url>`. The URL is everything after the first
//! space, so it may itself contain spaces but never a line break.
//!
//! ```text
//! abc12 http://example.com
//! ab https://example.com/with a space
//! ```

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::domain::Mappings;
use crate::domain::entities::strip_line_breaks;
use crate::domain::slug::generate_slug;
use crate::error::StoreError;

/// Parsed storage file plus the number of lines that were dropped.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub mappings: Mappings,
    pub total_lines: usize,
    pub skipped_lines: usize,
}

/// Parses storage file contents.
///
/// Lines without a space, or with nothing before the first space, are
/// skipped.
pub fn parse(contents: &str) -> LoadReport {
    let mut report = LoadReport::default();

    for line in contents.lines() {
        report.total_lines += 1;

        match line.split_once(' ') {
            Some((slug, url)) if !slug.is_empty() => {
                report.mappings.restore(slug.to_string(), url.to_string());
            }
            _ => report.skipped_lines += 1,
        }
    }

    report
}

/// Renders every mapping as one line. Line order follows map iteration order.
pub fn serialize(mappings: &Mappings) -> String {
    let mut out = String::new();
    for (slug, url) in mappings.iter() {
        out.push_str(slug);
        out.push(' ');
        out.push_str(&strip_line_breaks(url));
        out.push('\n');
    }
    out
}

/// Reads the storage file, reporting skipped lines.
///
/// A missing file yields an empty store.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the file exists but cannot be read.
pub async fn load_with_report(path: &Path) -> Result<LoadReport, StoreError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Storage file not found, starting empty");
            return Ok(LoadReport::default());
        }
        Err(e) => return Err(e.into()),
    };

    let report = parse(&String::from_utf8_lossy(&bytes));

    if report.skipped_lines > 0 {
        warn!(
            path = %path.display(),
            skipped = report.skipped_lines,
            "Skipped malformed storage lines"
        );
    }

    Ok(report)
}

/// Reads the storage file. See [`load_with_report`].
pub async fn load(path: &Path) -> Result<Mappings, StoreError> {
    Ok(load_with_report(path).await?.mappings)
}

/// Atomically replaces the storage file with the full contents of `mappings`.
///
/// The data goes to a temporary file in the target's directory which is then
/// renamed over the target, so readers see either the old or the new file,
/// never a partial one.
///
/// # Errors
///
/// Returns the underlying I/O error; the target file is left as it was.
pub async fn persist(path: &Path, mappings: &Mappings) -> io::Result<()> {
    let target = std::path::absolute(path)?;
    let tmp = temp_path_for(&target)?;

    if let Err(e) = write_file(&tmp, serialize(mappings).as_bytes()).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e);
    }

    if let Err(e) = fs::rename(&tmp, &target).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e);
    }

    Ok(())
}

async fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(contents).await?;
    file.sync_all().await
}

/// Sibling path such as `/data/.urls.Xy3k9QpL2aZm.tmp`.
fn temp_path_for(target: &Path) -> io::Result<PathBuf> {
    let dir = target.parent().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "storage path has no parent")
    })?;
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = generate_slug(&mut rand::rng(), 12);

    Ok(dir.join(format!(".{name}.{suffix}.tmp")))
}
