use super::Marker;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render markers as a pretty-printed JSON array
pub fn markers_to_json_string(markers: &[Marker]) -> Result<String> {
    serde_json::to_string_pretty(markers).context("Failed to serialize markers")
}

/// Write markers to a JSON file as a single array
///
/// # Arguments
/// * `path` - Output file path
/// * `markers` - Markers to write, in order
pub fn write_markers_json(path: &Path, markers: &[Marker]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create marker file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, markers)
        .with_context(|| format!("Failed to write markers to {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}
