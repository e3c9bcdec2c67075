//! Background track-set loader
//!
//! Reads the manifest, then fetches and parses every listed track file
//! concurrently. A track that fails to read is dropped from the set with a
//! log line; only a missing or malformed manifest fails the whole load. The
//! returned set is installed atomically by `Session::finish_load`.

use anyhow::Context;
use trellis_core::manifest::{Manifest, TrackRef};
use trellis_core::track::parse_track_rows;
use trellis_core::{LoadError, LoadedSet, Track};

use crate::config::DataConfig;

/// Load the full track set described by the configured manifest.
pub async fn load_track_set(data: DataConfig) -> Result<LoadedSet, LoadError> {
    let manifest_path = data.data_dir.join(&data.manifest_file);
    log::info!("[LOAD] Reading manifest {:?}", manifest_path);

    let text = tokio::fs::read_to_string(&manifest_path)
        .await
        .map_err(|e| LoadError::ManifestUnavailable(format!("{}: {}", manifest_path.display(), e)))?;
    let manifest = Manifest::parse(&text)?;

    let refs = manifest.track_refs(&data.data_dir, data.base_path.as_deref());
    if refs.is_empty() {
        return Err(LoadError::NoValidEntries);
    }

    // Fetch all listed tracks concurrently; awaiting the handles in order
    // keeps the manifest's display order.
    let mut handles = Vec::with_capacity(refs.len());
    for track_ref in refs {
        handles.push(tokio::spawn(load_track(track_ref)));
    }

    let mut tracks = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(Ok(track)) => tracks.push(track),
            Ok(Err(e)) => log::warn!("[LOAD] Dropping track: {:#}", e),
            Err(e) => log::warn!("[LOAD] Dropping track: loader task failed: {}", e),
        }
    }

    log::info!("[LOAD] Track set ready: {} track(s)", tracks.len());
    Ok(LoadedSet {
        question: manifest.question,
        tracks,
    })
}

/// Load and parse one track file.
async fn load_track(track_ref: TrackRef) -> anyhow::Result<Track> {
    let text = tokio::fs::read_to_string(&track_ref.path)
        .await
        .with_context(|| format!("reading {}", track_ref.path.display()))?;

    let rows = parse_track_rows(&text);
    if rows.is_empty() {
        // Retained as a placeholder track, not an error
        log::info!("[LOAD] Track {:?} has no valid rows", track_ref.path);
    }

    Ok(Track::new(
        track_ref.path.to_string_lossy(),
        track_ref.title,
        rows,
    ))
}
