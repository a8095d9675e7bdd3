//! Loader for RON content files at startup.

use std::fs;
use std::path::{Path, PathBuf};

use ron::Options;
use thiserror::Error;

use super::data::*;

/// Error type for content loading failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to load {}: IO error: {source}", .file.display())]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load {}: Parse error: {source}", .file.display())]
    Parse {
        file: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: path.to_path_buf(),
        source,
    })
}

/// Parse RON text into `T`, attributing errors to `path`.
pub fn parse_ron<T>(path: &Path, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|source| ContentLoadError::Parse {
            file: path.to_path_buf(),
            source,
        })
}

/// Load a RON file containing a DataFile<T> wrapper.
pub fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read(path)?;
    let data: DataFile<T> = parse_ron(path, &contents)?;
    Ok(data.items)
}

/// Load a single RON struct (not wrapped in DataFile).
pub fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read(path)?;
    parse_ron(path, &contents)
}

pub fn load_enemies(base_path: &Path) -> Result<Vec<EnemyDef>, ContentLoadError> {
    load_data_file(&base_path.join("enemies.ron"))
}

pub fn load_dungeon_defaults(base_path: &Path) -> Result<DungeonDefaults, ContentLoadError> {
    load_single_file(&base_path.join("dungeon.ron"))
}
