//! All kinds of errors in the command-line tool.

use displaydoc::Display;
use std::{io, path::PathBuf};
use thiserror::Error;

/// All kinds of errors in the command-line tool.
#[derive(Debug, Display, Error)]
pub(crate) enum Error {
    /// {0}
    Eca(#[from] ecagen_lib::Error),
    /// Failed to read {path:?}: {source}
    Read { path: PathBuf, source: io::Error },
    /// Unknown configuration format of {0:?}, expected .json, .yaml, .yml or .toml.
    UnknownFormat(PathBuf),
    /// Invalid JSON configuration: {0}
    Json(#[from] serde_json::Error),
    /// Invalid YAML configuration: {0}
    Yaml(#[from] serde_yaml::Error),
    /// Invalid TOML configuration: {0}
    Toml(#[from] toml::de::Error),
    /// Failed to write the image: {0}
    Image(#[from] image::ImageError),
}
