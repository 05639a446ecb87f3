//! Decoder and `rodio` sink construction for the engine thread.
//!
//! Load failures are ordinary values here, not panics: the player surfaces
//! them as an explicit error state instead of hanging in "loading".

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStream, Sink};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },
}

/// Open a fresh decoder for `path`.
pub(super) fn open_decoder(path: &Path) -> Result<Decoder<BufReader<File>>, EngineError> {
    let file = File::open(path).map_err(|source| EngineError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|source| EngineError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Create a paused `Sink` for `path` on the given output stream.
pub(super) fn create_sink(stream: &OutputStream, path: &Path) -> Result<Sink, EngineError> {
    let source = open_decoder(path)?;

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
