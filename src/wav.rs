//! WAV file output (requires the `wav-writer` feature).
//!
//! Buffers are written as RIFF/WAVE files with a PCM `fmt ` chunk describing
//! one channel of 16-bit integer samples, followed by a `data` chunk holding
//! the little-endian sample bytes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::SampleBuffer;

/// Channel count of every file written by this module.
pub const CHANNELS: u16 = 1;

/// Bit depth of every file written by this module.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Errors raised while writing a WAV file.
#[derive(Debug, Error)]
pub enum WavError {
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
}

/// WAV header parameters for a mono 16-bit PCM file at `sample_rate`.
pub fn spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Writes `buffer` to `path`, creating missing parent directories.
///
/// An existing file at `path` is replaced. A failure part-way through may
/// leave a truncated file behind.
///
/// # Examples
///
/// ```no_run
/// use dirge::{SynthesisRequest, render, wav};
///
/// let buffer = render(&SynthesisRequest::new(220.0, 55.0, 0.18, 0.25));
/// wav::write("sounds/death.wav", &buffer)?;
/// # Ok::<(), wav::WavError>(())
/// ```
pub fn write(path: impl AsRef<Path>, buffer: &SampleBuffer) -> Result<(), WavError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| WavError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let encode_err = |source| WavError::Encode {
        path: path.to_path_buf(),
        source,
    };

    let mut writer =
        hound::WavWriter::create(path, spec(buffer.sample_rate())).map_err(encode_err)?;
    for &sample in buffer.samples() {
        writer.write_sample(sample).map_err(encode_err)?;
    }
    writer.finalize().map_err(encode_err)?;

    info!(
        path = %path.display(),
        samples = buffer.len(),
        seconds = buffer.duration(),
        peak = buffer.peak(),
        data_bytes = buffer.len() * (BITS_PER_SAMPLE / 8) as usize,
        "wrote wav file"
    );
    Ok(())
}
