use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SCORE_FILE: &str = "highscore.dat";

/// Best-score persistence: one 4-byte big-endian signed integer, overwritten
/// in place. Reads never fail toward the caller; a missing or corrupt file is
/// simply "no prior score".
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> u32 {
        match fs::read(&self.path) {
            Ok(bytes) => match bytes.get(..4) {
                Some(raw) => {
                    let value = i32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]);
                    if value < 0 {
                        tracing::debug!(
                            path = %self.path.display(),
                            value,
                            "negative stored score, treating as none"
                        );
                        0
                    } else {
                        value as u32
                    }
                }
                None => {
                    tracing::debug!(
                        path = %self.path.display(),
                        len = bytes.len(),
                        "truncated score file, treating as none"
                    );
                    0
                }
            },
            Err(err) => {
                tracing::debug!(path = %self.path.display(), %err, "no stored score");
                0
            }
        }
    }

    pub fn save(&self, value: u32) {
        let raw = (value.min(i32::MAX as u32) as i32).to_be_bytes();
        if let Err(err) = fs::write(&self.path, raw) {
            tracing::warn!(
                path = %self.path.display(),
                value,
                %err,
                "failed to save high score"
            );
        }
    }
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_FILE)
    }
}
