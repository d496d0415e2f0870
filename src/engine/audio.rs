use std::fs;
use std::io::Cursor;
use std::path::Path;

use rodio::{OutputStream, OutputStreamHandle};

/// Plays the two feedback clips. Runs muted when the output device cannot be
/// opened or a clip file is missing; playback problems are logged and never
/// reach the game loop.
pub struct AudioEngine {
    output: Option<(OutputStream, OutputStreamHandle)>,
    hit_clip: Option<Vec<u8>>,
    end_clip: Option<Vec<u8>>,
}

impl AudioEngine {
    pub fn new(hit_path: impl AsRef<Path>, end_path: impl AsRef<Path>) -> Self {
        let output = match OutputStream::try_default() {
            Ok(pair) => Some(pair),
            Err(err) => {
                tracing::warn!(%err, "no audio output device, running muted");
                None
            }
        };
        Self {
            output,
            hit_clip: Self::load_clip(hit_path.as_ref()),
            end_clip: Self::load_clip(end_path.as_ref()),
        }
    }

    pub fn play_hit(&self) {
        self.play(self.hit_clip.as_ref(), "hit");
    }

    pub fn play_round_end(&self) {
        self.play(self.end_clip.as_ref(), "round-end");
    }

    fn play(&self, clip: Option<&Vec<u8>>, label: &str) {
        let (Some((_, handle)), Some(bytes)) = (self.output.as_ref(), clip) else {
            return;
        };
        match handle.play_once(Cursor::new(bytes.clone())) {
            Ok(sink) => sink.detach(),
            Err(err) => tracing::warn!(clip = label, %err, "sound playback failed"),
        }
    }

    fn load_clip(path: &Path) -> Option<Vec<u8>> {
        match fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "sound clip unavailable");
                None
            }
        }
    }
}
