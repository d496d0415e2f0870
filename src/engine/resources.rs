use std::path::Path;

use image::RgbaImage;

/// Optional assets looked up next to the executable's working directory.
/// Everything here may be absent; callers fall back to procedural rendering
/// or silence.
#[derive(Default)]
pub struct ResourceManager {
    background: Option<RgbaImage>,
}

impl ResourceManager {
    pub fn load(background_path: impl AsRef<Path>) -> Self {
        let path = background_path.as_ref();
        let background = match image::open(path) {
            Ok(img) => {
                let img = img.to_rgba8();
                tracing::info!(
                    path = %path.display(),
                    width = img.width(),
                    height = img.height(),
                    "background image loaded"
                );
                Some(img)
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "no background image, using gradient");
                None
            }
        };
        Self { background }
    }

    pub fn background(&self) -> Option<&RgbaImage> {
        self.background.as_ref()
    }
}
