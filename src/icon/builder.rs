use super::glyph::render_glyph;
use super::ICON_SIZES;
use crate::error::{MurmurError, Result};
use crate::paths::{exe_dir, ICON_FILE};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the multi-resolution application icon
#[derive(Debug, Clone)]
pub struct IconBuilder {
    path: PathBuf,
}

impl IconBuilder {
    /// Builder for `icon.ico` inside `base_dir`
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self::at(base_dir.as_ref().join(ICON_FILE))
    }

    /// Builder writing next to the running executable
    pub fn from_exe_dir() -> Result<Self> {
        Ok(Self::new(exe_dir()?))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render one canvas per entry of [`ICON_SIZES`], in order
    pub fn render() -> Result<Vec<RgbaImage>> {
        ICON_SIZES.iter().map(|&size| render_glyph(size)).collect()
    }

    /// Encode canvases as an ICO container with PNG-compressed entries
    ///
    /// The first image is the base entry; the rest follow in the given order.
    pub fn encode(images: &[RgbaImage]) -> Result<Vec<u8>> {
        let frames = images
            .iter()
            .map(|img| {
                IcoFrame::as_png(
                    img.as_raw(),
                    img.width(),
                    img.height(),
                    ExtendedColorType::Rgba8,
                )
            })
            .collect::<image::ImageResult<Vec<_>>>()
            .map_err(|e| MurmurError::Render(format!("Failed to encode icon frame: {e}")))?;

        let mut buf = Vec::new();
        IcoEncoder::new(&mut buf)
            .encode_images(&frames)
            .map_err(|e| MurmurError::Render(format!("Failed to encode icon: {e}")))?;

        Ok(buf)
    }

    /// Render, encode and overwrite the icon file, returning its path
    pub fn build(&self) -> Result<PathBuf> {
        let images = Self::render()?;
        let bytes = Self::encode(&images)?;

        fs::write(&self.path, &bytes)?;
        tracing::info!(
            "Wrote {} icon sizes ({} bytes) to {}",
            images.len(),
            bytes.len(),
            self.path.display()
        );

        Ok(self.path.clone())
    }
}
