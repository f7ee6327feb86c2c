use color_eyre::eyre::{Result, WrapErr};
use image::{ImageFormat, RgbaImage};
use strum::{Display, EnumIter};

/// The images bundled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum AssetId {
    Background,
    Bird,
    TopPipe,
    BottomPipe,
}

impl AssetId {
    pub fn file_name(&self) -> &'static str {
        match self {
            AssetId::Background => "flappybirdbg.png",
            AssetId::Bird => "flappybird.png",
            AssetId::TopPipe => "toppipe.png",
            AssetId::BottomPipe => "bottompipe.png",
        }
    }

    fn bytes(&self) -> &'static [u8] {
        match self {
            AssetId::Background => include_bytes!("../assets/flappybirdbg.png"),
            AssetId::Bird => include_bytes!("../assets/flappybird.png"),
            AssetId::TopPipe => include_bytes!("../assets/toppipe.png"),
            AssetId::BottomPipe => include_bytes!("../assets/bottompipe.png"),
        }
    }
}

/// Decoded sprites, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Sprites {
    background: RgbaImage,
    bird: RgbaImage,
    top_pipe: RgbaImage,
    bottom_pipe: RgbaImage,
}

impl Sprites {
    pub fn load() -> Result<Self> {
        Self::load_with(|id| id.bytes())
    }

    fn load_with<'a, F>(source: F) -> Result<Self>
    where
        F: Fn(AssetId) -> &'a [u8],
    {
        let decode = |id: AssetId| -> Result<RgbaImage> {
            let image = image::load_from_memory_with_format(source(id), ImageFormat::Png)
                .wrap_err_with(|| format!("failed to load asset {}", id.file_name()))?;
            tracing::debug!("Loaded {} ({}x{})", id.file_name(), image.width(), image.height());
            Ok(image.to_rgba8())
        };

        Ok(Sprites {
            background: decode(AssetId::Background)?,
            bird: decode(AssetId::Bird)?,
            top_pipe: decode(AssetId::TopPipe)?,
            bottom_pipe: decode(AssetId::BottomPipe)?,
        })
    }

    pub fn get(&self, id: AssetId) -> &RgbaImage {
        match id {
            AssetId::Background => &self.background,
            AssetId::Bird => &self.bird,
            AssetId::TopPipe => &self.top_pipe,
            AssetId::BottomPipe => &self.bottom_pipe,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_bundled_assets_decode() {
        let sprites = Sprites::load().unwrap();
        for id in AssetId::iter() {
            let image = sprites.get(id);
            assert!(image.width() > 0 && image.height() > 0, "{id} is empty");
        }
        assert_eq!(sprites.get(AssetId::Bird).dimensions(), (34, 24));
        assert_eq!(sprites.get(AssetId::TopPipe).dimensions(), (64, 512));
    }

    #[test]
    fn test_file_names_are_distinct() {
        let names: HashSet<_> = AssetId::iter().map(|id| id.file_name()).collect();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_broken_asset_is_fatal() {
        let err = Sprites::load_with(|id| if id == AssetId::TopPipe { &b"not a png"[..] } else { id.bytes() }).unwrap_err();
        assert_eq!(err.to_string(), "failed to load asset toppipe.png");
    }
}
