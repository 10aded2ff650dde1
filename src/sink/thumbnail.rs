// src/sink/thumbnail.rs
use image::{imageops::FilterType, RgbaImage};
use reqwest::blocking::Client;

use crate::{
    config::{consts::THUMBNAIL_SIZE, options::BrowserOptions},
    core::{error::FetchError, net},
    model::FetchResult,
};

/// Picture slot of a presented result.
#[derive(Clone, Debug)]
pub enum Thumbnail {
    /// Decoded and resized to `THUMBNAIL_SIZE` square.
    Image(RgbaImage),
    /// No usable URL in the result.
    Absent,
    /// Download or decode failed; shown inline instead of the picture.
    Failed(String),
}

impl Thumbnail {
    /// Text shown where no picture is displayed.
    pub fn label(&self) -> Option<String> {
        match self {
            Thumbnail::Image(_) => None,
            Thumbnail::Absent => Some(s!("No image available")),
            Thumbnail::Failed(e) => Some(format!("Error loading image: {e}")),
        }
    }
}

/// Fetches raw image bytes.
pub trait ImageLoader: Send + Sync {
    fn load(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

pub struct HttpImageLoader {
    client: Client,
}

impl HttpImageLoader {
    pub fn new(opts: &BrowserOptions) -> Result<Self, FetchError> {
        Ok(Self { client: net::isolated_client(opts)? })
    }
}

impl ImageLoader for HttpImageLoader {
    fn load(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        net::get_bytes(&self.client, url)
    }
}

pub fn decode(bytes: &[u8]) -> Result<RgbaImage, image::ImageError> {
    let img = image::load_from_memory(bytes)?;
    Ok(img
        .resize_exact(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Triangle)
        .to_rgba8())
}

/// Resolve the result's picture field into a thumbnail. Never fails.
pub fn resolve(result: &FetchResult, loader: &dyn ImageLoader) -> Thumbnail {
    let Some(url) = result.picture_url() else {
        return Thumbnail::Absent;
    };
    let bytes = match loader.load(url) {
        Ok(b) => b,
        Err(e) => {
            loge!("Thumbnail: download failed {url}: {e}");
            return Thumbnail::Failed(e.to_string());
        }
    };
    match decode(&bytes) {
        Ok(img) => Thumbnail::Image(img),
        Err(e) => {
            loge!("Thumbnail: decode failed {url}: {e}");
            Thumbnail::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Platform, ProviderOutput};
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn png(w: u32, h: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(w, h, Rgba([200, 10, 10, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    struct Bytes(Vec<u8>);
    impl ImageLoader for Bytes {
        fn load(&self, _url: &str) -> Result<Vec<u8>, FetchError> { Ok(self.0.clone()) }
    }

    #[test]
    fn decode_resizes_to_square() {
        let img = decode(&png(320, 240)).unwrap();
        assert_eq!(img.dimensions(), (THUMBNAIL_SIZE, THUMBNAIL_SIZE));
    }

    #[test]
    fn undecodable_bytes_fail_inline() {
        let res = FetchResult::from_output(
            Platform::Facebook,
            "u",
            ProviderOutput::Single(record! { "Profile Picture" => "https://cdn/p.jpg" }),
            0.0,
        );
        let t = resolve(&res, &Bytes(b"not an image".to_vec()));
        assert!(matches!(t, Thumbnail::Failed(_)));
        assert!(t.label().unwrap().starts_with("Error loading image: "));
    }
}
