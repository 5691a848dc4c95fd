//! Photo descriptors and asset path resolution

use serde::Serialize;

/// Production deployment prefix (site hosted under a sub-path)
pub const PRODUCTION_BASE_PATH: &str = "/ethanfrome";

/// A single static image reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhotoEntry {
    pub source: &'static str,
    pub alt_text: &'static str,
}

impl PhotoEntry {
    pub const fn new(source: &'static str, alt_text: &'static str) -> Self {
        Self { source, alt_text }
    }

    /// File name portion of the source path
    pub fn file_name(&self) -> &'static str {
        self.source.rsplit('/').next().unwrap_or(self.source)
    }
}

/// Listing photos in display and navigation order
pub const LISTING_PHOTOS: [PhotoEntry; 9] = [
    PhotoEntry::new(
        "/assets/comp-wharton.png",
        "Isolated Starkfield farmhouse in deep winter, surrounded by bare trees and endless snow",
    ),
    PhotoEntry::new(
        "/assets/kitchen-table.png",
        "Sparse kitchen with a broken red pickle dish on worn wooden table",
    ),
    PhotoEntry::new(
        "/assets/winter-window.png",
        "Frosted window overlooking desolate snow-covered fields",
    ),
    PhotoEntry::new(
        "/assets/red-scarf.png",
        "Red scarf draped over a chair in dim lamplight",
    ),
    PhotoEntry::new(
        "/assets/sled-hill.png",
        "Steep hill descent leading toward a large elm tree",
    ),
    PhotoEntry::new(
        "/assets/comp-mill.png",
        "The nearby sawmill structure in winter",
    ),
    PhotoEntry::new("/assets/comp-church.png", "Starkfield church in the snow"),
    PhotoEntry::new(
        "/assets/comp-shadow.png",
        "Another view of the farmhouse in shadows",
    ),
    PhotoEntry::new(
        "/assets/extra-photo.png",
        "Additional property view showing the stark winter landscape",
    ),
];

pub const LOGO: PhotoEntry = PhotoEntry::new("/assets/logo22.png", "Starkfield Realty logo");

pub const QR_CODE: PhotoEntry =
    PhotoEntry::new("/assets/qrcode.png", "QR code to Starkfield listing");

/// Photos used by the print flyer (hero, window, extra)
pub const FLYER_PHOTOS: [PhotoEntry; 3] = [
    PhotoEntry::new(
        "/assets/sled-hill.png",
        "The notorious hill with elm tree at bottom",
    ),
    PhotoEntry::new("/assets/winter-window.png", "Frosted window view"),
    PhotoEntry::new("/assets/extra-photo.png", "Additional property view"),
];

/// Prepends the deployment path prefix to asset references
///
/// Both views resolve every asset through the same resolver so the
/// prefix is applied uniformly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetResolver {
    base_path: String,
}

impl AssetResolver {
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: normalize_base_path(base_path),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn resolve(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path)
    }

    pub fn photo(&self, photo: &PhotoEntry) -> String {
        self.resolve(photo.source)
    }
}

/// Strip trailing slashes and make sure a non-empty prefix starts with '/'
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_photo_order() {
        assert_eq!(LISTING_PHOTOS.len(), 9);
        assert_eq!(LISTING_PHOTOS[0].source, "/assets/comp-wharton.png");
        assert_eq!(LISTING_PHOTOS[4].file_name(), "sled-hill.png");
        assert_eq!(LISTING_PHOTOS[8].source, "/assets/extra-photo.png");
    }

    #[test]
    fn test_resolver_without_prefix() {
        let resolver = AssetResolver::default();
        assert_eq!(resolver.photo(&LOGO), "/assets/logo22.png");
    }

    #[test]
    fn test_resolver_applies_prefix() {
        let resolver = AssetResolver::new(PRODUCTION_BASE_PATH);
        assert_eq!(resolver.photo(&QR_CODE), "/ethanfrome/assets/qrcode.png");
        assert_eq!(
            resolver.photo(&LISTING_PHOTOS[2]),
            "/ethanfrome/assets/winter-window.png"
        );
    }

    #[test]
    fn test_resolver_normalizes_prefix() {
        assert_eq!(AssetResolver::new("ethanfrome/").base_path(), "/ethanfrome");
        assert_eq!(AssetResolver::new("  /").base_path(), "");
    }
}
