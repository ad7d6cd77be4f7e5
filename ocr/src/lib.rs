//! Thin wrapper around Tesseract (via `leptess`) that provides an
//! ergonomic, reusable OCR engine for the workspace.
//!
//! The engine holds the initialized Tesseract handle so a whole batch of
//! sheets can be recognized without paying the init cost per file. Regions
//! are recognized in place by restricting Tesseract to a rectangle of the
//! loaded image rather than cropping, and the page segmentation mode is
//! switched per region (block of text vs. single line).

mod config;
mod engine;
mod result;

pub use config::EngineConfig;
pub use engine::{OcrEngine, SegmentationMode};
pub use result::RegionRect;

/// Crate-wide result type.
pub type OcrResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::{EngineConfig, RegionRect, SegmentationMode};

    #[test]
    fn segmentation_modes_map_to_tesseract_psm() {
        assert_eq!(SegmentationMode::SingleBlock.psm(), "6");
        assert_eq!(SegmentationMode::SingleLine.psm(), "7");
    }

    #[test]
    fn config_defaults_to_vietnamese_with_no_data_dir() {
        let config = EngineConfig::default();
        assert_eq!(config.language(), "vie");
        assert!(config.data_dir().is_none());
    }

    #[test]
    fn config_builder_records_the_data_dir() {
        let config = EngineConfig::new("eng").with_data_dir("/usr/share/tessdata");
        assert_eq!(config.language(), "eng");
        assert_eq!(
            config.data_dir().map(|p| p.to_string_lossy().into_owned()),
            Some("/usr/share/tessdata".to_string())
        );
    }

    #[test]
    fn region_rect_is_plain_data() {
        let rect = RegionRect::new(100, 205, 800, 55);
        assert_eq!(rect.x, 100);
        assert_eq!(rect.y, 205);
        assert_eq!(rect.width, 800);
        assert_eq!(rect.height, 55);
    }
}
