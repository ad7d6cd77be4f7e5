use crate::OcrResult;
use crate::config::EngineConfig;
use crate::result::RegionRect;
use anyhow::Context;
use leptess::{LepTess, Variable};
use std::path::Path;

/// Page segmentation hint for one region, mirroring Tesseract's PSM values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentationMode {
    /// Treat the region as a uniform block of text (PSM 6).
    SingleBlock,
    /// Treat the region as a single text line (PSM 7).
    SingleLine,
}

impl SegmentationMode {
    /// Value for the `tessedit_pageseg_mode` engine variable.
    pub(crate) fn psm(self) -> &'static str {
        match self {
            SegmentationMode::SingleBlock => "6",
            SegmentationMode::SingleLine => "7",
        }
    }
}

/// High-level OCR engine wrapping a Tesseract handle.
///
/// Holds the initialized engine so it can be reused across multiple files
/// without paying the init cost each time. The native handle is released
/// when the engine is dropped.
pub struct OcrEngine {
    tess: LepTess,
}

impl OcrEngine {
    /// Initialize Tesseract. Failing here is fatal for a batch run: the
    /// engine is shared across all files, so there is no per-file recovery.
    pub fn new(config: &EngineConfig) -> OcrResult<Self> {
        let data_dir = config.data_dir().map(|p| p.to_string_lossy().into_owned());
        let tess = LepTess::new(data_dir.as_deref(), config.language()).with_context(|| {
            format!(
                "failed to initialize tesseract (language {:?})",
                config.language()
            )
        })?;
        Ok(Self { tess })
    }

    /// Load a full scan into the engine; regions of it are recognized
    /// afterwards with [`OcrEngine::recognize_region`].
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> OcrResult<()> {
        let path = path.as_ref();
        self.tess
            .set_image(path)
            .with_context(|| format!("failed to load image {:?} into tesseract", path))
    }

    /// Tell Tesseract the source resolution (pixels per inch) of the loaded
    /// image. Must be called after [`OcrEngine::load_image`].
    pub fn set_source_resolution(&mut self, ppi: i32) {
        self.tess.set_source_resolution(ppi);
    }

    /// Recognize the text inside one region of the loaded image.
    pub fn recognize_region(
        &mut self,
        region: RegionRect,
        mode: SegmentationMode,
    ) -> OcrResult<String> {
        self.tess
            .set_variable(Variable::TesseditPagesegMode, mode.psm())
            .context("failed to set page segmentation mode")?;
        self.tess
            .set_rectangle(region.x, region.y, region.width, region.height);
        self.tess.get_utf8_text().context("text recognition failed")
    }
}
