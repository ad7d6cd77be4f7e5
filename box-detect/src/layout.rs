use opencv::core::Rect;

use crate::gap::{Gap, REGION_COUNT};

/// 答案框的版式类别，决定 OCR 按整块还是按单行识别该区域。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// 多行答案块（首个区域，版式上更宽）。
    Block,
    /// 单行答案（其余区域）。
    Line,
}

/// 单个答案框的版式参数，横向位置与宽度按图像宽度的比例描述。
#[derive(Debug, Clone, Copy)]
pub struct RegionSpec {
    pub x_fraction: f64,
    pub width_fraction: f64,
    pub kind: RegionKind,
}

/// 固定版式表：第 0 个区域是较宽的答案块，其余三个是窄的单行答案。
/// 换一种答题卡版式只需改这张表，检测算法不用动。
pub const REGION_LAYOUT: [RegionSpec; REGION_COUNT] = [
    RegionSpec {
        x_fraction: 0.1,
        width_fraction: 0.8,
        kind: RegionKind::Block,
    },
    RegionSpec {
        x_fraction: 0.2,
        width_fraction: 0.6,
        kind: RegionKind::Line,
    },
    RegionSpec {
        x_fraction: 0.2,
        width_fraction: 0.6,
        kind: RegionKind::Line,
    },
    RegionSpec {
        x_fraction: 0.2,
        width_fraction: 0.6,
        kind: RegionKind::Line,
    },
];

/// 裁剪区域相对分隔线的纵向内缩（像素），避免把分隔线本身框进来。
pub const SEPARATOR_INSET: i32 = 5;

/// 检出的答案框：裁剪矩形加上它在版式表里的类别。
#[derive(Debug, Clone, Copy)]
pub struct AnswerRegion {
    pub rect: Rect,
    pub kind: RegionKind,
}

/// 按版式参数把一个行区间换算成裁剪矩形。
pub fn region_rect(spec: &RegionSpec, gap: Gap, image_width: i32) -> Rect {
    Rect::new(
        (image_width as f64 * spec.x_fraction) as i32,
        gap.start() + SEPARATOR_INSET,
        (image_width as f64 * spec.width_fraction) as i32,
        gap.height() - SEPARATOR_INSET,
    )
}

/// 把自上而下排好序的 4 个行区间换算成 4 个答案框，顺序一一对应。
pub fn build_answer_regions(gaps: &[Gap], image_width: i32) -> Vec<AnswerRegion> {
    REGION_LAYOUT
        .iter()
        .zip(gaps)
        .map(|(spec, &gap)| AnswerRegion {
            rect: region_rect(spec, gap, image_width),
            kind: spec.kind,
        })
        .collect()
}
