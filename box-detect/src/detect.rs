use anyhow::{Context, Result, ensure};
use opencv::core::Mat;
use opencv::prelude::*;

use crate::gap::select_top_regions;
use crate::layout::{AnswerRegion, build_answer_regions};
use crate::morphology::{binarize, extract_horizontal_lines};
use crate::scan::scan_center_column;

/// 检测流程里可调的两个比例，其余常量属于版式本身，不开放配置。
#[derive(Debug, Clone, Copy)]
pub struct DetectOptions {
    /// 水平结构元素宽度占图像宽度的比例。
    pub line_width_fraction: f64,
    /// 中心列扫描下界占图像高度的比例（跳过底部页边）。
    pub scan_floor_fraction: f64,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            line_width_fraction: 0.35,
            scan_floor_fraction: 0.9,
        }
    }
}

/// 在灰度扫描件上定位 4 个答案框。
///
/// 候选分隔线不足 5 条时返回 `Ok(None)`，整张图按“未检出答案框”
/// 跳过；检出时返回的区域按页面自上而下排序，与版式表一一对应。
/// 所有中间矩阵都只活在本函数作用域内，任一退出路径上（包括提前
/// 拒绝）都随作用域释放。
pub fn detect_answer_boxes(
    gray: &Mat,
    options: &DetectOptions,
) -> Result<Option<Vec<AnswerRegion>>> {
    ensure!(
        gray.cols() > 0 && gray.rows() > 0,
        "输入图像尺寸非法：{}x{}",
        gray.cols(),
        gray.rows()
    );
    ensure!(
        gray.channels() == 1,
        "答案框检测要求单通道灰度图，得到 {} 通道",
        gray.channels()
    );

    let binary = binarize(gray).context("二值化失败")?;
    let lines = extract_horizontal_lines(&binary, options.line_width_fraction)
        .context("提取水平分隔线失败")?;
    let candidates =
        scan_center_column(&lines, options.scan_floor_fraction).context("扫描中心列失败")?;

    let Some(selected) = select_top_regions(candidates) else {
        return Ok(None);
    };
    Ok(Some(build_answer_regions(&selected, gray.cols())))
}
