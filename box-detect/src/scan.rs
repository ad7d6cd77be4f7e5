use opencv::core::Mat;
use opencv::prelude::*;

use crate::gap::Gap;

/// 线条图中前景像素的取值（二值化后的“白”）。
const FOREGROUND: u8 = 255;

/// 扫描起始行对图像高度的分母：跳过顶部 1/10 的页边，那里没有分隔线。
const TOP_MARGIN_DIVISOR: i32 = 10;

/// 沿图像水平中心的一列自上而下扫描，配对相邻分隔线之间的行区间。
///
/// 分隔线横贯整页，任何一列都会与全部分隔线相交，取中心列即可，
/// 无需二维连通域分析。行 `i` 为背景而行 `i + 1` 为前景记为一次过渡
/// （正落在一条分隔线的上缘）；第一次过渡没有前驱，只作为起点记录，
/// 此后每次过渡与上一次配对产出一个 [`Gap`] 并更新起点。
///
/// `floor_fraction` 是扫描下界占图像高度的比例，用来跳过底部页边。
pub fn scan_center_column(lines: &Mat, floor_fraction: f64) -> opencv::Result<Vec<Gap>> {
    let w = lines.cols();
    let h = lines.rows();
    let center = w / 2;
    let top = h / TOP_MARGIN_DIVISOR;
    // 循环体要读 i + 1 行，下界向内收一行，并夹在图像范围内。
    let floor = (((h as f64) * floor_fraction - 1.0).ceil() as i32).min(h - 1);

    let mut gaps = Vec::new();
    let mut last: Option<i32> = None;
    for i in top..floor {
        let current = *lines.at_2d::<u8>(i, center)?;
        let below = *lines.at_2d::<u8>(i + 1, center)?;
        if current == 0 && below == FOREGROUND {
            if let Some(start) = last {
                gaps.push(Gap::new(start, i));
            }
            last = Some(i);
        }
    }
    Ok(gaps)
}
