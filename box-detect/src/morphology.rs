use opencv::core::{self, Mat, Point, Size};
use opencv::imgproc;
use opencv::prelude::*;

/// 高斯自适应阈值的邻域窗口边长（像素）。
const ADAPTIVE_BLOCK_SIZE: i32 = 13;

/// 阈值相对局部均值的偏置，负值把略高于邻域的像素也划入前景。
const ADAPTIVE_BIAS: f64 = -2.0;

/// 把灰度扫描件转成黑底白前景的二值图。
///
/// 纸面是浅色、墨迹是深色，先反色把墨迹翻成高亮，再做二值化。
/// 扫描件的光照在页面各处并不均匀，所以用高斯加权的局部自适应阈值，
/// 而不是单一全局阈值。
pub fn binarize(gray: &Mat) -> opencv::Result<Mat> {
    let mut inverted = Mat::default();
    core::bitwise_not(gray, &mut inverted, &core::no_array())?;

    let mut binary = Mat::default();
    imgproc::adaptive_threshold(
        &inverted,
        &mut binary,
        255.0,
        imgproc::ADAPTIVE_THRESH_GAUSSIAN_C,
        imgproc::THRESH_BINARY,
        ADAPTIVE_BLOCK_SIZE,
        ADAPTIVE_BIAS,
    )?;
    Ok(binary)
}

/// 只保留横贯页面的细长水平结构，即答案框之间的分隔线。
///
/// 结构元素宽为图像宽度的 `width_fraction`、高 1 像素：文字笔画和噪点
/// 都远比它窄，腐蚀一遍就被剔除；再用同一元素膨胀，把幸存的分隔线
/// 恢复到接近原来的长度。先腐蚀后膨胀即形态学开运算。
pub fn extract_horizontal_lines(binary: &Mat, width_fraction: f64) -> opencv::Result<Mat> {
    let element_width = ((binary.cols() as f64) * width_fraction) as i32;
    let element = imgproc::get_structuring_element(
        imgproc::MORPH_RECT,
        Size::new(element_width.max(1), 1),
        Point::new(-1, -1),
    )?;

    let mut eroded = Mat::default();
    imgproc::erode(
        binary,
        &mut eroded,
        &element,
        Point::new(-1, -1),
        1,
        core::BORDER_CONSTANT,
        imgproc::morphology_default_border_value()?,
    )?;

    let mut opened = Mat::default();
    imgproc::dilate(
        &eroded,
        &mut opened,
        &element,
        Point::new(-1, -1),
        1,
        core::BORDER_CONSTANT,
        imgproc::morphology_default_border_value()?,
    )?;
    Ok(opened)
}
