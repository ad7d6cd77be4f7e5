//! 答题卡答案框定位库。
//!
//! 输入一张灰度扫描件，输出四个自上而下排列的答案框裁剪矩形：
//! 先二值化，再用形态学开运算只留下横贯页面的分隔线，沿图像中心
//! 一列扫描出分隔线之间的行区间，从候选中选出最高的四个，最后按
//! 固定版式表换算成裁剪矩形。分隔线候选不足时整张图按“未检出”
//! 处理，不产出任何矩形。

mod detect;
mod gap;
mod layout;
mod morphology;
mod scan;

pub use detect::{DetectOptions, detect_answer_boxes};
pub use gap::{Gap, REGION_COUNT, select_top_regions};
pub use layout::{
    AnswerRegion, REGION_LAYOUT, RegionKind, RegionSpec, SEPARATOR_INSET, build_answer_regions,
    region_rect,
};
pub use morphology::{binarize, extract_horizontal_lines};
pub use scan::scan_center_column;
