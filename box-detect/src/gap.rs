/// 相邻两条分隔线之间的行区间，即一个候选答题区域的纵向范围。
///
/// 构造时要求 `start <= end`，构造后不可变。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    start: i32,
    end: i32,
}

impl Gap {
    /// 创建一个行区间。`start` 大于 `end` 视为调用方的编程错误。
    pub fn new(start: i32, end: i32) -> Self {
        assert!(start <= end, "行区间要求 start <= end，得到 {start}..{end}");
        Self { start, end }
    }

    /// 区间起始行（上一条分隔线的检出行）。
    pub fn start(&self) -> i32 {
        self.start
    }

    /// 区间结束行（当前分隔线的检出行）。
    pub fn end(&self) -> i32 {
        self.end
    }

    /// 区间高度（像素行数），选取候选时的排序依据。
    pub fn height(&self) -> i32 {
        self.end - self.start
    }
}

/// 每张答题卡固定包含的答案框数量。
pub const REGION_COUNT: usize = 4;

/// 接受一张图所需的最少候选数：比答案框数量多一个，容忍一个伪候选。
const MIN_CANDIDATES: usize = REGION_COUNT + 1;

/// 从候选集中选出高度最大的 4 个行区间，再按页面自上而下排序。
///
/// 候选不足 5 个时认为图像结构不完整，返回 `None`，整张图跳过。
/// 选取分两步：先按高度降序稳定排序取前 4（高度相同的候选保持扫描
/// 顺序），再按 `start` 升序恢复空间顺序；高度排名与空间顺序无关，
/// 这一步不能省。
pub fn select_top_regions(mut candidates: Vec<Gap>) -> Option<Vec<Gap>> {
    if candidates.len() < MIN_CANDIDATES {
        return None;
    }
    candidates.sort_by(|a, b| b.height().cmp(&a.height()));
    candidates.truncate(REGION_COUNT);
    candidates.sort_by_key(Gap::start);
    Some(candidates)
}
