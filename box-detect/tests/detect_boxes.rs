use box_detect::{DetectOptions, RegionKind, detect_answer_boxes};
use opencv::core::{CV_8UC1, CV_8UC3, Mat, Rect};
use opencv::prelude::*;

/// 画一张白底合成答题卡，在给定起始行各画一条 3 像素厚、横贯整页的
/// 深色分隔线。
fn synthetic_sheet(h: i32, w: i32, line_rows: &[i32]) -> Mat {
    let mut buf = vec![255u8; (h * w) as usize];
    for &row in line_rows {
        for r in row..row + 3 {
            let offset = (r * w) as usize;
            buf[offset..offset + w as usize].fill(0);
        }
    }
    let mut sheet = Mat::zeros(h, w, CV_8UC1).unwrap().to_mat().unwrap();
    sheet.data_bytes_mut().unwrap().copy_from_slice(&buf);
    sheet
}

#[test]
fn detects_four_ordered_regions_on_a_clean_sheet() {
    // 六条分隔线 -> 五个候选区间，其中最矮的 (779, 899) 被淘汰。
    let sheet = synthetic_sheet(1200, 800, &[150, 320, 500, 650, 780, 900]);
    let regions = detect_answer_boxes(&sheet, &DetectOptions::default())
        .expect("合成图检测不应报错")
        .expect("六条分隔线应当检出答案框");

    assert_eq!(regions.len(), 4);

    // 第一个区域是宽答案块，其余是窄单行。
    assert_eq!(regions[0].kind, RegionKind::Block);
    for region in &regions[1..] {
        assert_eq!(region.kind, RegionKind::Line);
    }

    // 过渡点落在每条分隔线的上一行：149/319/499/649/779。
    assert_eq!(regions[0].rect, Rect::new(80, 154, 640, 165));
    assert_eq!(regions[1].rect, Rect::new(160, 324, 480, 175));
    assert_eq!(regions[2].rect, Rect::new(160, 504, 480, 145));
    assert_eq!(regions[3].rect, Rect::new(160, 654, 480, 125));

    // 全部矩形落在图像范围内，且自上而下排列。
    let mut last_y = 0;
    for region in &regions {
        let rect = region.rect;
        assert!(rect.x >= 0 && rect.y >= 0);
        assert!(rect.x + rect.width <= 800);
        assert!(rect.y + rect.height <= 1200);
        assert!(rect.y > last_y);
        last_y = rect.y;
    }
}

#[test]
fn too_few_separator_lines_reject_the_sheet() {
    // 四条分隔线只配出三个候选区间，不足以推断四个答案框。
    let sheet = synthetic_sheet(1200, 800, &[200, 400, 600, 800]);
    let outcome = detect_answer_boxes(&sheet, &DetectOptions::default()).unwrap();
    assert!(outcome.is_none());
}

#[test]
fn blank_sheet_is_rejected() {
    let sheet = synthetic_sheet(1200, 800, &[]);
    let outcome = detect_answer_boxes(&sheet, &DetectOptions::default()).unwrap();
    assert!(outcome.is_none());
}

#[test]
fn empty_image_is_a_precondition_error() {
    let empty = Mat::default();
    assert!(detect_answer_boxes(&empty, &DetectOptions::default()).is_err());
}

#[test]
fn multi_channel_image_is_a_precondition_error() {
    let color = Mat::zeros(100, 100, CV_8UC3).unwrap().to_mat().unwrap();
    assert!(detect_answer_boxes(&color, &DetectOptions::default()).is_err());
}

#[test]
fn narrow_scribbles_do_not_produce_candidates() {
    // 只占页宽 1/5 的短划线在开运算后留不下来，不会被当成分隔线。
    let h = 1200;
    let w = 800;
    let mut buf = vec![255u8; (h * w) as usize];
    for &row in &[150, 320, 500, 650, 780, 900] {
        for r in row..row + 3 {
            let offset = (r * w) as usize;
            let from = (w / 2 - w / 10) as usize;
            let to = (w / 2 + w / 10) as usize;
            buf[offset + from..offset + to].fill(0);
        }
    }
    let mut sheet = Mat::zeros(h, w, CV_8UC1).unwrap().to_mat().unwrap();
    sheet.data_bytes_mut().unwrap().copy_from_slice(&buf);

    let outcome = detect_answer_boxes(&sheet, &DetectOptions::default()).unwrap();
    assert!(outcome.is_none());
}
