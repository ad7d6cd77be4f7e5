use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use box_detect::{AnswerRegion, DetectOptions, RegionKind, detect_answer_boxes};
use clap::Parser;
use ocr::{EngineConfig, OcrEngine, RegionRect, SegmentationMode};
use opencv::core::{Mat, Scalar, Vector};
use opencv::imgcodecs::{self, IMREAD_GRAYSCALE};
use opencv::imgproc;
use opencv::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

/// 单张答题卡的识别记录，以输入文件名为主键。
#[derive(Debug, Serialize)]
struct SheetRecord {
    id: String,
    q0: String,
    q1: String,
    q2: String,
    q3: String,
}

/// 命令行参数：输入输出目录与 OCR 引擎配置。
#[derive(Parser, Debug)]
#[command(
    name = "sheet-ocr-cli",
    version,
    about = "批量定位答题卡答案框并识别框内文字的工具"
)]
struct Args {
    /// 输入目录，存放扫描出来的答题卡图片（jpg/png）
    #[arg(long)]
    input: PathBuf,

    /// 输出目录，每个检出答案框的输入文件写出一个同名 .ocr 记录
    #[arg(long)]
    output: PathBuf,

    /// tessdata 目录；缺省时走 Tesseract 自身的查找路径
    #[arg(long)]
    tessdata: Option<PathBuf>,

    /// 识别语言
    #[arg(long, default_value = "vie")]
    lang: String,

    /// 中心列扫描下界占图像高度的比例
    #[arg(long, default_value_t = 0.9)]
    scan_floor: f64,

    /// 调试目录；指定后把检出的答案框画在原图副本上一并写出
    #[arg(long)]
    debug_dir: Option<PathBuf>,
}

/// 单个文件的处理结论。
enum Outcome {
    /// 四个答案框全部识别完成并写出记录。
    Recognized,
    /// 分隔线候选不足，图像按“未检出答案框”跳过。
    NoBoxes,
}

/// 程序入口：解析参数并触发批量识别流程。
fn main() -> Result<()> {
    let args = Args::parse();
    run(args)
}

/// 遍历输入目录，对每张答题卡执行检测与识别并写出结果。
///
/// 引擎初始化失败会中止整个批次；单个文件的解码、识别或写盘失败
/// 只计入失败数，批次继续。
fn run(args: Args) -> Result<()> {
    anyhow::ensure!(
        args.input.is_dir(),
        "输入路径必须是有效目录：{}",
        args.input.display()
    );
    fs::create_dir_all(&args.output)
        .with_context(|| format!("无法创建输出目录 {}", args.output.display()))?;
    if let Some(debug_dir) = &args.debug_dir {
        fs::create_dir_all(debug_dir)
            .with_context(|| format!("无法创建调试目录 {}", debug_dir.display()))?;
    }

    let mut config = EngineConfig::new(&args.lang);
    if let Some(dir) = &args.tessdata {
        config = config.with_data_dir(dir);
    }
    let mut engine = OcrEngine::new(&config).context("初始化 OCR 引擎失败")?;

    let options = DetectOptions {
        scan_floor_fraction: args.scan_floor,
        ..DetectOptions::default()
    };

    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for entry in WalkDir::new(&args.input)
        .into_iter()
        .filter_map(|res| res.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_supported_image(path) {
            continue;
        }

        match process_sheet(path, &args, &options, &mut engine) {
            Ok(Outcome::Recognized) => processed += 1,
            Ok(Outcome::NoBoxes) => {
                println!("{} 未检出答案框，跳过", path.display());
                skipped += 1;
            }
            Err(err) => {
                eprintln!("处理 {} 失败：{err:?}", path.display());
                failed += 1;
            }
        }
    }

    println!(
        "批次完成：识别 {} 个文件，跳过 {} 个（无答案框），失败 {} 个，输出目录：{}",
        processed,
        skipped,
        failed,
        args.output.display()
    );

    Ok(())
}

/// 完整处理一张答题卡：检测答案框、自上而下逐框识别并写出记录。
fn process_sheet(
    path: &Path,
    args: &Args,
    options: &DetectOptions,
    engine: &mut OcrEngine,
) -> Result<Outcome> {
    let path_str = path.to_string_lossy();
    let gray = imgcodecs::imread(&path_str, IMREAD_GRAYSCALE)
        .with_context(|| format!("载入图像失败：{}", path.display()))?;

    let Some(regions) = detect_answer_boxes(&gray, options)
        .with_context(|| format!("检测答案框失败：{}", path.display()))?
    else {
        return Ok(Outcome::NoBoxes);
    };

    engine
        .load_image(path)
        .with_context(|| format!("向 OCR 引擎载入图像失败：{}", path.display()))?;
    engine.set_source_resolution(estimated_ppi(gray.cols(), gray.rows()));

    let mut answers = Vec::with_capacity(regions.len());
    for region in &regions {
        let text = engine
            .recognize_region(to_region_rect(region.rect), segmentation_mode(region.kind))
            .with_context(|| format!("识别答案框失败：{}", path.display()))?;
        // 每条答案拍平成一行，便于按字段消费。
        answers.push(text.replace('\n', " "));
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("文件名需为有效的 UTF-8 字符串")?;
    let file_stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .context("文件名需为有效的 UTF-8 字符串")?;

    let mut answers = answers.into_iter();
    let record = SheetRecord {
        id: file_name.to_string(),
        q0: answers.next().unwrap_or_default(),
        q1: answers.next().unwrap_or_default(),
        q2: answers.next().unwrap_or_default(),
        q3: answers.next().unwrap_or_default(),
    };

    let out_path = args.output.join(format!("{file_stem}.ocr"));
    let json = serde_json::to_string_pretty(&record).context("序列化识别记录失败")?;
    fs::write(&out_path, json)
        .with_context(|| format!("写入记录文件失败：{}", out_path.display()))?;

    if let Some(debug_dir) = &args.debug_dir {
        let debug_path = debug_dir.join(format!("{file_stem}.png"));
        write_debug_visualization(&gray, &regions, &debug_path)
            .with_context(|| format!("写出调试图像失败：{}", debug_path.display()))?;
    }

    Ok(Outcome::Recognized)
}

/// 过滤文件扩展名，仅允许 PNG/JPG/JPEG。
fn is_supported_image(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_ascii_lowercase()),
        Some(ext) if ext == "png" || ext == "jpg" || ext == "jpeg"
    )
}

/// 估算扫描件的 PPI：答题卡物理尺寸约 4.1 x 2.3 英寸，由像素面积反推。
fn estimated_ppi(width: i32, height: i32) -> i32 {
    (width as f64 * height as f64 / 2.3 / 4.1).sqrt() as i32
}

/// 版式类别到分段模式的映射：宽答案块按整块识别，窄行按单行识别。
fn segmentation_mode(kind: RegionKind) -> SegmentationMode {
    match kind {
        RegionKind::Block => SegmentationMode::SingleBlock,
        RegionKind::Line => SegmentationMode::SingleLine,
    }
}

fn to_region_rect(rect: opencv::core::Rect) -> RegionRect {
    RegionRect::new(rect.x, rect.y, rect.width, rect.height)
}

/// 把检出的答案框画在原图副本上并写入调试目录。
fn write_debug_visualization(
    gray: &Mat,
    regions: &[AnswerRegion],
    out_path: &Path,
) -> Result<()> {
    let mut annotated = gray.try_clone()?;
    for region in regions {
        imgproc::rectangle(
            &mut annotated,
            region.rect,
            Scalar::all(0.0),
            2,
            imgproc::LINE_8,
            0,
        )?;
    }

    let params = Vector::<i32>::new();
    let path_str = out_path.to_string_lossy();
    let success = imgcodecs::imwrite(&path_str, &annotated, &params)
        .with_context(|| format!("无法保存调试图像 {}", out_path.display()))?;
    anyhow::ensure!(success, "OpenCV 写入调试图像失败：{}", out_path.display());
    Ok(())
}
