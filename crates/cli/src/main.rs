use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use rotomask_core::config::settings::FilterSettings;
use rotomask_core::config::tuning::TuningConfig;
use rotomask_core::deface::domain::anonymizer::{DefaceMode, DefaceRequest};
use rotomask_core::deface::infrastructure::http_anonymizer::HttpAnonymizer;
use rotomask_core::detection::domain::detection_sampler::{DetectionSampler, FixedCadenceSampler};
use rotomask_core::detection::domain::face_detector::FaceDetector;
use rotomask_core::detection::domain::track_smoother::TrackSmoother;
use rotomask_core::detection::infrastructure::onnx_blazeface_detector::OnnxBlazefaceDetector;
use rotomask_core::detection::infrastructure::random_sampler::RandomSampler;
use rotomask_core::detection::infrastructure::resilient_detector::ResilientDetector;
use rotomask_core::overlay::infrastructure::laughing_man_renderer::LaughingManRenderer;
use rotomask_core::pipeline::deface_video_use_case::DefaceVideoUseCase;
use rotomask_core::pipeline::frame_scheduler::FrameScheduler;
use rotomask_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use rotomask_core::pipeline::process_video_use_case::ProcessVideoUseCase;
use rotomask_core::shared::constants::{
    BLAZEFACE_MODEL_FALLBACK_URL, BLAZEFACE_MODEL_NAME, BLAZEFACE_MODEL_URL, DEFACE_ENDPOINT,
    IMAGE_EXTENSIONS,
};
use rotomask_core::shared::model_resolver;
use rotomask_core::stylize::domain::style_preset;
use rotomask_core::stylize::infrastructure::rotoscope_stylizer::RotoscopeStylizer;
use rotomask_core::video::domain::video_reader::VideoReader;
use rotomask_core::video::domain::video_writer::VideoWriter;
use rotomask_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use rotomask_core::video::infrastructure::ffmpeg_writer::FfmpegWriter;
use rotomask_core::video::infrastructure::image_file_reader::ImageFileReader;
use rotomask_core::video::infrastructure::image_file_writer::ImageFileWriter;

/// Cartoon rotoscoping, animated face overlays, and face anonymization
/// for videos and images.
#[derive(Parser)]
#[command(name = "rotomask")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply the cartoon rotoscope filter.
    Rotoscope {
        /// Input video or image file.
        input: PathBuf,

        /// Output file.
        output: PathBuf,

        /// Style preset: scanner, comic, noir, neon, or watercolor.
        #[arg(long, default_value = "scanner")]
        preset: String,

        /// Override the preset's edge detection threshold (0-255).
        #[arg(long)]
        edge_threshold: Option<f64>,

        /// Override the preset's color quantization levels (>= 2).
        #[arg(long)]
        posterization: Option<u32>,

        /// Override the preset's edge line thickness (0.5-5.0).
        #[arg(long)]
        line_thickness: Option<f64>,
    },

    /// Track faces and draw the spinning-disc overlay on each.
    LaughingMan {
        /// Input video or image file.
        input: PathBuf,

        /// Output file.
        output: PathBuf,

        /// JSON file with tuning overrides.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Detect on a fixed cadence (the tuned frame_skip) instead of
        /// random sampling.
        #[arg(long)]
        fixed_cadence: bool,

        /// Seed for the random detection sampler (reproducible runs).
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Send the video to an external anonymization service.
    Deface {
        /// Input video file.
        input: PathBuf,

        /// Output file.
        output: PathBuf,

        /// Anonymization service endpoint.
        #[arg(long, default_value = DEFACE_ENDPOINT)]
        endpoint: String,

        /// Obscuring mode: blur, solid, or mosaic.
        #[arg(long, default_value = "blur")]
        mode: DefaceMode,

        /// Detection confidence threshold (0.1-0.9).
        #[arg(long)]
        threshold: Option<f64>,

        /// Downscale hint for the service, e.g. 640x360.
        #[arg(long)]
        scale: Option<String>,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Rotoscope {
            input,
            output,
            preset,
            edge_threshold,
            posterization,
            line_thickness,
        } => run_rotoscope(
            &input,
            &output,
            &preset,
            edge_threshold,
            posterization,
            line_thickness,
        ),
        Command::LaughingMan {
            input,
            output,
            config,
            fixed_cadence,
            seed,
        } => run_laughing_man(&input, &output, config.as_deref(), fixed_cadence, seed),
        Command::Deface {
            input,
            output,
            endpoint,
            mode,
            threshold,
            scale,
        } => run_deface(&input, &output, &endpoint, mode, threshold, scale),
    }
}

fn run_rotoscope(
    input: &Path,
    output: &Path,
    preset_name: &str,
    edge_threshold: Option<f64>,
    posterization: Option<u32>,
    line_thickness: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    check_input(input)?;

    let preset = style_preset::preset(preset_name).ok_or_else(|| {
        format!(
            "Unknown preset '{preset_name}' (available: {})",
            style_preset::preset_names().join(", ")
        )
    })?;

    let mut settings = FilterSettings::default();
    settings.apply_preset(preset);
    if let Some(v) = edge_threshold {
        settings.set_edge_threshold(v)?;
    }
    if let Some(v) = posterization {
        settings.set_posterization(v)?;
    }
    if let Some(v) = line_thickness {
        settings.set_line_thickness(v)?;
    }

    let scheduler = FrameScheduler::rotoscope(
        Box::new(RotoscopeStylizer::new()),
        settings,
        Box::new(StdoutPipelineLogger::default()),
    );

    let mut use_case = ProcessVideoUseCase::new(open_reader(input), open_writer(output), scheduler);
    use_case.execute(input, output)?;
    log::info!("Output written to {}", output.display());
    Ok(())
}

fn run_laughing_man(
    input: &Path,
    output: &Path,
    config: Option<&Path>,
    fixed_cadence: bool,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    check_input(input)?;

    let tuning = match config {
        Some(path) => TuningConfig::load(path)?,
        None => TuningConfig::default(),
    };

    let detector = build_detector(&tuning)?;
    let smoother = TrackSmoother::new(tuning.face_detection.smoothing_factor, 50.0);
    let sampler = build_sampler(&tuning, fixed_cadence, seed);

    let renderer = LaughingManRenderer::new(
        tuning.visual.logo_opacity,
        tuning.visual.rotation_speed,
        tuning.face_detection.overlay_size_multiplier,
    );

    let mut settings = FilterSettings::default();
    settings.set_logo_opacity(tuning.visual.logo_opacity)?;
    settings.set_rotation_speed(tuning.visual.rotation_speed)?;
    settings.set_deface_threshold(tuning.visual.deface_threshold)?;

    let scheduler = FrameScheduler::laughing_man(
        detector,
        smoother,
        sampler,
        Box::new(renderer),
        settings,
        Box::new(StdoutPipelineLogger::default()),
    );

    let mut use_case = ProcessVideoUseCase::new(open_reader(input), open_writer(output), scheduler);
    use_case.execute(input, output)?;
    log::info!("Output written to {}", output.display());
    Ok(())
}

fn run_deface(
    input: &Path,
    output: &Path,
    endpoint: &str,
    mode: DefaceMode,
    threshold: Option<f64>,
    scale: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    check_input(input)?;

    let threshold = threshold.unwrap_or_else(|| TuningConfig::default().visual.deface_threshold);
    if !(0.1..=0.9).contains(&threshold) {
        return Err(format!("Threshold must be between 0.1 and 0.9, got {threshold}").into());
    }

    let request = DefaceRequest {
        mode,
        threshold,
        scale,
    };

    let use_case = DefaceVideoUseCase::new(Box::new(HttpAnonymizer::new(endpoint)));
    use_case.execute(input, output, &request)?;
    log::info!("Output written to {}", output.display());
    Ok(())
}

fn build_detector(
    tuning: &TuningConfig,
) -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>> {
    log::info!("Resolving model: {BLAZEFACE_MODEL_NAME}");
    let model_path = model_resolver::resolve(
        BLAZEFACE_MODEL_NAME,
        &[BLAZEFACE_MODEL_URL, BLAZEFACE_MODEL_FALLBACK_URL],
        None,
        Some(Box::new(download_progress)),
    )?;
    eprintln!();

    let detector =
        OnnxBlazefaceDetector::new(&model_path, tuning.face_detection.score_threshold)?;
    Ok(Box::new(ResilientDetector::new(detector)))
}

fn build_sampler(
    tuning: &TuningConfig,
    fixed_cadence: bool,
    seed: Option<u64>,
) -> Box<dyn DetectionSampler> {
    use rotomask_core::shared::constants::DETECTION_SAMPLE_PROBABILITY;

    if fixed_cadence {
        Box::new(FixedCadenceSampler::new(tuning.face_detection.frame_skip))
    } else if let Some(seed) = seed {
        Box::new(RandomSampler::with_seed(DETECTION_SAMPLE_PROBABILITY, seed))
    } else {
        Box::new(RandomSampler::default())
    }
}

fn check_input(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file not found: {}", input.display()).into());
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn open_reader(input: &Path) -> Box<dyn VideoReader> {
    if is_image(input) {
        Box::new(ImageFileReader::new())
    } else {
        Box::new(FfmpegReader::new())
    }
}

fn open_writer(output: &Path) -> Box<dyn VideoWriter> {
    if is_image(output) {
        Box::new(ImageFileWriter::new())
    } else {
        Box::new(FfmpegWriter::new())
    }
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading face detection model... {pct}%");
    } else {
        eprint!("\rDownloading face detection model... {downloaded} bytes");
    }
}
