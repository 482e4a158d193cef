use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::Receiver;

use crate::config::control::ControlEvent;
use crate::config::settings::FilterSettings;
use crate::detection::domain::detection_sampler::DetectionSampler;
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::track_smoother::TrackSmoother;
use crate::overlay::domain::overlay_renderer::OverlayRenderer;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::face_box::FaceBox;
use crate::shared::video_metadata::VideoMetadata;
use crate::stylize::domain::frame_stylizer::FrameStylizer;
use crate::video::domain::video_reader::VideoReader;
use crate::video::domain::video_writer::VideoWriter;

/// Which filter the scheduler applies to each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Rotoscope,
    LaughingMan,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
}

/// Clonable handle for stopping a scheduler run from another thread.
///
/// Stopping is idempotent and safe to call before the run starts: the
/// scheduler checks the flag before processing each frame.
#[derive(Clone)]
pub struct SchedulerHandle {
    stop: Arc<AtomicBool>,
}

impl SchedulerHandle {
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

/// Drives the per-frame filter loop: read, filter, write.
///
/// In `Rotoscope` mode every frame goes through the stylizer. In
/// `LaughingMan` mode the sampler decides per frame whether to re-run
/// detection; between detections the overlay keeps rendering at the last
/// smoothed positions, which is what makes sparse detection viable.
pub struct FrameScheduler {
    stylizer: Box<dyn FrameStylizer>,
    detector: Box<dyn FaceDetector>,
    smoother: TrackSmoother,
    sampler: Box<dyn DetectionSampler>,
    renderer: Box<dyn OverlayRenderer>,
    settings: FilterSettings,
    mode: Mode,
    state: SchedulerState,
    tracked: Vec<FaceBox>,
    stop: Arc<AtomicBool>,
    control: Option<Receiver<ControlEvent>>,
    logger: Box<dyn PipelineLogger>,
}

// Inert stand-ins for the components a mode doesn't use.
struct PassthroughStylizer;

impl FrameStylizer for PassthroughStylizer {
    fn stylize(
        &mut self,
        _frame: &mut crate::shared::frame::Frame,
        _settings: &FilterSettings,
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

struct NullDetector;

impl FaceDetector for NullDetector {
    fn detect(
        &mut self,
        _frame: &crate::shared::frame::Frame,
    ) -> Result<Vec<FaceBox>, Box<dyn std::error::Error>> {
        Ok(Vec::new())
    }
}

struct NeverSampler;

impl DetectionSampler for NeverSampler {
    fn should_detect(&mut self) -> bool {
        false
    }
}

struct NullRenderer;

impl OverlayRenderer for NullRenderer {
    fn render(&mut self, _frame: &mut crate::shared::frame::Frame, _faces: &[FaceBox]) {}
}

impl FrameScheduler {
    /// Scheduler for pure stylization runs: no detection or overlay.
    pub fn rotoscope(
        stylizer: Box<dyn FrameStylizer>,
        settings: FilterSettings,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self::new(
            stylizer,
            Box::new(NullDetector),
            TrackSmoother::default(),
            Box::new(NeverSampler),
            Box::new(NullRenderer),
            settings,
            Mode::Rotoscope,
            logger,
        )
    }

    /// Scheduler for overlay runs: detection, smoothing, and rendering.
    pub fn laughing_man(
        detector: Box<dyn FaceDetector>,
        smoother: TrackSmoother,
        sampler: Box<dyn DetectionSampler>,
        renderer: Box<dyn OverlayRenderer>,
        settings: FilterSettings,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self::new(
            Box::new(PassthroughStylizer),
            detector,
            smoother,
            sampler,
            renderer,
            settings,
            Mode::LaughingMan,
            logger,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        stylizer: Box<dyn FrameStylizer>,
        detector: Box<dyn FaceDetector>,
        smoother: TrackSmoother,
        sampler: Box<dyn DetectionSampler>,
        renderer: Box<dyn OverlayRenderer>,
        settings: FilterSettings,
        mode: Mode,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        let mut renderer = renderer;
        renderer.apply_settings(&settings);
        Self {
            stylizer,
            detector,
            smoother,
            sampler,
            renderer,
            settings,
            mode,
            state: SchedulerState::Idle,
            tracked: Vec::new(),
            stop: Arc::new(AtomicBool::new(false)),
            control: None,
            logger,
        }
    }

    /// Attaches a control channel whose events are drained once per frame.
    pub fn with_control(mut self, control: Receiver<ControlEvent>) -> Self {
        self.control = Some(control);
        self
    }

    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            stop: self.stop.clone(),
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Last smoothed face set, kept across frames between detections.
    pub fn tracked_faces(&self) -> &[FaceBox] {
        &self.tracked
    }

    /// Processes every frame from the reader and writes the results.
    ///
    /// A second call while already running is a no-op. Returns once the
    /// source is exhausted or the stop flag is raised; either way the
    /// scheduler ends up `Idle` again.
    pub fn run(
        &mut self,
        reader: &mut dyn VideoReader,
        writer: &mut dyn VideoWriter,
        metadata: &VideoMetadata,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.state == SchedulerState::Running {
            return Ok(());
        }
        self.state = SchedulerState::Running;

        let result = self.run_loop(reader, writer, metadata);

        self.state = SchedulerState::Idle;
        self.logger.summary();
        result
    }

    fn run_loop(
        &mut self,
        reader: &mut dyn VideoReader,
        writer: &mut dyn VideoWriter,
        metadata: &VideoMetadata,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let total = metadata.total_frames;
        let mut processed = 0usize;

        for frame in reader.frames() {
            if self.stop.load(Ordering::Relaxed) {
                self.logger.info("Stopped before end of source");
                break;
            }
            self.drain_control_events();
            if self.stop.load(Ordering::Relaxed) {
                self.logger.info("Stopped before end of source");
                break;
            }

            let mut frame = frame?;

            match self.mode {
                Mode::Rotoscope => {
                    let start = Instant::now();
                    if let Err(e) = self.stylizer.stylize(&mut frame, &self.settings) {
                        // Pass the frame through unmodified rather than
                        // dropping it, so output stays frame-accurate
                        log::warn!("Stylize failed on frame {}: {e}", frame.index());
                    }
                    self.logger
                        .timing("stylize", start.elapsed().as_secs_f64() * 1000.0);
                }
                Mode::LaughingMan => {
                    if self.sampler.should_detect() {
                        let start = Instant::now();
                        match self.detector.detect(&frame) {
                            Ok(detections) => {
                                self.tracked = self.smoother.smooth(&detections, &self.tracked);
                            }
                            Err(e) => {
                                // Keep rendering at the stale positions
                                log::warn!(
                                    "Detection failed on frame {}: {e}",
                                    frame.index()
                                );
                            }
                        }
                        self.logger
                            .timing("detect", start.elapsed().as_secs_f64() * 1000.0);
                        self.logger.metric("faces", self.tracked.len() as f64);
                    }
                    let start = Instant::now();
                    self.renderer.render(&mut frame, &self.tracked);
                    self.logger
                        .timing("render", start.elapsed().as_secs_f64() * 1000.0);
                }
            }

            writer.write(&frame)?;
            processed += 1;
            self.logger.progress(processed, total);
        }

        Ok(())
    }

    fn drain_control_events(&mut self) {
        let Some(control) = &self.control else {
            return;
        };
        // Collect first so the borrow of self.control ends before applying
        let events: Vec<ControlEvent> = control.try_iter().collect();
        for event in events {
            match event {
                ControlEvent::SettingsChanged(settings) => {
                    self.renderer.apply_settings(&settings);
                    self.settings = settings;
                }
                ControlEvent::ModeChanged(mode) => {
                    if mode != self.mode {
                        self.tracked.clear();
                        self.mode = mode;
                    }
                }
                ControlEvent::Stop => self.stop.store(true, Ordering::Relaxed),
            }
        }
    }
}
