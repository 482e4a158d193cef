use std::path::Path;

use crate::pipeline::frame_scheduler::FrameScheduler;
use crate::video::domain::video_reader::VideoReader;
use crate::video::domain::video_writer::VideoWriter;

/// Orchestrates a full filter run: open source, schedule frames, finalize
/// output.
///
/// Single-use: `execute` consumes the owned reader and writer, so calling
/// it twice fails.
pub struct ProcessVideoUseCase {
    reader: Option<Box<dyn VideoReader>>,
    writer: Option<Box<dyn VideoWriter>>,
    scheduler: FrameScheduler,
}

impl ProcessVideoUseCase {
    pub fn new(
        reader: Box<dyn VideoReader>,
        writer: Box<dyn VideoWriter>,
        scheduler: FrameScheduler,
    ) -> Self {
        Self {
            reader: Some(reader),
            writer: Some(writer),
            scheduler,
        }
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = self.reader.take().ok_or("Pipeline already executed")?;
        let mut writer = self.writer.take().ok_or("Pipeline already executed")?;

        let metadata = reader.open(input_path)?;
        if let Err(e) = writer.open(output_path, &metadata) {
            reader.close();
            return Err(e);
        }

        let result = self
            .scheduler
            .run(reader.as_mut(), writer.as_mut(), &metadata);

        // Always release I/O resources, even when the run failed
        reader.close();
        let close_result = writer.close();

        result?;
        close_result
    }
}
