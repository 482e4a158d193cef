pub mod deface_video_use_case;
pub mod frame_scheduler;
pub mod pipeline_logger;
pub mod process_video_use_case;
