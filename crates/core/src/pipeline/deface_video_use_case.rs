use std::fs;
use std::path::Path;

use crate::deface::domain::anonymizer::{DefaceRequest, VideoAnonymizer};

/// Runs a video through the external anonymization service.
///
/// The whole file is shipped as bytes and the service's response replaces
/// it; no local frame processing happens. Any failure is fatal for the
/// run since a partially anonymized output would defeat the purpose.
pub struct DefaceVideoUseCase {
    anonymizer: Box<dyn VideoAnonymizer>,
}

impl DefaceVideoUseCase {
    pub fn new(anonymizer: Box<dyn VideoAnonymizer>) -> Self {
        Self { anonymizer }
    }

    pub fn execute(
        &self,
        input_path: &Path,
        output_path: &Path,
        request: &DefaceRequest,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let video = fs::read(input_path)?;
        log::info!(
            "Sending {} bytes to anonymization service (mode: {})",
            video.len(),
            request.mode
        );

        let processed = self.anonymizer.anonymize(&video, request)?;

        fs::write(output_path, &processed)?;
        log::info!(
            "Wrote {} anonymized bytes to {}",
            processed.len(),
            output_path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deface::domain::anonymizer::{DefaceError, DefaceMode};

    struct EchoAnonymizer;

    impl VideoAnonymizer for EchoAnonymizer {
        fn anonymize(
            &self,
            video: &[u8],
            _request: &DefaceRequest,
        ) -> Result<Vec<u8>, DefaceError> {
            let mut out = b"processed:".to_vec();
            out.extend_from_slice(video);
            Ok(out)
        }
    }

    struct FailingAnonymizer;

    impl VideoAnonymizer for FailingAnonymizer {
        fn anonymize(
            &self,
            _video: &[u8],
            _request: &DefaceRequest,
        ) -> Result<Vec<u8>, DefaceError> {
            Err(DefaceError::Http(503))
        }
    }

    fn request() -> DefaceRequest {
        DefaceRequest {
            mode: DefaceMode::Blur,
            threshold: 0.3,
            scale: None,
        }
    }

    #[test]
    fn test_execute_writes_service_response() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.mp4");
        let output = dir.path().join("out.mp4");
        fs::write(&input, b"raw-video").unwrap();

        let uc = DefaceVideoUseCase::new(Box::new(EchoAnonymizer));
        uc.execute(&input, &output, &request()).unwrap();

        assert_eq!(fs::read(&output).unwrap(), b"processed:raw-video");
    }

    #[test]
    fn test_service_failure_is_fatal_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.mp4");
        let output = dir.path().join("out.mp4");
        fs::write(&input, b"raw-video").unwrap();

        let uc = DefaceVideoUseCase::new(Box::new(FailingAnonymizer));
        assert!(uc.execute(&input, &output, &request()).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let uc = DefaceVideoUseCase::new(Box::new(EchoAnonymizer));
        assert!(uc
            .execute(
                Path::new("/nonexistent/in.mp4"),
                &dir.path().join("out.mp4"),
                &request()
            )
            .is_err());
    }
}
