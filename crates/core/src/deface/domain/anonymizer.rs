use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How the anonymization service should obscure detected faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaceMode {
    Blur,
    Solid,
    Mosaic,
}

impl fmt::Display for DefaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DefaceMode::Blur => "blur",
            DefaceMode::Solid => "solid",
            DefaceMode::Mosaic => "mosaic",
        };
        f.write_str(s)
    }
}

impl FromStr for DefaceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blur" => Ok(DefaceMode::Blur),
            "solid" => Ok(DefaceMode::Solid),
            "mosaic" => Ok(DefaceMode::Mosaic),
            other => Err(format!(
                "unknown deface mode '{other}' (expected blur, solid, or mosaic)"
            )),
        }
    }
}

/// Parameters forwarded to the anonymization service.
#[derive(Clone, Debug)]
pub struct DefaceRequest {
    pub mode: DefaceMode,
    /// Detection confidence threshold, [0.1, 0.9].
    pub threshold: f64,
    /// Optional downscale hint, e.g. "640x360".
    pub scale: Option<String>,
}

#[derive(Error, Debug)]
pub enum DefaceError {
    #[error("anonymization service returned HTTP {0}")]
    Http(u16),
    #[error("could not reach anonymization service: {0}")]
    Network(#[from] reqwest::Error),
}

/// Sends whole videos to an external anonymization service.
///
/// The service is a black box: bytes in, processed bytes out. Failures
/// here are fatal for the run since no partial output makes sense.
pub trait VideoAnonymizer: Send {
    fn anonymize(&self, video: &[u8], request: &DefaceRequest) -> Result<Vec<u8>, DefaceError>;
}
