use image::RgbaImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("QR error: {0}")]
    Qr(#[from] qrcode::types::QrError),
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("Font error: {0}")]
    Font(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, LabelError>;

/// A generated label: its text and the rendered image
#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
    pub image: RgbaImage,
}

/// Where label numbers come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSource {
    /// `count` consecutive numbers starting at `start`
    Range { start: u64, count: u64 },
    /// Explicit numbers, in the order given
    List(Vec<u64>),
}

impl LabelSource {
    /// Pick the source: a non-empty list wins over the range.
    pub fn new(list: Vec<u64>, start: u64, count: u64) -> Self {
        if list.is_empty() {
            LabelSource::Range { start, count }
        } else {
            LabelSource::List(list)
        }
    }

    /// The numbers to label, in order
    pub fn numbers(&self) -> Result<Vec<u64>> {
        match self {
            LabelSource::List(numbers) => Ok(numbers.clone()),
            LabelSource::Range { start, count } => {
                if *start < 1 {
                    return Err(LabelError::Config(
                        "Range start must be at least 1".to_string(),
                    ));
                }
                if *count < 1 {
                    return Err(LabelError::Config(
                        "Range count must be at least 1".to_string(),
                    ));
                }
                let end = start.checked_add(*count).ok_or_else(|| {
                    LabelError::Config(format!("Range {start} + {count} overflows"))
                })?;
                Ok((*start..end).collect())
            }
        }
    }
}
