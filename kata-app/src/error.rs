use kata_core::KataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Kata Error: {0}")]
    Kata(#[from] KataError),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Demo failed: {0} of {1} cases produced an unexpected answer")]
    DemoFailed(usize, usize),
}
