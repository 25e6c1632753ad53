use thiserror::Error;

#[derive(Error, Debug)]
pub enum SatplotError {
    #[error("Invalid element set: {0}")]
    ElementSetParsing(String),

    #[error("Chart rendering failed: {0}")]
    PlotRendering(String),

    #[error("Unable to perform server I/O operation: {0}")]
    IoError(#[from] std::io::Error),
}
