use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamuraiError {
    #[error("Pattern error: {message}")]
    Pattern { message: String },

    #[error("Region {start}..{end} is out of bounds for buffer of length {len}")]
    InvalidRegion { start: usize, end: usize, len: usize },
}
