//! Core error types for Tickerbook.
//!
//! Gateway failures never escape the loader, so these errors only surface
//! from the fallback machinery.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fallback dataset is unusable: {0}")]
    FallbackDataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_render_their_source() {
        let io = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(matches!(io, Error::Io(_)));
        assert_eq!(io.to_string(), "I/O error: gone");

        let dataset = Error::FallbackDataset("eof".to_string());
        assert_eq!(dataset.to_string(), "Fallback dataset is unusable: eof");
    }
}
