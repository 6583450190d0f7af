//! Startup error type
//!
//! Everything here is fatal: the demo either finds its DOM elements at
//! initialization or it halts. There is no runtime retry path.

use thiserror::Error;

/// Reasons initialization can fail
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("no window/document available")]
    DocumentUnavailable,
    #[error("canvas element \"{0}\" not found")]
    CanvasMissing(String),
    #[error("canvas \"{0}\" has no 2d context")]
    ContextUnavailable(String),
    #[error("control button \"{0}\" not found")]
    ControlMissing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_element() {
        let err = SetupError::CanvasMissing("canvas-a".to_owned());
        assert_eq!(err.to_string(), "canvas element \"canvas-a\" not found");

        let err = SetupError::ControlMissing("jump-btn");
        assert_eq!(err.to_string(), "control button \"jump-btn\" not found");
    }
}
