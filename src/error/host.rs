//! Host errors

use super::DevsetupError;

/// Creates an unsupported host error
pub fn unsupported(os: impl Into<String>, expected: impl Into<String>) -> DevsetupError {
    DevsetupError::UnsupportedHost {
        os: os.into(),
        expected: expected.into(),
    }
}
