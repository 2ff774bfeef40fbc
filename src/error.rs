use thiserror::Error;

/// Errors reported at the crate's construction and IO boundaries.
///
/// Note what is deliberately *not* here: failing to find a plan is a normal
/// planning outcome (`Planner::plan` returns `None`), and a type mismatch
/// between a requirement and a world value is simply an unsatisfied
/// condition. Neither is an error.
#[derive(Error, Debug)]
pub enum GoapError {
    #[error("Action name must not be empty")]
    EmptyActionName,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GoapError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_empty_action_name_display() {
        let err = GoapError::EmptyActionName;
        assert_eq!(format!("{}", err), "Action name must not be empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GoapError = io.into();
        assert!(matches!(err, GoapError::Io(_)));
    }

    #[test]
    fn test_error_trait() {
        let err = GoapError::EmptyActionName;
        assert!(err.source().is_none());
    }
}
