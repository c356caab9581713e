use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    NotFound(String),
    ParseCommand(String),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized menu choice: '{}'", cmd)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn io_error_converts_and_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::from(io);

        assert!(format!("{}", err).contains("I/O error while accessing a file or resource: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn not_found_message() {
        let err = AppError::NotFound("Entry".to_string());

        assert_eq!(format!("{}", err), "Entry not found");
        assert!(err.source().is_none());
    }

    #[test]
    fn parse_command_message() {
        let err = AppError::ParseCommand("9".to_string());

        assert_eq!(format!("{}", err), "Unrecognized menu choice: '9'");
    }
}
