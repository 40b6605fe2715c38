//! Storage result types
//!
//! Defines the type tag accepted by path verification and the outcome it returns.

use std::fmt;
use std::str::FromStr;

use crate::error::VerifyError;

/// Kind of filesystem entry a caller expects to find at a path
///
/// `Folder` and `Dir` are the same kind on disk. They stay separate so the
/// word the caller used is echoed back in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathType {
    #[default]
    File,
    Folder,
    Dir,
}

impl PathType {
    /// Whether this tag denotes a directory
    pub fn is_directory(&self) -> bool {
        matches!(self, PathType::Folder | PathType::Dir)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PathType::File => "file",
            PathType::Folder => "folder",
            PathType::Dir => "dir",
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathType {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(PathType::File),
            "folder" => Ok(PathType::Folder),
            "dir" => Ok(PathType::Dir),
            other => Err(VerifyError::InvalidArgument(format!(
                "Unrecognised path type: {}",
                other
            ))),
        }
    }
}

/// Outcome of a path verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Valid,
    Invalid(String),
}

impl Verification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Valid)
    }

    /// Failure message, `None` when valid
    pub fn message(&self) -> Option<&str> {
        match self {
            Verification::Valid => None,
            Verification::Invalid(msg) => Some(msg),
        }
    }

    /// Convert into a `(valid, message)` pair
    pub fn into_pair(self) -> (bool, Option<String>) {
        match self {
            Verification::Valid => (true, None),
            Verification::Invalid(msg) => (false, Some(msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!("file".parse::<PathType>().unwrap(), PathType::File);
        assert_eq!("folder".parse::<PathType>().unwrap(), PathType::Folder);
        assert_eq!("dir".parse::<PathType>().unwrap(), PathType::Dir);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            "File".parse::<PathType>(),
            Err(VerifyError::InvalidArgument(_))
        ));
        assert!(matches!(
            "".parse::<PathType>(),
            Err(VerifyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_display_echoes_tag() {
        assert_eq!(PathType::Folder.to_string(), "folder");
        assert_eq!(PathType::Dir.to_string(), "dir");
        assert_eq!(PathType::default(), PathType::File);
        assert!(PathType::Dir.is_directory());
        assert!(!PathType::File.is_directory());
    }

    #[test]
    fn test_verification_pair() {
        assert_eq!(Verification::Valid.into_pair(), (true, None));

        let invalid = Verification::Invalid("data does not exist".into());
        assert!(!invalid.is_valid());
        assert_eq!(invalid.message(), Some("data does not exist"));
        assert_eq!(
            invalid.into_pair(),
            (false, Some("data does not exist".to_string()))
        );
    }
}
