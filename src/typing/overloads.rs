//! Overloading by return type
//!
//! `load` reads a file once; the caller picks raw bytes or text through the
//! type it asks for. Each "overload" is one `Loadable` impl.

use crate::error::Result;
use std::fs;
use std::path::Path;

pub trait Loadable: Sized {
    fn from_bytes(bytes: Vec<u8>) -> Result<Self>;
}

impl Loadable for Vec<u8> {
    fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Ok(bytes)
    }
}

impl Loadable for String {
    fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Ok(String::from_utf8(bytes)?)
    }
}

pub fn load<T: Loadable>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "loaded file");
    T::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;
    use std::io::Write;

    #[test]
    fn test_same_file_as_bytes_or_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "olá").unwrap();

        let bytes: Vec<u8> = load(file.path()).unwrap();
        let text: String = load(file.path()).unwrap();

        assert_eq!(bytes, "olá".as_bytes());
        assert_eq!(bytes.len(), 4);
        assert_eq!(text, "olá");
    }

    #[test]
    fn test_text_rejects_invalid_utf8_but_bytes_do_not() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        assert!(load::<Vec<u8>>(file.path()).is_ok());
        assert!(matches!(load::<String>(file.path()), Err(PatternError::Utf8(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load::<Vec<u8>>(dir.path().join("nope")),
            Err(PatternError::Io(_))
        ));
    }
}
