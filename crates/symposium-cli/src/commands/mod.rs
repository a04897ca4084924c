//! Command implementations.

pub mod extract;
pub mod facts;
pub mod material;
pub mod prompt;
pub mod segment;
pub mod suggest;

pub use self::extract::execute_extract;
pub use self::facts::execute_facts;
pub use self::material::execute_material;
pub use self::prompt::execute_prompt;
pub use self::segment::execute_segment;
pub use self::suggest::execute_suggest;

use crate::error::{CliError, Result};
use std::io::Read;
use std::path::Path;

/// Read all text from a file, or from stdin when no file is given.
pub(crate) fn read_input(file: Option<&Path>) -> Result<String> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if text.trim().is_empty() {
        return Err(CliError::InvalidInput("Input text is empty".to_string()));
    }
    Ok(text)
}

/// Join name words given as separate arguments.
pub(crate) fn joined_name(words: &[String]) -> Result<String> {
    let name = words.join(" ").trim().to_string();
    if name.is_empty() {
        return Err(CliError::InvalidInput("Name must not be empty".to_string()));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_input_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bio.txt");
        fs::write(&path, "Plato (c. 428 – 348 BC) was a Greek philosopher.").unwrap();

        let text = read_input(Some(&path)).unwrap();
        assert!(text.starts_with("Plato"));
    }

    #[test]
    fn test_read_input_rejects_blank_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.txt");
        fs::write(&path, "  \n\n").unwrap();

        assert!(matches!(read_input(Some(&path)), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = read_input(Some(&dir.path().join("absent.txt")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_joined_name() {
        let words = vec!["Marie".to_string(), "Curie".to_string()];
        assert_eq!(joined_name(&words).unwrap(), "Marie Curie");
        assert!(joined_name(&[" ".to_string()]).is_err());
    }
}
