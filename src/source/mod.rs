//! Portfolio content sources.
//!
//! Content is either the built-in portfolio or a TOML file supplied by the
//! user. Both are read once at startup; the screen never reloads.

use crate::model::{ContentError, Portfolio};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the portfolio content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// The portfolio compiled into the binary.
    BuiltIn,
    /// A TOML content file.
    File(PathBuf),
}

impl ContentSource {
    /// Load the portfolio.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if a file source does not exist,
    /// `ContentError::Read` on I/O failure and `ContentError::Parse` on
    /// invalid TOML.
    pub fn load(&self) -> Result<Portfolio, ContentError> {
        match self {
            ContentSource::BuiltIn => {
                debug!("Using built-in portfolio content");
                Ok(Portfolio::default())
            }
            ContentSource::File(path) => load_content_file(path),
        }
    }
}

/// Pick the content source: a file when a path is given, else built-in.
pub fn detect_content_source(path: Option<PathBuf>) -> ContentSource {
    match path {
        Some(path) => ContentSource::File(path),
        None => ContentSource::BuiltIn,
    }
}

/// Parse a content file.
///
/// Unlike config files, a missing content file is an error: the user asked
/// for it explicitly.
pub fn load_content_file(path: &Path) -> Result<Portfolio, ContentError> {
    if !path.exists() {
        return Err(ContentError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let portfolio: Portfolio = toml::from_str(&contents).map_err(|e| ContentError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    info!(
        path = %path.display(),
        action_links = portfolio.action_links.len(),
        skills = portfolio.skills.len(),
        contacts = portfolio.contacts.len(),
        "Loaded portfolio content"
    );

    Ok(portfolio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn detect_without_path_is_built_in() {
        assert_eq!(detect_content_source(None), ContentSource::BuiltIn);
    }

    #[test]
    fn built_in_source_loads_default_portfolio() {
        let portfolio = ContentSource::BuiltIn.load().unwrap();
        assert_eq!(portfolio, Portfolio::default());
    }

    #[test]
    fn missing_file_is_not_found() {
        let source = detect_content_source(Some(PathBuf::from("/nonexistent/folio.toml")));
        match source.load() {
            Err(ContentError::NotFound { path }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/folio.toml"));
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn file_source_parses_content() {
        let path = std::env::temp_dir().join("folio_test_content_valid.toml");
        fs::write(
            &path,
            r#"
[footer]
copyright = "© Someone"
availability = "Busy"
"#,
        )
        .unwrap();

        let portfolio = ContentSource::File(path.clone()).load().unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(portfolio.footer.copyright, "© Someone");
        assert_eq!(portfolio.footer.availability, "Busy");
        assert_eq!(portfolio.contacts.len(), 5);
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let path = std::env::temp_dir().join("folio_test_content_invalid.toml");
        fs::write(&path, "this is not valid TOML ][}{").unwrap();

        let result = load_content_file(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(ContentError::Parse { .. })));
    }
}
