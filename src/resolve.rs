//! Source resolution: turn a reference string into bytes plus format hints,
//! under a sandbox root, a size cap, and a wall-clock deadline.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use url::Url;

use crate::classify::content_type_for_extension;
use crate::error::{Error, Result};

/// Wall-clock budget shared by resolution and parsing.
///
/// Created once per extraction; each stage checks it before starting and the
/// HTTP client receives whatever remains as its request timeout.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    end: Instant,
}

impl Deadline {
    /// A deadline expiring after `budget` from now.
    pub fn within(budget: Duration) -> Self {
        Self {
            end: Instant::now() + budget,
        }
    }

    /// Time left, zero once expired.
    pub fn remaining(&self) -> Duration {
        self.end.saturating_duration_since(Instant::now())
    }

    /// Error out if the budget is spent.
    pub fn check(&self) -> Result<()> {
        if self.remaining().is_zero() {
            Err(Error::Timeout)
        } else {
            Ok(())
        }
    }
}

/// Bytes of a resolved source plus the hints the classifier needs.
#[derive(Debug)]
pub struct ResolvedSource {
    pub bytes: Vec<u8>,
    /// Lowercased media type without parameters, when known.
    pub content_type: Option<String>,
    /// Lowercased final path extension, when present.
    pub extension: Option<String>,
}

/// Resolves reference strings into [`ResolvedSource`]s.
///
/// Filesystem reads are confined to `sandbox_root`: relative references are
/// joined to it and every local path must canonicalize to somewhere beneath
/// it. Remote and local sources alike are capped at `max_bytes`.
#[derive(Debug)]
pub struct Resolver {
    sandbox_root: PathBuf,
    max_bytes: u64,
}

impl Resolver {
    pub fn new(sandbox_root: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self {
            sandbox_root: sandbox_root.into(),
            max_bytes,
        }
    }

    /// Resolve a reference: `http(s)` URLs are fetched, `file` URLs and bare
    /// paths are read from disk inside the sandbox.
    pub fn resolve(&self, reference: &str, deadline: &Deadline) -> Result<ResolvedSource> {
        deadline.check()?;
        match Url::parse(reference) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                self.fetch_remote(&url, deadline)
            }
            Ok(url) if url.scheme() == "file" => {
                let path = url.to_file_path().map_err(|_| Error::Fetch {
                    reason: format!("invalid file URL: {reference}"),
                    content_type: None,
                })?;
                self.read_local(&path)
            }
            // Not a URL (or a bare drive/scheme-less reference): a path.
            _ => self.read_local(Path::new(reference)),
        }
    }

    fn read_local(&self, path: &Path) -> Result<ResolvedSource> {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.sandbox_root.join(path)
        };

        // Canonicalize both sides so `..` segments and symlinks cannot step
        // outside the root.
        let root = fs::canonicalize(&self.sandbox_root)?;
        let canonical = fs::canonicalize(&joined)?;
        if canonical.strip_prefix(&root).is_err() {
            return Err(Error::PathEscape(joined));
        }

        let size = fs::metadata(&canonical)?.len();
        if size > self.max_bytes {
            return Err(Error::SizeExceeded {
                size,
                limit: self.max_bytes,
            });
        }

        let bytes = fs::read(&canonical)?;
        let extension = extension_of(&canonical);
        let content_type = extension
            .as_deref()
            .map(content_type_for_extension)
            .filter(|ct| !ct.is_empty())
            .map(String::from);
        Ok(ResolvedSource {
            bytes,
            content_type,
            extension,
        })
    }

    fn fetch_remote(&self, url: &Url, deadline: &Deadline) -> Result<ResolvedSource> {
        let remaining = deadline.remaining();
        if remaining.is_zero() {
            return Err(Error::Timeout);
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(remaining)
            .build()?;
        let response = client.get(url.as_str()).send()?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| {
                v.split(';')
                    .next()
                    .unwrap_or(v)
                    .trim()
                    .to_ascii_lowercase()
            });

        let status = response.status();
        if !status.is_success() {
            // Keep the response content type so the boundary can still
            // report it with the empty result.
            return Err(Error::Fetch {
                reason: format!("{url}: HTTP {status}"),
                content_type,
            });
        }

        if let Some(declared) = response.content_length() {
            if declared > self.max_bytes {
                return Err(Error::SizeExceeded {
                    size: declared,
                    limit: self.max_bytes,
                });
            }
        }

        // Cap the body read even when no length was declared.
        let mut bytes = Vec::new();
        let mut limited = response.take(self.max_bytes + 1);
        limited.read_to_end(&mut bytes)?;
        if bytes.len() as u64 > self.max_bytes {
            return Err(Error::SizeExceeded {
                size: bytes.len() as u64,
                limit: self.max_bytes,
            });
        }

        let extension = Path::new(url.path())
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        Ok(ResolvedSource {
            bytes,
            content_type,
            extension,
        })
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_deadline_expires() {
        let d = Deadline::within(Duration::from_secs(30));
        assert!(d.check().is_ok());
        assert!(d.remaining() > Duration::from_secs(25));

        let spent = Deadline::within(Duration::ZERO);
        assert!(matches!(spent.check(), Err(Error::Timeout)));
        assert_eq!(spent.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_read_local_relative() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("note.TXT")).unwrap();
        f.write_all(b"hello").unwrap();

        let resolver = Resolver::new(dir.path(), 1024);
        let deadline = Deadline::within(Duration::from_secs(5));
        let source = resolver.resolve("note.TXT", &deadline).unwrap();
        assert_eq!(source.bytes, b"hello");
        assert_eq!(source.extension.as_deref(), Some("txt"));
        assert_eq!(source.content_type.as_deref(), Some("text/plain"));
    }

    #[test]
    fn test_path_escape_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let outside = tempfile::NamedTempFile::new().unwrap();
        let reference = outside.path().to_str().unwrap().to_string();

        let resolver = Resolver::new(dir.path(), 1024);
        let deadline = Deadline::within(Duration::from_secs(5));
        let err = resolver.resolve(&reference, &deadline).unwrap_err();
        assert!(matches!(err, Error::PathEscape(_)));
    }

    #[test]
    fn test_dotdot_escape_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let sandbox = dir.path().join("sandbox");
        std::fs::create_dir(&sandbox).unwrap();
        std::fs::write(dir.path().join("secret.txt"), b"x").unwrap();

        let resolver = Resolver::new(&sandbox, 1024);
        let deadline = Deadline::within(Duration::from_secs(5));
        let err = resolver.resolve("../secret.txt", &deadline).unwrap_err();
        assert!(matches!(err, Error::PathEscape(_)));
    }

    #[test]
    fn test_size_limit_enforced_before_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        let f = std::fs::File::create(&path).unwrap();
        f.set_len(4096).unwrap();

        let resolver = Resolver::new(dir.path(), 1024);
        let deadline = Deadline::within(Duration::from_secs(5));
        let err = resolver.resolve("big.bin", &deadline).unwrap_err();
        assert!(matches!(
            err,
            Error::SizeExceeded {
                size: 4096,
                limit: 1024
            }
        ));
    }

    #[test]
    fn test_missing_file_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = Resolver::new(dir.path(), 1024);
        let deadline = Deadline::within(Duration::from_secs(5));
        let err = resolver.resolve("nope.txt", &deadline).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_file_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, b"# hi").unwrap();

        let url = Url::from_file_path(std::fs::canonicalize(&path).unwrap()).unwrap();
        let resolver = Resolver::new(dir.path(), 1024);
        let deadline = Deadline::within(Duration::from_secs(5));
        let source = resolver.resolve(url.as_str(), &deadline).unwrap();
        assert_eq!(source.bytes, b"# hi");
        assert_eq!(source.extension.as_deref(), Some("md"));
    }
}
