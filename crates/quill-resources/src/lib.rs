//! Application resource registry and context.
//!
//! Font payloads are registered up front under small integer
//! identifiers, the way bundled raw assets are addressed by generated
//! ids, and resolved back into readable byte streams on demand.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

/// Result type for resource resolution.
pub type Result<T> = std::result::Result<T, ResourceError>;

/// Errors raised while resolving a registered resource.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// No payload is registered under the identifier.
    #[error("resource {0} is not registered")]
    NotFound(ResourceId),

    /// A registered payload could not be opened.
    #[error("resource I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Identifier for a bundled resource.
///
/// The raw value 0 is reserved as the "no resource" sentinel and never
/// resolves to a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(u32);

impl ResourceId {
    /// Sentinel meaning "no resource".
    pub const NONE: ResourceId = ResourceId(0);

    pub const fn new(raw: u32) -> Self {
        ResourceId(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    /// True for the reserved sentinel value.
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
enum Entry {
    Bytes(Arc<[u8]>),
    File(PathBuf),
}

/// Registry of bundled payloads addressable by [`ResourceId`].
#[derive(Debug, Clone, Default)]
pub struct Resources {
    entries: HashMap<ResourceId, Entry>,
}

impl Resources {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register an in-memory payload under `id`, replacing any
    /// previous registration.
    pub fn register_bytes(&mut self, id: ResourceId, bytes: impl Into<Arc<[u8]>>) {
        self.entries.insert(id, Entry::Bytes(bytes.into()));
    }

    /// Register a file-backed payload under `id`. The file is opened
    /// lazily on resolution, not at registration time.
    pub fn register_file(&mut self, id: ResourceId, path: impl Into<PathBuf>) {
        self.entries.insert(id, Entry::File(path.into()));
    }

    /// Open a readable byte stream for `id`, or signal that nothing is
    /// registered under it.
    pub fn open_raw(&self, id: ResourceId) -> Result<Box<dyn Read + Send>> {
        match self.entries.get(&id) {
            None => Err(ResourceError::NotFound(id)),
            Some(Entry::Bytes(bytes)) => Ok(Box::new(io::Cursor::new(bytes.clone()))),
            Some(Entry::File(path)) => Ok(Box::new(fs::File::open(path)?)),
        }
    }

    /// True if a payload is registered under `id`.
    pub fn contains(&self, id: ResourceId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Application context: the resource registry plus a private writable
/// scratch directory for transient staging files.
#[derive(Debug, Clone)]
pub struct Context {
    resources: Resources,
    scratch_dir: PathBuf,
}

impl Context {
    pub fn new(resources: Resources, scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            resources,
            scratch_dir: scratch_dir.into(),
        }
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_payload_round_trips() {
        let id = ResourceId::new(3);
        let mut resources = Resources::new();
        resources.register_bytes(id, b"payload".to_vec());

        let mut stream = resources.open_raw(id).unwrap();
        let mut buffer = Vec::new();
        stream.read_to_end(&mut buffer).unwrap();
        assert_eq!(buffer, b"payload");
    }

    #[test]
    fn unregistered_id_is_not_found() {
        let resources = Resources::new();
        match resources.open_raw(ResourceId::new(9)) {
            Err(ResourceError::NotFound(id)) => assert_eq!(id.raw(), 9),
            Err(other) => panic!("expected NotFound, got {other}"),
            Ok(_) => panic!("expected NotFound, got a payload"),
        }
    }

    #[test]
    fn missing_file_payload_is_an_io_error() {
        let id = ResourceId::new(4);
        let mut resources = Resources::new();
        resources.register_file(id, "/nonexistent/quill/font.ttf");

        assert!(resources.contains(id));
        match resources.open_raw(id) {
            Err(ResourceError::Io(_)) => {}
            Err(other) => panic!("expected Io, got {other}"),
            Ok(_) => panic!("expected Io, got a payload"),
        }
    }

    #[test]
    fn sentinel_id_is_none() {
        assert!(ResourceId::NONE.is_none());
        assert!(!ResourceId::new(1).is_none());
        assert_eq!(ResourceId::NONE.raw(), 0);
    }

    #[test]
    fn registration_replaces_previous_payload() {
        let id = ResourceId::new(5);
        let mut resources = Resources::new();
        resources.register_bytes(id, b"old".to_vec());
        resources.register_bytes(id, b"new".to_vec());
        assert_eq!(resources.len(), 1);

        let mut buffer = Vec::new();
        resources.open_raw(id).unwrap().read_to_end(&mut buffer).unwrap();
        assert_eq!(buffer, b"new");
    }
}
