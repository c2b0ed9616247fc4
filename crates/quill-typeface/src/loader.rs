use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use hashbrown::HashMap;

use quill_resources::{Context, ResourceError, ResourceId};

use crate::face::Typeface;
use crate::{FontError, Result};

/// The platform primitives behind the cache: building a typeface
/// handle from a staged font file, and supplying the default handle
/// used when loading cannot produce a custom face.
///
/// Swap in a stub to exercise cache behavior without real font data.
pub trait FaceSource: Send + Sync {
    /// Construct a handle from a font file on disk.
    fn load_file(&self, path: &Path) -> Result<Typeface>;

    /// The platform-default handle. Never enters the resource cache.
    fn fallback(&self) -> Typeface;
}

/// Production [`FaceSource`]: parses faces with swash and resolves the
/// default handle from the system font database once per source.
#[derive(Debug, Default)]
pub struct SwashSource {
    fallback: OnceLock<Typeface>,
}

impl SwashSource {
    pub fn new() -> Self {
        Self {
            fallback: OnceLock::new(),
        }
    }
}

impl FaceSource for SwashSource {
    fn load_file(&self, path: &Path) -> Result<Typeface> {
        Typeface::from_file(path, 0)
    }

    fn fallback(&self) -> Typeface {
        self.fallback
            .get_or_init(|| load_system_default().unwrap_or_else(Typeface::fallback))
            .clone()
    }
}

/// Load the system sans-serif face as a typeface handle, if the host
/// has one.
pub fn load_system_default() -> Option<Typeface> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..fontdb::Query::default()
    };
    let id = db.query(&query)?;
    db.with_face_data(id, |data, index| {
        Typeface::from_vec(data.to_vec(), index as usize).ok()
    })
    .flatten()
}

/// Anything a typeface can be applied to: a text element that carries
/// an application context and exposes a set-typeface mutator.
pub trait FontTarget {
    fn context(&self) -> &Context;
    fn set_typeface(&mut self, typeface: Typeface);
}

/// Resource-backed typeface cache.
///
/// A handle is constructed at most once per resource identifier and
/// every subsequent request returns the identical cached instance.
/// All operations serialize on one internal lock, staging I/O
/// included; loading is a rare one-time event per resource, not a hot
/// path.
pub struct Typefaces {
    source: Box<dyn FaceSource>,
    entries: Mutex<HashMap<ResourceId, Typeface>>,
}

impl Typefaces {
    /// Cache backed by the production [`SwashSource`].
    pub fn new() -> Self {
        Self::with_source(Box::new(SwashSource::new()))
    }

    /// Cache backed by a caller-provided face source.
    pub fn with_source(source: Box<dyn FaceSource>) -> Self {
        Self {
            source,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve the typeface registered under `id`, loading and caching
    /// it on first use.
    ///
    /// Never fails: the sentinel identifier, an unregistered resource,
    /// an unreadable payload, and unparseable font data all degrade to
    /// the source's default handle. Failures are not cached, so the
    /// load is re-attempted on the next call.
    pub fn get(&self, context: &Context, id: ResourceId) -> Typeface {
        let mut entries = self.entries.lock().unwrap();

        if id.is_none() {
            log::debug!("invalid typeface resource id");
            return self.source.fallback();
        }
        if let Some(typeface) = entries.get(&id) {
            return typeface.clone();
        }

        match self.load_uncached(context, id) {
            Ok(typeface) => {
                entries.insert(id, typeface.clone());
                typeface
            }
            Err(FontError::Resource(ResourceError::NotFound(_))) => {
                log::debug!("typeface resource {id} is not registered");
                self.source.fallback()
            }
            Err(err) => {
                log::error!("could not load typeface resource {id}, reverting to default: {err}");
                self.source.fallback()
            }
        }
    }

    /// Resolve the typeface for `id` via the target's own context and
    /// set it on the target. Returns the target to promote chaining.
    pub fn apply<'a, T: FontTarget>(&self, target: &'a mut T, id: ResourceId) -> &'a mut T {
        let typeface = self.get(target.context(), id);
        target.set_typeface(typeface);
        target
    }

    /// Number of cached handles.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn load_uncached(&self, context: &Context, id: ResourceId) -> Result<Typeface> {
        let mut stream = context.resources().open_raw(id)?;
        let staged = stage_stream(context.scratch_dir(), stream.as_mut())?;
        let loaded = self.source.load_file(&staged);
        if let Err(err) = fs::remove_file(&staged) {
            log::warn!(
                "failed to remove staged font file {}: {err}",
                staged.display()
            );
        }
        loaded
    }
}

impl Default for Typefaces {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy `stream` to a uniquely named file in `dir`. Uniqueness comes
/// from a nanosecond timestamp; loads serialize on the cache lock, so
/// same-process collisions cannot occur. The file is removed again if
/// the copy fails partway.
fn stage_stream(dir: &Path, stream: &mut dyn Read) -> Result<PathBuf> {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    let path = dir.join(format!("typeface-{stamp}.ttf"));

    let mut writer = io::BufWriter::new(fs::File::create(&path)?);
    if let Err(err) = io::copy(stream, &mut writer).and_then(|_| writer.flush()) {
        let _ = fs::remove_file(&path);
        return Err(err.into());
    }
    Ok(path)
}
