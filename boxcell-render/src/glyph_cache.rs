//! Cache lookup around glyph synthesis.
//!
//! [`BoxGlyphRenderer::resolve`] consults a [`GlyphCache`] and synthesizes on
//! a miss, so each codepoint is built at most once per cell geometry. Entries
//! are keyed by [`GlyphKey`], which carries the geometry and supersampling
//! factor alongside the codepoint, so renderers at different cell sizes can
//! share one cache. A geometry change still drops the whole cache.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use crate::block_chars::{self, CellGeometry, GlyphBitmap};
use boxcell_config::GlyphConfig;

/// Identifies one synthesized bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphKey {
    pub codepoint: u32,
    pub geometry: CellGeometry,
    pub supersampling_factor: u32,
}

impl GlyphKey {
    pub const fn new(codepoint: u32, geometry: CellGeometry, supersampling_factor: u32) -> Self {
        Self {
            codepoint,
            geometry,
            supersampling_factor,
        }
    }
}

impl fmt::Display for GlyphKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "U+{:04X}@{}x{}/{}",
            self.codepoint, self.geometry.width, self.geometry.height, self.geometry.line_thickness
        )?;
        if self.supersampling_factor > 1 {
            write!(f, "x{}", self.supersampling_factor)?;
        }
        Ok(())
    }
}

/// Storage for synthesized glyphs.
///
/// The renderer never inspects handles; it only hands them back to callers.
pub trait GlyphCache {
    type Handle: Clone;

    fn lookup(&mut self, key: &GlyphKey) -> Option<Self::Handle>;

    /// Take ownership of a freshly built `width` x `height` bitmap.
    fn insert(&mut self, key: GlyphKey, width: u32, height: u32, bitmap: GlyphBitmap)
    -> Self::Handle;

    fn clear(&mut self);
}

/// In-memory LRU cache handing out shared bitmaps.
pub struct LruGlyphCache {
    entries: LruCache<GlyphKey, Arc<GlyphBitmap>>,
}

impl LruGlyphCache {
    /// Cache keeping at most `capacity` glyphs (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}

impl GlyphCache for LruGlyphCache {
    type Handle = Arc<GlyphBitmap>;

    fn lookup(&mut self, key: &GlyphKey) -> Option<Self::Handle> {
        self.entries.get(key).cloned()
    }

    fn insert(
        &mut self,
        key: GlyphKey,
        width: u32,
        height: u32,
        bitmap: GlyphBitmap,
    ) -> Self::Handle {
        debug_assert_eq!((bitmap.width(), bitmap.height()), (width, height));
        let handle = Arc::new(bitmap);
        if let Some((evicted, _)) = self.entries.push(key, Arc::clone(&handle))
            && evicted != key
        {
            log::debug!("Glyph cache full, evicted {evicted}");
        }
        handle
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// One cache shared between several renderers, e.g. one per thread.
impl<C: GlyphCache> GlyphCache for Arc<Mutex<C>> {
    type Handle = C::Handle;

    fn lookup(&mut self, key: &GlyphKey) -> Option<Self::Handle> {
        self.lock().lookup(key)
    }

    fn insert(
        &mut self,
        key: GlyphKey,
        width: u32,
        height: u32,
        bitmap: GlyphBitmap,
    ) -> Self::Handle {
        self.lock().insert(key, width, height, bitmap)
    }

    fn clear(&mut self) {
        self.lock().clear();
    }
}

/// Synthesizes box drawing, block element, sextant and bracket glyphs on
/// demand and memoizes them in `C`.
pub struct BoxGlyphRenderer<C: GlyphCache> {
    geometry: CellGeometry,
    supersampling_factor: u32,
    cache: C,
}

impl BoxGlyphRenderer<LruGlyphCache> {
    /// Renderer with an [`LruGlyphCache`] sized and configured from `config`.
    pub fn from_config(config: &GlyphConfig) -> Self {
        Self::new(
            CellGeometry::from(config),
            config.effective_supersampling_factor(),
            LruGlyphCache::new(config.cache_capacity),
        )
    }
}

impl<C: GlyphCache> BoxGlyphRenderer<C> {
    pub fn new(geometry: CellGeometry, supersampling_factor: u32, cache: C) -> Self {
        Self {
            geometry,
            supersampling_factor,
            cache,
        }
    }

    pub fn geometry(&self) -> CellGeometry {
        self.geometry
    }

    pub fn supersampling_factor(&self) -> u32 {
        self.supersampling_factor
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Whether `codepoint` is synthesized here rather than taken from a font.
    pub fn renderable(&self, codepoint: u32) -> bool {
        block_chars::renderable(codepoint)
    }

    /// Switch to a new cell geometry, dropping every cached glyph if it
    /// differs from the current one.
    pub fn set_geometry(&mut self, geometry: CellGeometry) {
        if geometry != self.geometry {
            log::debug!(
                "Cell geometry changed from {:?} to {:?}, clearing glyph cache",
                self.geometry,
                geometry
            );
            self.geometry = geometry;
            self.cache.clear();
        }
    }

    /// Change the anti-aliasing factor; cached glyphs are dropped on change.
    pub fn set_supersampling_factor(&mut self, factor: u32) {
        if factor != self.supersampling_factor {
            log::debug!("Supersampling factor changed to {factor}, clearing glyph cache");
            self.supersampling_factor = factor;
            self.cache.clear();
        }
    }

    pub fn clear_cache(&mut self) {
        log::debug!("Clearing glyph cache");
        self.cache.clear();
    }

    /// Cached glyph for `codepoint` at `geometry`, synthesizing it on a miss.
    ///
    /// Returns `None` when the codepoint is not renderable or its glyph
    /// cannot be built; the caller falls back to font rendering.
    pub fn resolve(&mut self, codepoint: u32, geometry: CellGeometry) -> Option<C::Handle> {
        self.set_geometry(geometry);

        if !block_chars::renderable(codepoint) {
            return None;
        }
        let key = GlyphKey::new(codepoint, geometry, self.supersampling_factor);
        if let Some(handle) = self.cache.lookup(&key) {
            return Some(handle);
        }

        log::debug!("Glyph cache miss for {key}");
        let bitmap = match block_chars::synthesize(codepoint, geometry, self.supersampling_factor) {
            Ok(Some(bitmap)) => bitmap,
            Ok(None) => return None,
            Err(e) => {
                log::debug!("U+{codepoint:04X} is not buildable: {e}");
                return None;
            }
        };

        let (width, height) = (bitmap.width(), bitmap.height());
        log::debug!("Glyph cache insert {key} ({width}x{height})");
        Some(self.cache.insert(key, width, height, bitmap))
    }
}
