//! Image metadata resolution
//!
//! A marker icon needs the natural size of its image before it can derive a
//! default size and anchor. Resolution sits behind [`ImageMetadataResolver`]
//! so callers can plug in local files, remote URLs or a precomputed table.

pub mod file;
#[cfg(feature = "http")]
pub mod http;

use std::io::{BufRead, Seek};

use fxhash::FxHashMap as HashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::config::ResolverConfig;
use crate::core::constants::REMOTE_SCHEMES;
use crate::{MapError, Result};

pub use file::FileResolver;
#[cfg(feature = "http")]
pub use http::HttpResolver;

#[cfg(feature = "debug")]
use log;

/// Shared resolver used by `MarkerIcon::create`
static DEFAULT_RESOLVER: Lazy<DefaultResolver> = Lazy::new(|| {
    DefaultResolver::new(ResolverConfig::default()).unwrap_or_else(|_e| {
        #[cfg(feature = "debug")]
        log::warn!("HTTP resolver unavailable, falling back to local files: {}", _e);
        DefaultResolver::local()
    })
});

pub fn default_resolver() -> &'static DefaultResolver {
    &DEFAULT_RESOLVER
}

/// Natural size of an image, as read from its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for ImageDimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Trait for anything that can report the dimensions of an image locator.
///
/// Resolution is synchronous and may block on the filesystem or network.
pub trait ImageMetadataResolver: Send + Sync {
    fn resolve(&self, source: &str) -> Result<ImageDimensions>;
}

impl<R: ImageMetadataResolver + ?Sized> ImageMetadataResolver for &R {
    fn resolve(&self, source: &str) -> Result<ImageDimensions> {
        (**self).resolve(source)
    }
}

impl<R: ImageMetadataResolver + ?Sized> ImageMetadataResolver for Box<R> {
    fn resolve(&self, source: &str) -> Result<ImageDimensions> {
        (**self).resolve(source)
    }
}

/// Reads only the image header from `reader`, guessing the format from its
/// leading bytes.
pub(crate) fn dimensions_from_reader<R: BufRead + Seek>(reader: R) -> Result<ImageDimensions> {
    let dimensions = image::io::Reader::new(reader)
        .with_guessed_format()?
        .into_dimensions()?;
    Ok(dimensions.into())
}

pub(crate) fn is_remote(source: &str) -> bool {
    REMOTE_SCHEMES.iter().any(|scheme| {
        source
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Resolver that routes remote locators to HTTP and everything else to the
/// filesystem.
pub struct DefaultResolver {
    file: FileResolver,
    #[cfg(feature = "http")]
    http: Option<HttpResolver>,
}

impl DefaultResolver {
    pub fn new(config: ResolverConfig) -> Result<Self> {
        #[cfg(feature = "http")]
        let http = if config.allow_remote {
            Some(HttpResolver::new(&config)?)
        } else {
            None
        };

        Ok(Self {
            file: FileResolver::new(config),
            #[cfg(feature = "http")]
            http,
        })
    }

    /// Filesystem-only resolver with default settings.
    pub fn local() -> Self {
        Self {
            file: FileResolver::new(ResolverConfig::local_only()),
            #[cfg(feature = "http")]
            http: None,
        }
    }
}

impl ImageMetadataResolver for DefaultResolver {
    fn resolve(&self, source: &str) -> Result<ImageDimensions> {
        if !is_remote(source) {
            return self.file.resolve(source);
        }

        #[cfg(feature = "http")]
        if let Some(http) = &self.http {
            return http.resolve(source);
        }

        Err(MapError::invalid_resource(
            source,
            "remote image sources are disabled",
        ))
    }
}

/// Fixed table of locator -> dimensions.
///
/// Useful for sprite catalogs whose sizes are known ahead of time.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    entries: HashMap<String, ImageDimensions>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl Into<String>, width: u32, height: u32) -> Self {
        self.insert(source, width, height);
        self
    }

    pub fn insert(&mut self, source: impl Into<String>, width: u32, height: u32) {
        self.entries
            .insert(source.into(), ImageDimensions::new(width, height));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ImageMetadataResolver for StaticResolver {
    fn resolve(&self, source: &str) -> Result<ImageDimensions> {
        self.entries
            .get(source)
            .copied()
            .ok_or_else(|| MapError::invalid_resource(source, "no metadata registered"))
    }
}
