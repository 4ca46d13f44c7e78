use std::fs::File;
use std::io::BufReader;

use super::{dimensions_from_reader, ImageDimensions, ImageMetadataResolver};
use crate::core::config::ResolverConfig;
use crate::core::constants::FILE_SCHEME;
use crate::Result;

#[cfg(feature = "debug")]
use log;

/// Reads image dimensions from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileResolver {
    config: ResolverConfig,
}

impl FileResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

impl ImageMetadataResolver for FileResolver {
    fn resolve(&self, source: &str) -> Result<ImageDimensions> {
        let locator = source.strip_prefix(FILE_SCHEME).unwrap_or(source);
        let path = self.config.local_path(locator);

        #[cfg(feature = "debug")]
        log::debug!("Probing image header at {}", path.display());

        let file = File::open(&path)?;
        dimensions_from_reader(BufReader::new(file))
    }
}
