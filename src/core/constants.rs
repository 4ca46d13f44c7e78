//! Crate-wide constants for resource resolution.
//! Keeping them in a single place makes the resolver defaults easy to find.

/// User agent sent by the HTTP resolver unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("gmap-overlay/", env!("CARGO_PKG_VERSION"));

/// Upper bound on how much of a remote image body is read for its header.
pub const MAX_REMOTE_BYTES: u64 = 1 << 20;

/// Locator prefixes handled by the remote resolver.
pub const REMOTE_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Prefix stripped from local locators before touching the filesystem.
pub const FILE_SCHEME: &str = "file://";

/// Sprite origin used when none is configured.
pub const DEFAULT_ORIGIN: (i32, i32) = (0, 0);
