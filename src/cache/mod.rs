//! Cache module for storing the API response on disk
//!
//! The cache is a byte-for-byte copy of the last successful network response
//! with a short TTL, so repeated invocations within a minute do not hit the
//! airport API again.

mod manager;

pub use manager::{CacheError, CacheManager, CACHE_FILE_NAME, DEFAULT_TTL};
