//! Size limit constants for input validation

/// Default maximum length for a compact token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Default maximum size for header JSON (8KB)
pub(crate) const MAX_HEADER_SIZE: usize = 8 * 1024;

/// Maximum length for algorithm (alg) field in the header (16 bytes)
pub(crate) const MAX_ALG_LENGTH: usize = 16;

/// Maximum length for key ID (kid) field in the header (256 bytes)
pub(crate) const MAX_KID_LENGTH: usize = 256;
