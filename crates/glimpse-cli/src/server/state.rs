//! Application state for the web server.

use std::sync::Arc;

use glimpse::Profiler;

/// Shared application state.
///
/// The profiler is immutable and shared by every request.
#[derive(Clone)]
pub struct AppState {
    /// The profiling engine.
    pub profiler: Arc<Profiler>,
    /// Largest request body accepted, in bytes.
    pub body_limit: usize,
}

impl AppState {
    /// Create new application state.
    ///
    /// The body limit follows the profiler's decoder ceiling; no ceiling
    /// means no limit.
    pub fn new(profiler: Profiler) -> Self {
        let body_limit = match profiler.config().parser.max_bytes {
            Some(limit) => usize::try_from(limit).unwrap_or(usize::MAX),
            None => usize::MAX,
        };

        Self {
            profiler: Arc::new(profiler),
            body_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimpse::input::DEFAULT_MAX_BYTES;
    use glimpse::ParserConfig;

    #[test]
    fn test_body_limit_follows_decoder_ceiling() {
        let state = AppState::new(Profiler::new());
        assert_eq!(state.body_limit as u64, DEFAULT_MAX_BYTES);
    }

    #[test]
    fn test_unlimited_decoder_means_unlimited_body() {
        let profiler = Profiler::new().with_parser(ParserConfig {
            max_bytes: None,
            ..ParserConfig::default()
        });
        assert_eq!(AppState::new(profiler).body_limit, usize::MAX);
    }

    #[test]
    fn test_oversized_ceiling_saturates() {
        let profiler = Profiler::new().with_parser(ParserConfig {
            max_bytes: Some(u64::MAX),
            ..ParserConfig::default()
        });
        assert_eq!(AppState::new(profiler).body_limit, usize::MAX);
    }
}
