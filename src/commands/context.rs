//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use std::sync::Arc;

use crate::features::youtube::{search_reply, VideoSearch};
use anyhow::Result;

/// Shared context for all command handlers
///
/// Built once in `main` and handed to every handler; holds nothing mutable.
#[derive(Clone)]
pub struct CommandContext {
    pub video_search: Arc<dyn VideoSearch>,
}

impl CommandContext {
    pub fn new(video_search: Arc<dyn VideoSearch>) -> Self {
        Self { video_search }
    }

    /// Search YouTube and build the reply text for `query`
    pub async fn youtube_reply(&self, query: &str) -> Result<String> {
        search_reply(self.video_search.as_ref(), query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_context_clone() {
        // CommandContext should be Clone for sharing across handlers
        fn assert_clone<T: Clone>() {}
        assert_clone::<CommandContext>();
    }
}
