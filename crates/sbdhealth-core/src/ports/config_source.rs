//! Configuration source port.
//!
//! Supplies the raw bytes of the SBD configuration once per collection
//! cycle. The runtime crate provides a file-backed implementation.

use async_trait::async_trait;

use super::SbdError;

/// Port for reading the raw SBD configuration.
#[async_trait]
pub trait ConfigSourcePort: Send + Sync {
    /// Human-readable description of where the configuration comes from.
    fn describe(&self) -> String;

    /// Read the full configuration content.
    ///
    /// Fails with [`SbdError::ConfigUnavailable`] when the source cannot be
    /// opened or fully read.
    async fn read(&self) -> Result<Vec<u8>, SbdError>;
}

/// Configuration source backed by an in-memory buffer.
///
/// Used by tests and by callers that already hold the configuration.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigSource {
    content: Vec<u8>,
}

impl InMemoryConfigSource {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[async_trait]
impl ConfigSourcePort for InMemoryConfigSource {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    async fn read(&self) -> Result<Vec<u8>, SbdError> {
        Ok(self.content.clone())
    }
}
