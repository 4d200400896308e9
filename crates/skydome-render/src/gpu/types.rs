use serde::Serialize;

/// Opaque reference to a texture loaded by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TextureHandle(String);

impl TextureHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
