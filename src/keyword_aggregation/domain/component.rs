use crate::shared::error::CatalogError;
use crate::shared::Result;

/// NewType wrapper for an opaque component identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(CatalogError::Validation {
                message: "Component id cannot be empty".to_string(),
            }
            .into());
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog component as seen by the aggregator: identity, visibility and tags.
///
/// Keywords are free-form and may repeat within one component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRecord {
    id: ComponentId,
    show: bool,
    keywords: Vec<String>,
}

impl ComponentRecord {
    pub fn new(id: ComponentId, show: bool, keywords: Vec<String>) -> Self {
        Self { id, show, keywords }
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    /// Whether the component is publicly listed
    pub fn is_visible(&self) -> bool {
        self.show
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}
