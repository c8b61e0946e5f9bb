use serde::{Deserialize, Serialize};

use crate::CanonicalPath;
use crate::ids::STYLESHEET_LOADERS;

/// One node of the host build's module graph, as handed over at build completion.
///
/// The serialized shape matches the host snapshot (`resourcePath`, `loaderChain`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    /// On-disk resource behind the module. `None` for virtual/runtime modules.
    #[serde(default)]
    pub resource_path: Option<String>,

    /// Loader identifiers applied to the resource, in host order.
    #[serde(default)]
    pub loader_chain: Vec<String>,
}

impl ModuleRecord {
    pub fn new<S: Into<String>>(resource_path: S) -> Self {
        Self {
            resource_path: Some(resource_path.into()),
            loader_chain: Vec::new(),
        }
    }

    /// A record with no backing file.
    pub fn virtual_module() -> Self {
        Self::default()
    }

    pub fn with_loader<S: Into<String>>(mut self, loader: S) -> Self {
        self.loader_chain.push(loader.into());
        self
    }

    /// Canonical path of the resource, if the record participates in reachability.
    ///
    /// Records without a resource, or whose resource sits in a vendored directory, yield `None`.
    pub fn participating_path(&self) -> Option<CanonicalPath> {
        let path = CanonicalPath::new(self.resource_path.as_deref()?);
        (!path.is_vendored()).then_some(path)
    }

    /// True when any loader in the chain is a stylesheet preprocessor.
    pub fn uses_stylesheet_loader(&self) -> bool {
        self.loader_chain
            .iter()
            .any(|loader| STYLESHEET_LOADERS.iter().any(|id| loader.contains(id)))
    }
}
