// Copyright 2025 The Quarry Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::IndexCapability;

/// Identity of an index provider: a unique name plus a version tag.
///
/// Two descriptors denote the same provider exactly when both fields match.
/// The descriptor carries no behavior; the provider owning it does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    name: String,
    version: String,
}

impl ProviderDescriptor {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl Display for ProviderDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.name, self.version)
    }
}

/// Immutable description of a schema index.
///
/// An index covers one label's properties and is bound to the provider that
/// builds and serves it. The optional capability is not part of the stored
/// definition; it is attached by the registry when the bound provider is
/// resolved (see `IndexProviderRegistry::with_capabilities` in
/// `quarry-lib`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDescriptor {
    /// Name of the index, unique within a schema.
    name: String,
    /// Label (or table) whose entries the index covers.
    label: String,
    /// Properties the index covers, in indexed order.
    properties: Vec<String>,
    /// Identity of the provider this index is bound to.
    provider: ProviderDescriptor,
    /// Provider-specific settings for this index.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    config: HashMap<String, Value>,
    /// Capability of the index, when resolved from its provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    capability: Option<IndexCapability>,
}

impl IndexDescriptor {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        properties: Vec<String>,
        provider: ProviderDescriptor,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            properties,
            provider,
            config: HashMap::new(),
            capability: None,
        }
    }

    /// Add a provider-specific setting.
    pub fn with_config(mut self, key: impl Into<String>, value: Value) -> Self {
        self.config.insert(key.into(), value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    pub fn provider(&self) -> &ProviderDescriptor {
        &self.provider
    }

    pub fn config(&self) -> &HashMap<String, Value> {
        &self.config
    }

    pub fn capability(&self) -> Option<&IndexCapability> {
        self.capability.as_ref()
    }

    /// Derive a copy of this descriptor with the given capability attached.
    ///
    /// The receiver is left untouched; descriptors are immutable values.
    pub fn with_capability(&self, capability: IndexCapability) -> IndexDescriptor {
        IndexDescriptor {
            capability: Some(capability),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_name_index() -> IndexDescriptor {
        IndexDescriptor::new(
            "person_name",
            "Person",
            vec!["name".to_string()],
            ProviderDescriptor::new("btree", "1.0"),
        )
    }

    #[test]
    fn test_provider_descriptor_identity() {
        let a = ProviderDescriptor::new("btree", "1.0");
        let b = ProviderDescriptor::new("btree", "1.0");
        let c = ProviderDescriptor::new("btree", "2.0");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "btree-1.0");
    }

    #[test]
    fn test_with_capability_derives_new_descriptor() {
        let index = person_name_index();
        let enriched = index.with_capability(IndexCapability::range_scan());

        assert!(index.capability().is_none());
        assert_eq!(enriched.capability(), Some(&IndexCapability::range_scan()));
        assert_eq!(enriched.name(), index.name());
        assert_eq!(enriched.provider(), index.provider());
    }

    #[test]
    fn test_with_config_accumulates_settings() {
        let index = person_name_index()
            .with_config("page_size", serde_json::json!(4096))
            .with_config("compression", serde_json::json!("lz4"));

        assert_eq!(index.config().len(), 2);
        assert_eq!(index.config()["page_size"], serde_json::json!(4096));
    }
}
