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

use serde::{Deserialize, Serialize};

/// Guarantees an index offers once built by its provider.
///
/// Capabilities are declared by the provider, not stored with the index;
/// the registry attaches them to an [`IndexDescriptor`] on demand.
///
/// [`IndexDescriptor`]: super::IndexDescriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexCapability {
    /// The index answers exact-match (value equality) lookups.
    pub exact_match: bool,
    /// The index answers range scans over its indexed values.
    pub range: bool,
    /// Scan results come back in indexed-value order.
    pub ordered: bool,
}

impl IndexCapability {
    /// Capability of a plain value-lookup index.
    pub fn exact() -> Self {
        Self {
            exact_match: true,
            range: false,
            ordered: false,
        }
    }

    /// Capability of an ordered index supporting range scans.
    pub fn range_scan() -> Self {
        Self {
            exact_match: true,
            range: true,
            ordered: true,
        }
    }
}
