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

// ============================================================================
// Core Public Modules
// ============================================================================

/// Error types for quarry-lib
pub mod error;

/// Provider resolution for the indexing subsystem
pub mod providers;

// ============================================================================
// Clean Public API - Everything Users Need
// ============================================================================

/// Registry of installed index providers - built once at assembly time
pub use providers::{IndexProviderRegistry, IndexProviderRegistryBuilder};

/// Error types for quarry-lib
pub use error::{QuarryError, Result};
