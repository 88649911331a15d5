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

//! Provider Resolution Module
//!
//! This module owns the mapping from provider identity to installed
//! [`IndexProvider`] instances. Schema operations and query planning resolve
//! providers through it, either explicitly (by descriptor or name) or via
//! the designated default.
//!
//! [`IndexProvider`]: quarry_core::interface::IndexProvider

pub mod registry;

pub use registry::{IndexProviderRegistry, IndexProviderRegistryBuilder};
