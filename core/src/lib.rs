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

//! Core abstractions for the Quarry indexing subsystem.
//!
//! This crate owns the interface traits that index providers implement, the
//! data model shared between providers and the rest of the kernel, and the
//! no-op sentinel provider used when no real provider is configured.
//! Provider resolution lives in `quarry-lib`.

pub mod interface;
pub mod models;
pub mod no_op;
