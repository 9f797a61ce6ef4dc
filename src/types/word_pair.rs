// Copyright 2025 Fernando Borretti
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

use serde::Serialize;

/// A term in the study language and its translation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct WordPair {
    /// The French term.
    source: &'static str,
    /// The English translation.
    target: &'static str,
}

impl WordPair {
    pub const fn new(source: &'static str, target: &'static str) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn target(&self) -> &'static str {
        self.target
    }
}
