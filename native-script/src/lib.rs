// Copyright (c) 2026 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Native script minting policies: tree model, lock evaluation and explanation traces.

pub mod evaluate;
pub mod render;
pub mod script;
pub mod summary;

pub use evaluate::{
    cache::EvaluationCache,
    evaluate, evaluate_with,
    vocabulary::{English, TraceVocabulary},
    Evaluation, INDENT_UNIT,
};
pub use render::{render_trace, RenderedLine, Segment};
pub use script::{ScriptKind, ScriptNode, ScriptVisitor, Slot};
pub use summary::{summarize, PolicySummary};

#[cfg(test)]
mod tests;
