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

mod display;
mod json;

/// A chain slot number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Slot(u64);

impl Slot {
    pub const fn new(slot: u64) -> Self {
        Self(slot)
    }
}

impl From<u64> for Slot {
    fn from(slot: u64) -> Self {
        Self(slot)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Discriminator of a [ScriptNode], named the way the JSON wire format names it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum ScriptKind {
    #[strum(serialize = "sig")]
    Signature,
    #[strum(serialize = "before")]
    Before,
    #[strum(serialize = "after")]
    After,
    #[strum(serialize = "all")]
    AllOf,
    #[strum(serialize = "any")]
    AnyOf,
    #[strum(serialize = "atLeast")]
    AtLeast,
    #[strum(serialize = "unknown")]
    Unknown,
}

/// Native script tree of a minting policy.
///
/// Trees are built once from the backend JSON (see [ScriptNode::from_json_value]) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScriptNode {
    /// Satisfied by a signature of the given key hash.
    Signature { key_hash: String },
    /// Time bound on the slot, see [crate::evaluate] for how it contributes to the lock verdict.
    Before { slot: Slot },
    After { slot: Slot },
    AllOf { scripts: Vec<ScriptNode> },
    AnyOf { scripts: Vec<ScriptNode> },
    AtLeast { required: u64, scripts: Vec<ScriptNode> },
    /// Node with a missing or unrecognized type, or with malformed fields.
    Unknown,
}

impl ScriptNode {
    pub fn signature(key_hash: impl Into<String>) -> Self {
        Self::Signature {
            key_hash: key_hash.into(),
        }
    }

    pub fn before(slot: u64) -> Self {
        Self::Before {
            slot: Slot::new(slot),
        }
    }

    pub fn after(slot: u64) -> Self {
        Self::After {
            slot: Slot::new(slot),
        }
    }

    pub fn all_of(scripts: Vec<ScriptNode>) -> Self {
        Self::AllOf { scripts }
    }

    pub fn any_of(scripts: Vec<ScriptNode>) -> Self {
        Self::AnyOf { scripts }
    }

    pub fn at_least(required: u64, scripts: Vec<ScriptNode>) -> Self {
        Self::AtLeast { required, scripts }
    }

    pub fn kind(&self) -> ScriptKind {
        match self {
            ScriptNode::Signature { .. } => ScriptKind::Signature,
            ScriptNode::Before { .. } => ScriptKind::Before,
            ScriptNode::After { .. } => ScriptKind::After,
            ScriptNode::AllOf { .. } => ScriptKind::AllOf,
            ScriptNode::AnyOf { .. } => ScriptKind::AnyOf,
            ScriptNode::AtLeast { .. } => ScriptKind::AtLeast,
            ScriptNode::Unknown => ScriptKind::Unknown,
        }
    }

    /// Child scripts; empty for leaf nodes.
    pub fn children(&self) -> &[ScriptNode] {
        match self {
            ScriptNode::AllOf { scripts }
            | ScriptNode::AnyOf { scripts }
            | ScriptNode::AtLeast {
                required: _,
                scripts,
            } => scripts,
            ScriptNode::Signature { .. }
            | ScriptNode::Before { .. }
            | ScriptNode::After { .. }
            | ScriptNode::Unknown => &[],
        }
    }

    /// Height of the tree, a single leaf having height 1.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(ScriptNode::depth).max().unwrap_or(0)
    }

    /// Visit every node in pre-order.
    pub fn walk<V: ScriptVisitor + ?Sized>(&self, visitor: &mut V) {
        self.walk_at(visitor, 0)
    }

    fn walk_at<V: ScriptVisitor + ?Sized>(&self, visitor: &mut V, depth: usize) {
        match self {
            ScriptNode::Signature { key_hash } => visitor.visit_signature(key_hash, depth),
            ScriptNode::Before { slot } => visitor.visit_before(*slot, depth),
            ScriptNode::After { slot } => visitor.visit_after(*slot, depth),
            ScriptNode::Unknown => visitor.visit_unknown(depth),
            ScriptNode::AllOf { scripts } | ScriptNode::AnyOf { scripts } => {
                visitor.visit_combinator(self.kind(), None, scripts, depth);
                scripts.iter().for_each(|s| s.walk_at(visitor, depth + 1));
            }
            ScriptNode::AtLeast { required, scripts } => {
                visitor.visit_combinator(self.kind(), Some(*required), scripts, depth);
                scripts.iter().for_each(|s| s.walk_at(visitor, depth + 1));
            }
        }
    }
}

/// Pre-order script tree visitor. All hooks default to doing nothing.
///
/// `depth` is 0 for the root and grows by one per nesting level.
pub trait ScriptVisitor {
    fn visit_signature(&mut self, _key_hash: &str, _depth: usize) {}

    fn visit_before(&mut self, _slot: Slot, _depth: usize) {}

    fn visit_after(&mut self, _slot: Slot, _depth: usize) {}

    /// Called for `AllOf`, `AnyOf` and `AtLeast` before their children are visited.
    /// `required` is only set for `AtLeast`.
    fn visit_combinator(
        &mut self,
        _kind: ScriptKind,
        _required: Option<u64>,
        _children: &[ScriptNode],
        _depth: usize,
    ) {
    }

    fn visit_unknown(&mut self, _depth: usize) {}
}
