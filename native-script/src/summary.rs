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

use std::collections::{BTreeMap, BTreeSet};

use crate::script::{ScriptKind, ScriptNode, ScriptVisitor, Slot};

/// Static facts about a policy script, independent of the current slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct PolicySummary {
    /// Distinct key hashes of all signature nodes.
    pub signers: BTreeSet<String>,
    /// Smallest slot among `before` nodes.
    pub earliest_before: Option<Slot>,
    /// Largest slot among `after` nodes.
    pub latest_after: Option<Slot>,
    #[serde(serialize_with = "serialize_node_counts")]
    pub node_counts: BTreeMap<ScriptKind, usize>,
    pub unknown_nodes: usize,
    pub depth: usize,
}

impl PolicySummary {
    pub fn is_time_locked(&self) -> bool {
        self.earliest_before.is_some() || self.latest_after.is_some()
    }

    pub fn node_count(&self, kind: ScriptKind) -> usize {
        self.node_counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total_nodes(&self) -> usize {
        self.node_counts.values().sum()
    }
}

fn serialize_node_counts<S: serde::Serializer>(
    counts: &BTreeMap<ScriptKind, usize>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(counts.iter().map(|(kind, count)| {
        let name: &'static str = kind.into();
        (name, count)
    }))
}

struct SummaryCollector {
    summary: PolicySummary,
}

impl SummaryCollector {
    fn count(&mut self, kind: ScriptKind) {
        *self.summary.node_counts.entry(kind).or_insert(0) += 1;
    }
}

impl ScriptVisitor for SummaryCollector {
    fn visit_signature(&mut self, key_hash: &str, _depth: usize) {
        self.count(ScriptKind::Signature);
        self.summary.signers.insert(key_hash.to_owned());
    }

    fn visit_before(&mut self, slot: Slot, _depth: usize) {
        self.count(ScriptKind::Before);
        let earliest = self.summary.earliest_before.map_or(slot, |s| s.min(slot));
        self.summary.earliest_before = Some(earliest);
    }

    fn visit_after(&mut self, slot: Slot, _depth: usize) {
        self.count(ScriptKind::After);
        let latest = self.summary.latest_after.map_or(slot, |s| s.max(slot));
        self.summary.latest_after = Some(latest);
    }

    fn visit_combinator(
        &mut self,
        kind: ScriptKind,
        _required: Option<u64>,
        _children: &[ScriptNode],
        _depth: usize,
    ) {
        self.count(kind);
    }

    fn visit_unknown(&mut self, _depth: usize) {
        self.count(ScriptKind::Unknown);
        self.summary.unknown_nodes += 1;
    }
}

pub fn summarize(node: &ScriptNode) -> PolicySummary {
    let mut collector = SummaryCollector {
        summary: PolicySummary {
            depth: node.depth(),
            ..Default::default()
        },
    };
    node.walk(&mut collector);
    collector.summary
}
