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

use std::collections::HashMap;

use crate::script::{ScriptNode, Slot};

use super::{
    evaluate_with,
    vocabulary::{English, TraceVocabulary},
    Evaluation,
};

type SlotEvaluations = HashMap<Slot, Evaluation>;

/// Memoized [evaluate_with] results keyed by script tree and slot.
///
/// A tree is cloned into the cache only the first time it is seen.
#[derive(Debug, Default)]
pub struct EvaluationCache<V = English> {
    vocabulary: V,
    by_script: HashMap<ScriptNode, SlotEvaluations>,
    missing_script: SlotEvaluations,
}

impl EvaluationCache<English> {
    pub fn new() -> Self {
        Self::with_vocabulary(English)
    }
}

impl<V: TraceVocabulary> EvaluationCache<V> {
    pub fn with_vocabulary(vocabulary: V) -> Self {
        Self {
            vocabulary,
            by_script: HashMap::new(),
            missing_script: HashMap::new(),
        }
    }

    pub fn get_or_evaluate(
        &mut self,
        node: Option<&ScriptNode>,
        current_slot: Slot,
    ) -> &Evaluation {
        let evaluations = match node {
            Some(script) => {
                if !self.by_script.contains_key(script) {
                    self.by_script.insert(script.clone(), HashMap::new());
                }
                self.by_script.get_mut(script).expect("inserted above")
            }
            None => &mut self.missing_script,
        };

        let vocabulary = &self.vocabulary;
        evaluations
            .entry(current_slot)
            .or_insert_with(|| evaluate_with(node, current_slot, vocabulary))
    }

    /// Drop everything that wasn't evaluated at `current_slot`, e.g. after the chain tip moved.
    pub fn retain_slot(&mut self, current_slot: Slot) {
        let keep_slot = |slot: &Slot, _: &mut Evaluation| *slot == current_slot;
        self.missing_script.retain(keep_slot);
        self.by_script.retain(|_, evaluations| {
            evaluations.retain(keep_slot);
            !evaluations.is_empty()
        });
    }

    /// Number of cached `(script, slot)` evaluations.
    pub fn len(&self) -> usize {
        self.missing_script.len() + self.by_script.values().map(HashMap::len).sum::<usize>()
    }

    /// Number of distinct script trees held.
    pub fn script_count(&self) -> usize {
        self.by_script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.by_script.clear();
        self.missing_script.clear();
    }
}
