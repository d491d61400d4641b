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

use crate::script::Slot;

/// Wording used in explanation traces.
///
/// Only the text is pluggable. Which label a node gets and where headers and indentation go
/// is decided by the evaluator.
pub trait TraceVocabulary {
    /// Label of a top-level rule, `number` starting at 1.
    fn rule(&self, number: usize) -> String;

    /// Label of a rule nested inside another rule.
    fn sub_rule(&self, number: usize) -> String;

    fn signed_by(&self, key_hash: &str) -> String;

    fn before_slot(&self, slot: Slot, current_slot: Slot) -> String;

    fn after_slot(&self, slot: Slot, current_slot: Slot) -> String;

    fn all_of_header(&self) -> String;

    fn any_of_header(&self) -> String;

    fn at_least_header(&self, required: u64) -> String;

    /// Placeholder for nodes that can't be interpreted.
    fn unknown_script(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl TraceVocabulary for English {
    fn rule(&self, number: usize) -> String {
        format!("Rule #{number}")
    }

    fn sub_rule(&self, number: usize) -> String {
        format!("Sub Rule #{number}")
    }

    fn signed_by(&self, key_hash: &str) -> String {
        format!("signed by key {key_hash}")
    }

    fn before_slot(&self, slot: Slot, current_slot: Slot) -> String {
        format!("before slot {slot} (current: {current_slot})")
    }

    fn after_slot(&self, slot: Slot, current_slot: Slot) -> String {
        format!("after slot {slot} (current: {current_slot})")
    }

    fn all_of_header(&self) -> String {
        "All rules must be met".to_owned()
    }

    fn any_of_header(&self) -> String {
        "At least one rule must be met".to_owned()
    }

    fn at_least_header(&self, required: u64) -> String {
        format!("At least {required} rules must be met")
    }

    fn unknown_script(&self) -> String {
        "unknown script type".to_owned()
    }
}
