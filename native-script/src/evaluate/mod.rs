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

//! Lock evaluation of native scripts against the current slot.

pub mod cache;
pub mod vocabulary;

use crate::script::{ScriptNode, Slot};

use self::vocabulary::{English, TraceVocabulary};

/// Number of spaces added to a trace line per nesting level.
pub const INDENT_UNIT: usize = 4;

/// Outcome of evaluating a policy script at some slot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Evaluation {
    /// Whether the policy is currently locked.
    pub locked: bool,
    /// Explanation, one visited node per line. Lines are indented by [INDENT_UNIT] spaces per
    /// nesting level and headers are wrapped in `<b>`/`</b>`.
    pub trace: String,
}

/// Evaluate a script with the [English] vocabulary.
pub fn evaluate(node: Option<&ScriptNode>, current_slot: Slot) -> Evaluation {
    evaluate_with(node, current_slot, &English)
}

/// Evaluate a script tree against `current_slot`.
///
/// Leaf verdicts:
/// * signature: never locked, the witness isn't known here
/// * `before(slot)`: `slot < current_slot`
/// * `after(slot)`: `slot > current_slot`
/// * missing or unknown node: not locked, traced as the unknown placeholder
///
/// Combinators evaluate all of their children. `AllOf` is locked if ANY child is locked and
/// `AnyOf` only if ALL children are, the opposite of what their headers say. `AtLeast` is
/// locked if at least `required` children are. Empty combinators follow the usual identities:
/// an empty `AllOf` is not locked, an empty `AnyOf` is.
///
/// Children of the root are labelled "rule", anything deeper "sub rule"; numbering restarts
/// at 1 in every sibling group.
pub fn evaluate_with<V: TraceVocabulary + ?Sized>(
    node: Option<&ScriptNode>,
    current_slot: Slot,
    vocabulary: &V,
) -> Evaluation {
    let mut evaluator = PolicyEvaluator {
        vocabulary,
        current_slot,
        lines: Vec::new(),
    };

    let locked = match node {
        Some(node) => evaluator.eval(node, 0, 1),
        None => evaluator.unknown(0),
    };

    logging::log::trace!("Policy evaluated at slot {current_slot}, locked: {locked}");

    Evaluation {
        locked,
        trace: evaluator.lines.join("\n"),
    }
}

struct PolicyEvaluator<'a, V: ?Sized> {
    vocabulary: &'a V,
    current_slot: Slot,
    lines: Vec<String>,
}

impl<V: TraceVocabulary + ?Sized> PolicyEvaluator<'_, V> {
    fn label(&self, depth: usize, number: usize) -> String {
        if depth <= 1 {
            self.vocabulary.rule(number)
        } else {
            self.vocabulary.sub_rule(number)
        }
    }

    fn push_line(&mut self, depth: usize, text: &str) {
        let indent = depth * INDENT_UNIT;
        self.lines.push(format!("{:indent$}{text}", ""));
    }

    fn push_rule(&mut self, depth: usize, number: usize, text: &str) {
        let label = self.label(depth, number);
        self.push_line(depth, &format!("{label}: {text}"));
    }

    // The root header goes unlabelled.
    fn push_header(&mut self, depth: usize, number: usize, header: &str) {
        let header = format!("<b>{header}</b>");
        if depth == 0 {
            self.push_line(depth, &header);
        } else {
            self.push_rule(depth, number, &header);
        }
    }

    fn unknown(&mut self, depth: usize) -> bool {
        let text = self.vocabulary.unknown_script();
        self.push_line(depth, &text);
        false
    }

    fn eval_children(&mut self, scripts: &[ScriptNode], depth: usize) -> Vec<bool> {
        scripts
            .iter()
            .enumerate()
            .map(|(idx, script)| self.eval(script, depth + 1, idx + 1))
            .collect()
    }

    fn eval(&mut self, node: &ScriptNode, depth: usize, number: usize) -> bool {
        match node {
            ScriptNode::Signature { key_hash } => {
                let text = self.vocabulary.signed_by(key_hash);
                self.push_rule(depth, number, &text);
                false
            }
            ScriptNode::Before { slot } => {
                let text = self.vocabulary.before_slot(*slot, self.current_slot);
                self.push_rule(depth, number, &text);
                *slot < self.current_slot
            }
            ScriptNode::After { slot } => {
                let text = self.vocabulary.after_slot(*slot, self.current_slot);
                self.push_rule(depth, number, &text);
                *slot > self.current_slot
            }
            ScriptNode::AllOf { scripts } => {
                let header = self.vocabulary.all_of_header();
                self.push_header(depth, number, &header);
                self.eval_children(scripts, depth).into_iter().any(|locked| locked)
            }
            ScriptNode::AnyOf { scripts } => {
                let header = self.vocabulary.any_of_header();
                self.push_header(depth, number, &header);
                self.eval_children(scripts, depth).into_iter().all(|locked| locked)
            }
            ScriptNode::AtLeast { required, scripts } => {
                let header = self.vocabulary.at_least_header(*required);
                self.push_header(depth, number, &header);
                let locked_count =
                    self.eval_children(scripts, depth).into_iter().filter(|locked| *locked).count();
                locked_count as u64 >= *required
            }
            ScriptNode::Unknown => self.unknown(depth),
        }
    }
}
