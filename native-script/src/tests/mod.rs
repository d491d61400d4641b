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

use rstest::rstest;
use test_utils::{
    make_seedable_rng,
    random::{Rng, Seed},
    random_hex_string,
};

use crate::{
    evaluate::{cache::EvaluationCache, vocabulary::*, *},
    render::*,
    script::*,
    summary::*,
};

type SN = ScriptNode;

mod json;
mod render;

// Helpers

const KEY_A: &str = "e09d36c79dec9bd1b3d9e152247701cd0bb860b5ebfd1de8abb6735a";
const KEY_B: &str = "a9bd5e2b3c1d4f7e8a6b0c2d4e6f8a0b2c4d6e8f0a1b3c5d7e9f1a2b";

fn slot(s: u64) -> Slot {
    Slot::new(s)
}

fn locked_at(script: &ScriptNode, current: u64) -> bool {
    crate::evaluate(Some(script), slot(current)).locked
}

/// A leaf whose verdict at `current` is the given one.
fn leaf_with_verdict(locked: bool, current: u64) -> ScriptNode {
    if locked {
        SN::before(current.saturating_sub(1))
    } else {
        SN::after(current.saturating_sub(1))
    }
}

/// Random tree of up to `max_depth` levels using every node kind.
fn random_script(rng: &mut impl Rng, max_depth: usize) -> ScriptNode {
    let kinds = if max_depth <= 1 { 0..4 } else { 0..7 };

    match rng.gen_range(kinds) {
        0 => SN::signature(random_hex_string(rng, 28)),
        1 => SN::before(rng.gen_range(0..1000)),
        2 => SN::after(rng.gen_range(0..1000)),
        3 => SN::Unknown,
        4 => SN::all_of(random_children(rng, max_depth)),
        5 => SN::any_of(random_children(rng, max_depth)),
        _ => {
            let scripts = random_children(rng, max_depth);
            SN::at_least(rng.gen_range(0..=scripts.len() as u64 + 1), scripts)
        }
    }
}

fn random_children(rng: &mut impl Rng, max_depth: usize) -> Vec<ScriptNode> {
    let count = rng.gen_range(0..4);
    (0..count).map(|_| random_script(rng, max_depth - 1)).collect()
}
