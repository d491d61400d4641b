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

use clap::Arg;

/// Make every argument also settable through an env var named `{prefix}_{ARG_ID}`.
///
/// Meant for `#[clap(mut_args(env_adder("PREFIX")))]`.
pub fn env_adder(prefix: &str) -> impl FnMut(Arg) -> Arg + '_ {
    move |arg| {
        let env_name = format!("{prefix}_{}", arg.get_id().as_str().to_uppercase());
        arg.env(env_name)
    }
}
