// Copyright (c) 2026 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://spdx.org/licenses/MIT
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub use rand::{Rng, SeedableRng};
pub use rand_chacha::ChaChaRng as TestRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seed(pub u64);

impl Seed {
    pub fn from_entropy() -> Self {
        Seed(rand::thread_rng().gen::<u64>())
    }

    pub fn from_u64(v: u64) -> Self {
        Seed(v)
    }
}

#[must_use]
pub fn make_seedable_rng(seed: Seed) -> TestRng {
    TestRng::seed_from_u64(seed.0)
}

/// Makes a PRNG for unit tests, printing the seed so that a failing run can be reproduced.
///
/// ```
/// use test_utils::{make_seedable_rng, random::*};
/// let mut rng = make_seedable_rng!(Seed::from_entropy());
/// let _slot: u64 = rng.gen();
/// ```
///
/// On failure, copy the printed seed into `Seed::from_u64(..)` to replay the exact same values.
#[macro_export]
macro_rules! make_seedable_rng {
    ($seed:expr) => {{
        let seed = $seed;
        println!(
            "{}:{} Using seed '{}' for the PRNG",
            file!(),
            line!(),
            seed.0
        );
        $crate::random::make_seedable_rng(seed)
    }};
}
