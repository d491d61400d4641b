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

pub mod random;

use random::Rng;

/// A random lowercase hex string of `byte_len` bytes, shaped like a key hash.
pub fn random_hex_string(rng: &mut impl Rng, byte_len: usize) -> String {
    (0..byte_len).map(|_| format!("{:02x}", rng.gen::<u8>())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use random::{make_seedable_rng, Seed};

    #[test]
    fn same_seed_same_values() {
        let seed = Seed::from_entropy();
        let mut rng1 = make_seedable_rng(seed);
        let mut rng2 = make_seedable_rng(seed);
        assert_eq!(rng1.gen::<u64>(), rng2.gen::<u64>());
        assert_eq!(random_hex_string(&mut rng1, 28), random_hex_string(&mut rng2, 28));
    }

    #[test]
    fn hex_string_shape() {
        let mut rng = make_seedable_rng(Seed::from_u64(7));
        let s = random_hex_string(&mut rng, 28);
        assert_eq!(s.len(), 56);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
