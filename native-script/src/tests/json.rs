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

use serde_json::json;

use super::*;

#[test]
fn decode_all_kinds() {
    let value = json!({
        "type": "all",
        "scripts": [
            { "type": "sig", "keyHash": KEY_A },
            { "type": "before", "slot": 100 },
            { "type": "after", "slot": 50 },
            {
                "type": "any",
                "scripts": [
                    { "type": "sig", "keyHash": KEY_B },
                    { "type": "atLeast", "required": 1, "scripts": [] }
                ]
            }
        ]
    });

    assert_eq!(
        SN::from_json_value(&value),
        SN::all_of(vec![
            SN::signature(KEY_A),
            SN::before(100),
            SN::after(50),
            SN::any_of(vec![SN::signature(KEY_B), SN::at_least(1, vec![])]),
        ])
    );
}

#[rstest]
#[case(json!(null))]
#[case(json!(42))]
#[case(json!("sig"))]
#[case(json!([]))]
#[case(json!({}))]
#[case(json!({ "type": "timelockStart", "slot": 1 }))]
#[case(json!({ "type": "SIG", "keyHash": KEY_A }))]
#[case(json!({ "type": "sig" }))]
#[case(json!({ "type": "sig", "keyHash": 7 }))]
#[case(json!({ "type": "before" }))]
#[case(json!({ "type": "before", "slot": -1 }))]
#[case(json!({ "type": "after", "slot": "12" }))]
#[case(json!({ "type": "after", "slot": 1.5 }))]
#[case(json!({ "type": "all" }))]
#[case(json!({ "type": "any", "scripts": {} }))]
#[case(json!({ "type": "atLeast", "scripts": [] }))]
fn malformed_nodes_become_unknown(#[case] value: serde_json::Value) {
    assert_eq!(SN::from_json_value(&value), SN::Unknown);
}

#[test]
fn malformed_child_degrades_locally() {
    let value = json!({
        "type": "atLeast",
        "required": 2,
        "scripts": [
            { "type": "before", "slot": 10 },
            { "type": "bogus" },
            { "type": "after", "slot": "soon" },
            { "type": "after", "slot": 20 }
        ]
    });

    let script = SN::from_json_value(&value);
    assert_eq!(
        script,
        SN::at_least(2, vec![SN::before(10), SN::Unknown, SN::Unknown, SN::after(20)])
    );
    // before(10) and after(20) are both locked at slot 15
    assert!(locked_at(&script, 15));
}

#[test]
fn extra_fields_are_ignored() {
    let value = json!({ "type": "sig", "keyHash": KEY_A, "comment": "treasury" });
    assert_eq!(SN::from_json_value(&value), SN::signature(KEY_A));
}

#[test]
fn from_str() {
    let script = SN::from_json_str(r#"{"type":"after","slot":4492800}"#).unwrap();
    assert_eq!(script, SN::after(4492800));

    assert!(SN::from_json_str("{\"type\":").is_err());
    assert_eq!(SN::from_json_str("42").unwrap(), SN::Unknown);
}

#[test]
fn deserialize_through_serde() {
    #[derive(serde::Deserialize)]
    struct PolicyInfo {
        policy_id: String,
        script: Option<ScriptNode>,
    }

    let info: PolicyInfo = serde_json::from_value(json!({
        "policy_id": "b0d07d45fe9514f80213f4020e5a61241458be626841cde717cb38a7",
        "script": { "type": "any", "scripts": [{ "type": "what" }] }
    }))
    .unwrap();
    assert_eq!(info.policy_id.len(), 56);
    assert_eq!(info.script, Some(SN::any_of(vec![SN::Unknown])));

    let info: PolicyInfo =
        serde_json::from_value(json!({ "policy_id": "00", "script": null })).unwrap();
    assert_eq!(info.script, None);
}

#[test]
fn serialize_to_wire_shape() {
    let script = SN::at_least(1, vec![SN::signature(KEY_A), SN::before(3), SN::Unknown]);

    assert_eq!(
        serde_json::to_value(&script).unwrap(),
        json!({
            "type": "atLeast",
            "required": 1,
            "scripts": [
                { "type": "sig", "keyHash": KEY_A },
                { "type": "before", "slot": 3 },
                { "type": "unknown" }
            ]
        })
    );
}

#[rstest]
#[case(Seed::from_entropy())]
fn reencoding_preserves_tree(#[case] seed: Seed) {
    let mut rng = make_seedable_rng!(seed);

    for _ in 0..20 {
        let script = random_script(&mut rng, 4);
        let value = serde_json::to_value(&script).unwrap();
        assert_eq!(SN::from_json_value(&value), script);
    }
}
