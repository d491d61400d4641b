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

use serde::{ser::SerializeMap, Deserialize};
use serde_json::Value;

use super::{ScriptNode, Slot};

/// One node of the backend JSON. Children are kept as raw values so that each one is
/// decoded (and possibly degraded to [ScriptNode::Unknown]) on its own.
#[derive(Deserialize)]
#[serde(tag = "type")]
enum WireNode {
    #[serde(rename = "sig")]
    Signature {
        #[serde(rename = "keyHash")]
        key_hash: String,
    },
    #[serde(rename = "before")]
    Before { slot: u64 },
    #[serde(rename = "after")]
    After { slot: u64 },
    #[serde(rename = "all")]
    AllOf { scripts: Vec<Value> },
    #[serde(rename = "any")]
    AnyOf { scripts: Vec<Value> },
    #[serde(rename = "atLeast")]
    AtLeast { required: u64, scripts: Vec<Value> },
}

fn from_values(values: &[Value]) -> Vec<ScriptNode> {
    values.iter().map(ScriptNode::from_json_value).collect()
}

impl ScriptNode {
    /// Decode a script tree from its JSON form. Never fails: any node that can't be
    /// decoded becomes [ScriptNode::Unknown] without affecting its siblings.
    pub fn from_json_value(value: &Value) -> Self {
        match WireNode::deserialize(value) {
            Ok(WireNode::Signature { key_hash }) => Self::Signature { key_hash },
            Ok(WireNode::Before { slot }) => Self::Before {
                slot: Slot::new(slot),
            },
            Ok(WireNode::After { slot }) => Self::After {
                slot: Slot::new(slot),
            },
            Ok(WireNode::AllOf { scripts }) => Self::AllOf {
                scripts: from_values(&scripts),
            },
            Ok(WireNode::AnyOf { scripts }) => Self::AnyOf {
                scripts: from_values(&scripts),
            },
            Ok(WireNode::AtLeast { required, scripts }) => Self::AtLeast {
                required,
                scripts: from_values(&scripts),
            },
            Err(err) => {
                logging::log::debug!("Unrecognized script node treated as unknown: {err}");
                Self::Unknown
            }
        }
    }

    /// Parse a script tree from JSON text. Fails only if the text isn't JSON at all.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_json_value(&value))
    }
}

impl<'de> Deserialize<'de> for ScriptNode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json_value(&value))
    }
}

impl serde::Serialize for ScriptNode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind: &'static str = self.kind().into();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", kind)?;
        match self {
            ScriptNode::Signature { key_hash } => map.serialize_entry("keyHash", key_hash)?,
            ScriptNode::Before { slot } | ScriptNode::After { slot } => {
                map.serialize_entry("slot", slot)?
            }
            ScriptNode::AllOf { scripts } | ScriptNode::AnyOf { scripts } => {
                map.serialize_entry("scripts", scripts)?
            }
            ScriptNode::AtLeast { required, scripts } => {
                map.serialize_entry("required", required)?;
                map.serialize_entry("scripts", scripts)?;
            }
            ScriptNode::Unknown => {}
        }
        map.end()
    }
}
