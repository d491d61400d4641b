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

use std::fmt;

use super::ScriptNode;

fn fmt_list(
    f: &mut fmt::Formatter<'_>,
    scripts: &[ScriptNode],
    indent: usize,
) -> fmt::Result {
    let indent_str = "    ";
    let next_indent = indent + indent_str.len();

    if scripts.is_empty() {
        return f.write_str("[])");
    }

    write!(f, "[\n{:indent$}", "")?;
    for script in scripts {
        f.write_str(indent_str)?;
        script.fmt_indent(f, next_indent)?;
        write!(f, ",\n{:indent$}", "")?;
    }
    f.write_str("])")
}

impl ScriptNode {
    fn fmt_indent(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        match self {
            Self::Signature { key_hash } => write!(f, "signature({key_hash})"),
            Self::Before { slot } => write!(f, "before({slot})"),
            Self::After { slot } => write!(f, "after({slot})"),
            Self::AllOf { scripts } => {
                f.write_str("all_of(")?;
                fmt_list(f, scripts, indent)
            }
            Self::AnyOf { scripts } => {
                f.write_str("any_of(")?;
                fmt_list(f, scripts, indent)
            }
            Self::AtLeast { required, scripts } => {
                write!(f, "at_least({required}, ")?;
                fmt_list(f, scripts, indent)
            }
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

impl fmt::Display for ScriptNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indent(f, 0)
    }
}
