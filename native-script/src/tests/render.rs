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

use super::*;

fn plain(text: &str) -> Segment {
    Segment::Plain(text.to_owned())
}

fn bold(text: &str) -> Segment {
    Segment::Bold(text.to_owned())
}

#[test]
fn margins_follow_leading_whitespace() {
    let lines = render_trace("a\n    b\n        c", 3);
    let margins: Vec<usize> = lines.iter().map(|l| l.margin).collect();
    assert_eq!(margins, vec![0, 12, 24]);

    let texts: Vec<String> = lines.iter().map(RenderedLine::plain_text).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[rstest]
#[case("plain text", vec![plain("plain text")])]
#[case("<b>All</b>", vec![bold("All")])]
#[case("Rule #2: <b>All</b> here", vec![plain("Rule #2: "), bold("All"), plain(" here")])]
#[case("<b>open to the end", vec![bold("open to the end")])]
#[case("stray</b> close", vec![plain("stray close")])]
#[case("<i>kept</i>", vec![plain("<i>kept</i>")])]
#[case("<b></b>", vec![])]
#[case("", vec![])]
#[case("<b>a</b><b>b</b>", vec![bold("ab")])]
#[case("x</b><b>y</b>z", vec![plain("x"), bold("y"), plain("z")])]
fn markup(#[case] line: &str, #[case] expected: Vec<Segment>) {
    let lines = render_trace(line, 1);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].margin, 0);
    assert_eq!(lines[0].segments, expected);
}

#[test]
fn evaluation_trace_round_trip() {
    let script = SN::all_of(vec![
        SN::before(10),
        SN::any_of(vec![SN::signature(KEY_B)]),
    ]);
    let result = crate::evaluate(Some(&script), slot(4));

    assert_eq!(
        render_trace(&result.trace, 2),
        vec![
            RenderedLine {
                margin: 0,
                segments: vec![bold("All rules must be met")],
            },
            RenderedLine {
                margin: 8,
                segments: vec![plain("Rule #1: before slot 10 (current: 4)")],
            },
            RenderedLine {
                margin: 8,
                segments: vec![plain("Rule #2: "), bold("At least one rule must be met")],
            },
            RenderedLine {
                margin: 16,
                segments: vec![plain(&format!("Sub Rule #1: signed by key {KEY_B}"))],
            },
        ]
    );
}

#[test]
fn unknown_placeholder_renders_as_single_line() {
    let result = crate::evaluate(None, slot(0));
    let lines = render_trace(&result.trace, 10);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].plain_text(), "unknown script type");
}
