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

//! Turning an evaluation trace into displayable lines.

const BOLD_OPEN: &str = "<b>";
const BOLD_CLOSE: &str = "</b>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Bold(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Bold(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Left margin, in whatever unit `margin_per_space` was given in.
    pub margin: usize,
    pub segments: Vec<Segment>,
}

impl RenderedLine {
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }
}

/// Split a trace into lines, converting leading whitespace into a margin and `<b>` markup
/// into bold segments.
///
/// Bold is the only markup recognized. An unclosed `<b>` lasts until the end of its line and
/// a stray `</b>` is dropped; other tags are kept as plain text.
pub fn render_trace(trace: &str, margin_per_space: usize) -> Vec<RenderedLine> {
    trace.split('\n').map(|line| render_line(line, margin_per_space)).collect()
}

fn render_line(line: &str, margin_per_space: usize) -> RenderedLine {
    let content = line.trim_start();
    let leading = line[..line.len() - content.len()].chars().count();

    RenderedLine {
        margin: leading * margin_per_space,
        segments: parse_markup(content),
    }
}

fn parse_markup(mut rest: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut bold = false;

    loop {
        let tag = if bold { BOLD_CLOSE } else { BOLD_OPEN };

        // A closing tag outside of bold text is dropped
        let stray_close = (!bold).then(|| rest.find(BOLD_CLOSE)).flatten();
        let next_tag = rest.find(tag);

        match (next_tag, stray_close) {
            (_, Some(close_pos)) if next_tag.map_or(true, |pos| close_pos < pos) => {
                push_segment(&mut segments, &rest[..close_pos], bold);
                rest = &rest[close_pos + BOLD_CLOSE.len()..];
            }
            (Some(pos), _) => {
                push_segment(&mut segments, &rest[..pos], bold);
                rest = &rest[pos + tag.len()..];
                bold = !bold;
            }
            (None, _) => {
                push_segment(&mut segments, rest, bold);
                break;
            }
        }
    }

    segments
}

// Adjacent runs of the same style are merged.
fn push_segment(segments: &mut Vec<Segment>, text: &str, bold: bool) {
    if text.is_empty() {
        return;
    }

    match (segments.last_mut(), bold) {
        (Some(Segment::Bold(last)), true) | (Some(Segment::Plain(last)), false) => {
            last.push_str(text)
        }
        _ => {
            let text = text.to_owned();
            segments.push(if bold {
                Segment::Bold(text)
            } else {
                Segment::Plain(text)
            });
        }
    }
}
