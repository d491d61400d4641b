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

pub mod clap_utils;

use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

use clap::{Parser, ValueEnum};

use native_script::{render_trace, summarize, PolicySummary, ScriptNode, Segment, Slot};

const BOLD_START: &str = "\x1b[1m";
const BOLD_END: &str = "\x1b[0m";

/// Script path that stands for standard input.
const STDIN_PATH: &str = "-";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[clap(mut_args(clap_utils::env_adder("POLICY_INSPECTOR")))]
#[clap(version, about = "Evaluate a native script minting policy at a given slot")]
pub struct CliArgs {
    /// Policy script in JSON form; `-` reads it from standard input
    pub script: PathBuf,

    /// Current slot of the chain tip
    #[arg(long)]
    pub current_slot: u64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Print bold trace headers without ANSI escapes
    #[arg(long)]
    pub no_color: bool,

    /// Also print the script itself
    #[arg(long)]
    pub show_script: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Failed to read script from {path}: {source}")]
    ReadScript {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid script JSON: {0}")]
    ParseScript(serde_json::Error),
    #[error("Failed to serialize the report: {0}")]
    SerializeOutput(serde_json::Error),
    #[error("Failed to write output: {0}")]
    WriteOutput(#[from] std::io::Error),
}

#[derive(serde::Serialize)]
struct Report<'a> {
    locked: bool,
    trace: &'a str,
    summary: &'a PolicySummary,
}

pub fn run(args: CliArgs) -> Result<(), CliError> {
    let script_json = read_script(&args.script, std::io::stdin().lock())?;
    let stdout = std::io::stdout();
    inspect(&args, &script_json, &mut stdout.lock())
}

/// Evaluate `script_json` as configured by `args` and write the report to `out`.
pub fn inspect(args: &CliArgs, script_json: &str, out: &mut impl Write) -> Result<(), CliError> {
    let script = ScriptNode::from_json_str(script_json).map_err(CliError::ParseScript)?;
    let current_slot = Slot::from(args.current_slot);

    logging::log::info!(
        "Evaluating policy script from {} at slot {current_slot}",
        args.script.display()
    );
    logging::log::debug!("Policy script: {script}");

    let evaluation = native_script::evaluate(Some(&script), current_slot);
    let summary = summarize(&script);

    if summary.unknown_nodes > 0 {
        logging::log::warn!(
            "Policy script contains {} node(s) of unknown type",
            summary.unknown_nodes
        );
    }

    match args.output {
        OutputFormat::Json => {
            let report = Report {
                locked: evaluation.locked,
                trace: &evaluation.trace,
                summary: &summary,
            };
            serde_json::to_writer_pretty(&mut *out, &report).map_err(CliError::SerializeOutput)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let status = if evaluation.locked { "Locked" } else { "Open" };
            writeln!(out, "Policy status: {status}")?;
            writeln!(out)?;

            if args.show_script {
                writeln!(out, "{script}")?;
                writeln!(out)?;
            }

            write_trace(out, &evaluation.trace, !args.no_color)?;
            writeln!(out)?;
            write_summary(out, &summary)?;
        }
    }

    Ok(())
}

/// Read the script text from `path`, or from `stdin` if the path is `-`.
fn read_script(path: &Path, mut stdin: impl Read) -> Result<String, CliError> {
    let read_err = |source| CliError::ReadScript {
        path: path.to_owned(),
        source,
    };

    if path.as_os_str() == STDIN_PATH {
        let mut script_json = String::new();
        stdin.read_to_string(&mut script_json).map_err(read_err)?;
        Ok(script_json)
    } else {
        std::fs::read_to_string(path).map_err(read_err)
    }
}

fn write_trace(out: &mut impl Write, trace: &str, color: bool) -> std::io::Result<()> {
    for line in render_trace(trace, 1) {
        write!(out, "{:1$}", "", line.margin)?;
        for segment in &line.segments {
            match segment {
                Segment::Bold(text) if color => write!(out, "{BOLD_START}{text}{BOLD_END}")?,
                Segment::Bold(text) | Segment::Plain(text) => out.write_all(text.as_bytes())?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_summary(out: &mut impl Write, summary: &PolicySummary) -> std::io::Result<()> {
    writeln!(out, "Signers: {}", summary.signers.len())?;
    for signer in &summary.signers {
        writeln!(out, "  - {signer}")?;
    }

    match summary.earliest_before {
        Some(slot) => writeln!(out, "Valid before slot: {slot}")?,
        None => writeln!(out, "Valid before slot: -")?,
    }
    match summary.latest_after {
        Some(slot) => writeln!(out, "Valid after slot: {slot}")?,
        None => writeln!(out, "Valid after slot: -")?,
    }

    writeln!(
        out,
        "Nodes: {} (unknown: {}), depth: {}",
        summary.total_nodes(),
        summary.unknown_nodes,
        summary.depth
    )
}
