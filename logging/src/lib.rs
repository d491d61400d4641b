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

mod log_style;
mod utils;

use std::io::Write;

pub use log;

pub use log_style::{get_log_style_from_env, LogStyle, LogStyleParseError, TextColoring};

/// Env var that selects the output style, see [LogStyle::parse] for the accepted values.
pub const LOG_STYLE_ENV_VAR: &str = "POLICY_LOG_STYLE";

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info";

static INITIALIZE_LOGGER_ONCE_FLAG: std::sync::Once = std::sync::Once::new();

/// Initialize the global logger. Subsequent calls are no-ops.
pub fn init_logging() {
    INITIALIZE_LOGGER_ONCE_FLAG.call_once(|| {
        let style = resolve_log_style(LOG_STYLE_ENV_VAR);

        // Another logger may already be installed, e.g. by a test harness.
        let _ = make_builder(style).try_init();
    });
}

/// Style requested through `env_var_name`, falling back to the default on a bad value.
fn resolve_log_style(env_var_name: &str) -> LogStyle {
    get_log_style_from_env(env_var_name)
        .unwrap_or_else(|err| {
            eprintln!("Ignoring {env_var_name}: {err}");
            None
        })
        .unwrap_or_default()
}

fn json_line(record: &log::Record) -> serde_json::Value {
    serde_json::json!({
        "level": record.level().as_str(),
        "target": record.target(),
        "message": record.args().to_string(),
    })
}

fn make_builder(style: LogStyle) -> env_logger::Builder {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    let mut builder = env_logger::Builder::from_env(env);

    match style {
        LogStyle::Text(coloring) => {
            builder.write_style(coloring.into());
        }
        LogStyle::Json => {
            builder
                .write_style(env_logger::WriteStyle::Never)
                .format(|buf, record| writeln!(buf, "{}", json_line(record)));
        }
    }

    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_twice() {
        init_logging();
        init_logging();
        log::info!("logger initialized");
    }

    #[test]
    fn json_line_fields() {
        let line = json_line(
            &log::Record::builder()
                .args(format_args!("slot {} reached", 42))
                .level(log::Level::Warn)
                .target("native_script::evaluate")
                .build(),
        );

        assert_eq!(
            line,
            serde_json::json!({
                "level": "WARN",
                "target": "native_script::evaluate",
                "message": "slot 42 reached",
            })
        );
    }

    #[rstest::rstest]
    #[case("POLICY_LOG_STYLE_TEST_RESOLVE_JSON", Some("json"), LogStyle::Json)]
    #[case("POLICY_LOG_STYLE_TEST_RESOLVE_BAD", Some("fancy"), LogStyle::Text(TextColoring::Auto))]
    #[case("POLICY_LOG_STYLE_TEST_RESOLVE_UNSET", None, LogStyle::Text(TextColoring::Auto))]
    fn style_resolution(
        #[case] env_var: &str,
        #[case] value: Option<&str>,
        #[case] expected: LogStyle,
    ) {
        match value {
            Some(value) => std::env::set_var(env_var, value),
            None => std::env::remove_var(env_var),
        }
        assert_eq!(resolve_log_style(env_var), expected);
        std::env::remove_var(env_var);
    }

    #[test]
    fn json_builder_builds() {
        let logger = make_builder(LogStyle::Json).build();
        assert!(log::Log::enabled(
            &logger,
            &log::Metadata::builder().level(log::Level::Error).build()
        ));
    }
}
