//! Launch arguments of the current process.

use std::env;
use std::ffi::OsString;

use crate::domain::foundation::DetectionError;
use crate::ports::LaunchArgumentSource;

/// Environment variable the Java launcher reads extra options from.
pub const JAVA_TOOL_OPTIONS: &str = "JAVA_TOOL_OPTIONS";

/// Reads the arguments the current process was started with.
///
/// Options from a tool-options variable (by default `JAVA_TOOL_OPTIONS`)
/// come first, split on whitespace, followed by the command line without
/// the program name.
#[derive(Debug, Clone)]
pub struct ProcessLaunchArguments {
    tool_options_variable: Option<String>,
}

impl ProcessLaunchArguments {
    pub fn new() -> Self {
        Self {
            tool_options_variable: Some(JAVA_TOOL_OPTIONS.to_string()),
        }
    }

    /// Reads tool options from `variable` instead, or from nowhere.
    pub fn with_tool_options_variable(mut self, variable: Option<String>) -> Self {
        self.tool_options_variable = variable;
        self
    }

    fn tool_options(&self) -> Vec<String> {
        self.tool_options_variable
            .as_deref()
            .and_then(env::var_os)
            .map(|value| {
                value
                    .to_string_lossy()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Default for ProcessLaunchArguments {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchArgumentSource for ProcessLaunchArguments {
    fn launch_arguments(&self) -> Result<Vec<String>, DetectionError> {
        let mut arguments = self.tool_options();
        arguments.extend(decode(env::args_os().skip(1)));
        Ok(arguments)
    }
}

/// Converts OS arguments to strings. Invalid unicode is replaced so the
/// remaining arguments can still be matched.
fn decode(arguments: impl Iterator<Item = OsString>) -> Vec<String> {
    arguments
        .enumerate()
        .map(|(position, argument)| match argument.into_string() {
            Ok(text) => text,
            Err(raw) => {
                tracing::debug!(position, "launch argument is not valid unicode");
                raw.to_string_lossy().into_owned()
            }
        })
        .collect()
}
