//! Translate engine options into yt-dlp command-line flags.

use crate::engine::{EngineError, EngineOptions, PROXY_KEY};
use serde_json::Value;

/// Options that map to a flag followed by one string argument.
const VALUE_FLAGS: [(&str, &str); 4] = [
    (PROXY_KEY, "--proxy"),
    ("format", "-f"),
    ("outtmpl", "-o"),
    ("cookiefile", "--cookies"),
];

/// Build the flags shared by every invocation. Unknown keys are ignored.
pub fn option_args(options: &EngineOptions) -> Result<Vec<String>, EngineError> {
    let mut args = Vec::new();

    for (key, flag) in VALUE_FLAGS {
        match options.get(key) {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) => {
                args.push(flag.to_string());
                args.push(s.clone());
            }
            Some(other) => {
                return Err(EngineError::Other(format!(
                    "option `{}` must be a string, got {}",
                    key, other
                )))
            }
        }
    }

    match options.get("socket_timeout") {
        None | Some(Value::Null) => {}
        Some(Value::Number(n)) => {
            args.push("--socket-timeout".to_string());
            args.push(n.to_string());
        }
        Some(other) => {
            return Err(EngineError::Other(format!(
                "option `socket_timeout` must be a number, got {}",
                other
            )))
        }
    }

    if options.get_bool("quiet") == Some(true) {
        args.push("--quiet".to_string());
    }

    Ok(args)
}
