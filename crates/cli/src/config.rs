//! Listener configuration resolution: port prompt and vehicle table location.

use std::io;
use std::path::PathBuf;

use horizon_telemetry_forza::DEFAULT_PORT;
use horizon_telemetry_receiver::port_from_input;
use tracing::warn;

const APP_DIR: &str = "fh-telemetry";
const VEHICLES_FILE: &str = "vehicles.json";

/// clap value parser for `--port`: invalid values fall back to the default
/// port instead of aborting.
pub fn lenient_port(raw: &str) -> Result<u16, std::convert::Infallible> {
    Ok(port_from_input(raw))
}

/// Pick the listen port.
///
/// An explicit port wins. Otherwise the operator is asked via `prompt` unless
/// prompting is disabled; empty or unparseable answers, and prompt failures
/// such as a non-interactive stdin, yield [`DEFAULT_PORT`].
pub fn resolve_port(
    explicit: Option<u16>,
    no_prompt: bool,
    prompt: impl FnOnce() -> io::Result<String>,
) -> u16 {
    if let Some(port) = explicit {
        return port;
    }
    if no_prompt {
        return DEFAULT_PORT;
    }
    match prompt() {
        Ok(answer) => port_from_input(&answer),
        Err(e) => {
            warn!(error = %e, "Port prompt unavailable, using default {DEFAULT_PORT}");
            DEFAULT_PORT
        }
    }
}

/// Interactive `Port (9909): ` prompt on the terminal.
pub fn prompt_port() -> io::Result<String> {
    dialoguer::Input::<String>::new()
        .with_prompt(format!("Port ({DEFAULT_PORT})"))
        .allow_empty(true)
        .interact_text()
        .map_err(io::Error::other)
}

/// `vehicles.json` under the platform data directory, or the working
/// directory when the platform has none.
pub fn default_vehicles_path() -> PathBuf {
    vehicles_path_in(dirs::data_dir())
}

fn vehicles_path_in(data_dir: Option<PathBuf>) -> PathBuf {
    match data_dir {
        Some(dir) => dir.join(APP_DIR).join(VEHICLES_FILE),
        None => PathBuf::from(VEHICLES_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_explicit_port_skips_prompt() {
        let port = resolve_port(Some(5300), false, || {
            Err(io::Error::other("prompt must not run"))
        });
        assert_eq!(port, 5300);
    }

    #[test]
    fn test_no_prompt_uses_default() {
        let port = resolve_port(None, true, || Ok("1234".to_string()));
        assert_eq!(port, DEFAULT_PORT);
    }

    #[test]
    fn test_prompt_answer_is_used() {
        assert_eq!(resolve_port(None, false, || Ok("12350".to_string())), 12350);
    }

    #[test]
    fn test_prompt_empty_or_invalid_falls_back() {
        assert_eq!(resolve_port(None, false, || Ok(String::new())), DEFAULT_PORT);
        assert_eq!(
            resolve_port(None, false, || Ok("port please".to_string())),
            DEFAULT_PORT
        );
        assert_eq!(
            resolve_port(None, false, || Ok("99999".to_string())),
            DEFAULT_PORT
        );
    }

    #[test]
    fn test_prompt_failure_falls_back() {
        let port = resolve_port(None, false, || {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "not a tty"))
        });
        assert_eq!(port, DEFAULT_PORT);
    }

    #[test]
    fn test_lenient_port() {
        assert_eq!(lenient_port("5300"), Ok(5300));
        assert_eq!(lenient_port("abc"), Ok(DEFAULT_PORT));
    }

    #[test]
    fn test_vehicles_path_layout() {
        assert_eq!(
            vehicles_path_in(Some(PathBuf::from("/data"))),
            Path::new("/data").join("fh-telemetry").join("vehicles.json")
        );
        assert_eq!(vehicles_path_in(None), PathBuf::from("vehicles.json"));
    }
}
