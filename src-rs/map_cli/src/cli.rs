use std::env;

use pokemap_rs::MapConfig;

const ENV_BASE_URL: &str = "POKEMAP_BASE_URL";
const ENV_TIMEOUT: &str = "POKEMAP_TIMEOUT_SECS";
const ENV_PROMPT: &str = "POKEMAP_PROMPT";

#[derive(Clone, Debug)]
pub struct CliOptions {
    pub config: MapConfig,
    pub show_help: bool,
}

pub fn parse_config() -> CliOptions {
    let args: Vec<String> = env::args().collect();
    parse_from(&args, |key| env::var(key).ok())
}

/// Environment first, then flags; `args[0]` is the program name.
pub fn parse_from<F>(args: &[String], lookup: F) -> CliOptions
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = MapConfig::default();
    let mut cfg = MapConfig {
        base_url: env_or(&lookup, ENV_BASE_URL, defaults.base_url.clone()),
        timeout_secs: env_u64(&lookup, ENV_TIMEOUT, defaults.timeout_secs),
        user_agent: defaults.user_agent.clone(),
        prompt: env_opt(&lookup, ENV_PROMPT),
    };
    let mut show_help = false;

    let mut idx = 1;
    while idx < args.len() {
        match args[idx].as_str() {
            "--base" => {
                if let Some(value) = args.get(idx + 1) {
                    cfg.base_url = value.clone();
                    idx += 1;
                }
            }
            "--timeout" => {
                if let Some(value) = args.get(idx + 1) {
                    if let Ok(parsed) = value.parse::<u64>() {
                        cfg.timeout_secs = parsed;
                    }
                    idx += 1;
                }
            }
            "--prompt" => {
                if let Some(value) = args.get(idx + 1) {
                    cfg.prompt = Some(value.clone());
                    idx += 1;
                }
            }
            "--help" | "-h" => show_help = true,
            _ => {}
        }
        idx += 1;
    }

    CliOptions {
        config: cfg,
        show_help,
    }
}

fn env_or<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str, fallback: String) -> String {
    env_opt(lookup, key).unwrap_or(fallback)
}

fn env_opt<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str) -> Option<String> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn env_u64<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str, fallback: u64) -> u64 {
    match lookup(key) {
        Some(value) => value.trim().parse::<u64>().unwrap_or(fallback),
        None => fallback,
    }
}
