use std::env;
use std::fs;
use std::path::Path;

/// Claves que `config.rs` lee con `option_env!`
const CONFIG_KEYS: [&str; 5] = [
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "NETWORK_TIMEOUT_SECONDS",
];

/// `KEY=VALUE` -> (clave, valor sin comillas). Comentarios y líneas vacías no cuentan.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let key = key.trim().trim_start_matches("export ").trim();
    Some((key, value.trim().trim_matches('"')))
}

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");

    let env_file = Path::new(".env");
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=.env not found, using defaults (see .env.example)");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=.env: unknown key {} ignored", key);
            continue;
        }
        if key == "NETWORK_TIMEOUT_SECONDS" && value.parse::<u32>().is_err() {
            println!("cargo:warning=.env: NETWORK_TIMEOUT_SECONDS={} is not a number", value);
            continue;
        }
        // El entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
