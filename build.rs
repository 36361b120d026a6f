use std::env;
use std::fs;
use std::path::Path;

/// Variables que el código lee con `option_env!`
const FORWARDED_KEYS: [&str; 2] = ["BACKEND_URL", "ENABLE_LOGGING"];

fn main() {
    // Recompilar si cambian las variables o el archivo de configuración
    println!("cargo:rerun-if-changed=build.rs");
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No se pudo leer .env, se usan los valores por defecto");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        // El entorno real tiene prioridad sobre .env
        if FORWARDED_KEYS.contains(&key) && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
