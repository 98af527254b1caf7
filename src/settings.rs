use std::{env, path::PathBuf};

use anyhow::Context;

pub struct Settings {
    pub bind: String,
    pub catalog_path: Option<PathBuf>,
    pub seed_demo: bool,
    pub patient_name: String,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let seed_demo = match env::var("MEDIBOOK_SEED_DEMO") {
            Ok(value) => parse_bool(&value)
                .with_context(|| format!("MEDIBOOK_SEED_DEMO='{}' is not a boolean", value))?,
            Err(_) => true,
        };

        Ok(Self {
            bind: env::var("MEDIBOOK_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            catalog_path: env::var_os("MEDIBOOK_CATALOG").map(PathBuf::from),
            seed_demo,
            patient_name: env::var("MEDIBOOK_PATIENT_NAME")
                .unwrap_or_else(|_| "John Doe".to_string()),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
