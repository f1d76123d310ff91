//! JSON runtime configuration for the demo binary.
use crate::engine::EngineOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Destination paths for the four filter passes.
#[derive(Clone, Deserialize)]
pub struct OutputConfig {
    pub serial_average: PathBuf,
    pub parallel_average: PathBuf,
    pub serial_median: PathBuf,
    pub parallel_median: PathBuf,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    pub output: OutputConfig,
    #[serde(default)]
    pub engine: EngineOptions,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let json = r#"{
            "input_path": "in.bmp",
            "output": {
                "serial_average": "out/serial_avg.bmp",
                "parallel_average": "out/parallel_avg.bmp",
                "serial_median": "out/serial_med.bmp",
                "parallel_median": "out/parallel_med.bmp"
            },
            "engine": { "workers": 2 }
        }"#;
        let config: RuntimeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.input_path, PathBuf::from("in.bmp"));
        assert_eq!(config.engine.workers, 2);
    }

    #[test]
    fn engine_section_is_optional() {
        let json = r#"{
            "input_path": "in.png",
            "output": {
                "serial_average": "a.png",
                "parallel_average": "b.png",
                "serial_median": "c.png",
                "parallel_median": "d.png"
            }
        }"#;
        let config: RuntimeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.engine.workers, EngineOptions::default().workers);
    }
}
