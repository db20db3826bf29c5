use coloring::EditCommand;
use coloring::io::SaveFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,
}

/// A replayable editing script: one source photo, the canvas bounds, the
/// output target, and the edit commands to apply after generation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EditScript {
    pub input: String,
    pub output: String,
    #[serde(default = "default_bound_width")]
    pub bound_width: u32,
    #[serde(default = "default_bound_height")]
    pub bound_height: u32,
    #[serde(default = "default_format")]
    pub format: SaveFormat,
    #[serde(default)]
    pub commands: Vec<EditCommand>,
}

fn default_bound_width() -> u32 {
    800
}

fn default_bound_height() -> u32 {
    600
}

fn default_format() -> SaveFormat {
    SaveFormat::Png
}

impl EditScript {
    /// Load a script from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a script from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ScriptError> {
        let script: EditScript = toml::from_str(content)?;
        Ok(script)
    }

    /// Load a script from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a script from a JSON string
    pub fn from_json(content: &str) -> Result<Self, ScriptError> {
        let script: EditScript = serde_json::from_str(content)?;
        Ok(script)
    }

    /// Auto-detect file format and load the script
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(ScriptError::UnsupportedFileFormat),
        }
    }

    /// Save the script to a JSON file
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ScriptError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Convert the script to a TOML string
    pub fn to_toml(&self) -> Result<String, ScriptError> {
        let toml = toml::to_string_pretty(self)?;
        Ok(toml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_script() -> EditScript {
        EditScript {
            input: "photo.jpg".to_string(),
            output: "page.png".to_string(),
            bound_width: 640,
            bound_height: 480,
            format: SaveFormat::Png,
            commands: vec![
                EditCommand::SetColor { color: [255, 0, 0] },
                EditCommand::SetFill { enabled: true },
                EditCommand::Fill { at: [320, 240] },
                EditCommand::Undo,
            ],
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let script = sample_script();
        let json = serde_json::to_string_pretty(&script).unwrap();
        let parsed = EditScript::from_json(&json).unwrap();
        assert_eq!(parsed, script);
    }

    #[test]
    fn test_toml_roundtrip() {
        let script = sample_script();
        let toml = script.to_toml().unwrap();
        let parsed = EditScript::from_toml(&toml).unwrap();
        assert_eq!(parsed, script);
    }

    #[test]
    fn test_defaults_applied() {
        let parsed = EditScript::from_json(r#"{"input": "a.jpg", "output": "b.png"}"#).unwrap();
        assert_eq!(parsed.bound_width, 800);
        assert_eq!(parsed.bound_height, 600);
        assert_eq!(parsed.format, SaveFormat::Png);
        assert!(parsed.commands.is_empty());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = EditScript::from_file("script.yaml");
        assert!(matches!(err, Err(ScriptError::UnsupportedFileFormat)));
    }
}
