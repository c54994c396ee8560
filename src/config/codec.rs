//! Codec adapter between the schema and its serialized form.
//!
//! # Design Decisions
//! - The format is a closed set selected once at the boundary from the file
//!   suffix; unknown suffixes are rejected instead of defaulting.
//! - Decoding runs in two steps (bytes → generic value → schema) so that
//!   syntax errors and shape errors are reported separately.

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::error::{ConfigError, Result};

/// Serialization format of a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Used for files on disk.
    Yaml,
    /// Interchange and debugging format.
    Json,
}

impl Format {
    /// Pick the format from the suffix of `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Canonical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Yaml => write!(f, "YAML"),
            Format::Json => write!(f, "JSON"),
        }
    }
}

/// Decode `bytes` in `format` into a schema instance.
pub fn decode<T: DeserializeOwned>(bytes: &[u8], format: Format) -> Result<T> {
    let malformed = |message: String| ConfigError::Decode { format, message };
    let mismatched = |message: String| ConfigError::Schema { format, message };

    match format {
        Format::Yaml => {
            let value: serde_yaml::Value =
                serde_yaml::from_slice(bytes).map_err(|e| malformed(e.to_string()))?;
            serde_yaml::from_value(value).map_err(|e| mismatched(e.to_string()))
        }
        Format::Json => {
            let value: serde_json::Value =
                serde_json::from_slice(bytes).map_err(|e| malformed(e.to_string()))?;
            serde_json::from_value(value).map_err(|e| mismatched(e.to_string()))
        }
    }
}

/// Encode a schema instance in `format`.
pub fn encode<T: Serialize>(value: &T, format: Format) -> Result<Vec<u8>> {
    let failed = |message: String| ConfigError::Encode { format, message };

    match format {
        Format::Yaml => serde_yaml::to_string(value)
            .map(String::into_bytes)
            .map_err(|e| failed(e.to_string())),
        Format::Json => serde_json::to_vec_pretty(value).map_err(|e| failed(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ServerConfig, ServerOptions, VaseDB};

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("etc/config.yaml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("config.YML")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("/a/b/config.json")).unwrap(), Format::Json);

        for bad in ["config.toml", "config", "etc/", "config.yaml.bak"] {
            let err = Format::from_path(Path::new(bad)).unwrap_err();
            assert!(matches!(err, ConfigError::UnsupportedFormat { .. }), "{bad}");
        }
    }

    #[test]
    fn test_roundtrip_both_formats() {
        let mut options = ServerOptions::default();
        options.port = 9000;
        options.allow_ip = vec!["10.0.0.3".into(), "10.0.0.1".into(), "10.0.0.2".into()];
        options.encryptor.enable = true;

        for format in [Format::Yaml, Format::Json] {
            let bytes = encode(&options, format).unwrap();
            let decoded: ServerOptions = decode(&bytes, format).unwrap();
            assert_eq!(decoded, options, "{format}");
        }
    }

    #[test]
    fn test_syntax_error_is_decode_error() {
        let err = decode::<ServerOptions>(b"{\"port\": ", Format::Json).unwrap_err();
        assert!(matches!(err, ConfigError::Decode { format: Format::Json, .. }));

        let err = decode::<ServerOptions>(b"port: [unclosed", Format::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Decode { format: Format::Yaml, .. }));
    }

    #[test]
    fn test_shape_error_is_schema_error() {
        let err = decode::<ServerOptions>(b"region: 5\n", Format::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Schema { .. }));

        let err = decode::<ServerOptions>(br#"{"port": "eighty"}"#, Format::Json).unwrap_err();
        assert!(matches!(err, ConfigError::Schema { .. }));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let decoded: ServerOptions = decode(b"port: 7000\n", Format::Yaml).unwrap();
        let expected = ServerOptions { port: 7000, ..ServerOptions::default() };
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_legacy_field_aliases() {
        let decoded: ServerOptions =
            decode(b"logpath: /var/log/v.log\nallowip: [1.1.1.1]\n", Format::Yaml).unwrap();
        assert_eq!(decoded.log_path, "/var/log/v.log");
        assert_eq!(decoded.allow_ip, vec!["1.1.1.1".to_string()]);
    }

    #[test]
    fn test_yaml_accepts_json_document() {
        let doc = br#"{"vasedb": {"port": 8080, "path": "/test/path", "debug": true}}"#;
        let decoded: ServerConfig = decode(doc, Format::Yaml).unwrap();
        assert_eq!(
            decoded.vasedb,
            VaseDB { port: 8080, path: "/test/path".into(), debug: true }
        );
    }
}
