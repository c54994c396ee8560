//! Compiled-in baseline configuration.
//!
//! Used when no config file exists and as the fill-in for fields a file
//! leaves out. It is also the reference for "has the user customized
//! anything": compare against [`server_options`].

use crate::config::schema::{Compressor, Encryptor, Region, ServerOptions};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 2668;

/// Default base storage path.
pub const DEFAULT_PATH: &str = "/tmp/vasedb";

/// Serialized form of [`server_options`], embedded as the fallback document.
pub const DEFAULT_CONFIG_JSON: &str = r#"{
    "port": 2668,
    "path": "/tmp/vasedb",
    "debug": false,
    "log_path": "/tmp/vasedb/out.log",
    "password": "password@123",
    "region": {
        "enable": true,
        "second": 15000,
        "threshold": 3
    },
    "encryptor": {
        "enable": false,
        "secret": "your-static-data-secret!"
    },
    "compressor": {
        "enable": false
    },
    "allow_ip": [
        "127.0.0.1",
        "192.168.31.221",
        "192.168.101.225"
    ]
}"#;

/// The default server options.
pub fn server_options() -> ServerOptions {
    ServerOptions {
        port: DEFAULT_PORT,
        path: DEFAULT_PATH.to_string(),
        debug: false,
        log_path: format!("{DEFAULT_PATH}/out.log"),
        password: "password@123".to_string(),
        region: Region {
            enable: true,
            second: 15_000,
            threshold: 3,
        },
        encryptor: Encryptor {
            enable: false,
            secret: "your-static-data-secret!".to_string(),
        },
        compressor: Compressor { enable: false },
        allow_ip: vec![
            "127.0.0.1".to_string(),
            "192.168.31.221".to_string(),
            "192.168.101.225".to_string(),
        ],
    }
}
