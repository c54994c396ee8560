//! Shared utilities for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use vasedb::config::{Compressor, Encryptor, Region, ServerOptions};

/// Write `contents` to `<base>/etc/<name>`, creating the directory.
pub fn write_canonical(base: &Path, name: &str, contents: &str) -> PathBuf {
    let etc = base.join("etc");
    fs::create_dir_all(&etc).unwrap();
    let path = etc.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// A fully customized instance with no field left at its default.
#[allow(dead_code)]
pub fn custom_options(path: &Path) -> ServerOptions {
    ServerOptions {
        port: 8080,
        path: path.display().to_string(),
        debug: true,
        log_path: "/tmp/wiredb/out.log".into(),
        password: "password@123".into(),
        region: Region { enable: true, second: 15000, threshold: 3 },
        encryptor: Encryptor { enable: false, secret: "test-secret".into() },
        compressor: Compressor { enable: true },
        allow_ip: vec!["192.127.0.1".into(), "192.127.0.2".into()],
    }
}
