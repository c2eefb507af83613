use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::fs::FileSystem;

/// Manifest files a rules package may ship, in lookup order
pub const MANIFEST_FILES: [&str; 2] = ["package.json", "Cargo.toml"];

#[derive(Deserialize)]
struct PackageJson {
    version: String,
}

#[derive(Deserialize)]
struct CargoToml {
    package: CargoPackage,
}

#[derive(Deserialize)]
struct CargoPackage {
    version: String,
}

/// Read the rules package's own version from its manifest.
///
/// `package.json` is preferred; `Cargo.toml` is used when it is absent.
pub async fn package_version<F: FileSystem + ?Sized>(fs: &F, package_dir: &Path) -> Result<String> {
    if package_dir.as_os_str().is_empty() {
        return Err(Error::MissingArgument("packageDir"));
    }

    let package_json = package_dir.join(MANIFEST_FILES[0]);
    let cargo_toml = package_dir.join(MANIFEST_FILES[1]);

    if !fs.exists(&package_json).await && fs.exists(&cargo_toml).await {
        let content = read(fs, &cargo_toml).await?;
        let manifest: CargoToml = toml::from_str(&content).map_err(|e| Error::PackageVersion {
            path: cargo_toml.clone(),
            message: e.to_string(),
        })?;
        return Ok(manifest.package.version);
    }

    let content = read(fs, &package_json).await?;
    let manifest: PackageJson =
        serde_json::from_str(&content).map_err(|e| Error::PackageVersion {
            path: package_json.clone(),
            message: e.to_string(),
        })?;
    Ok(manifest.version)
}

async fn read<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<String> {
    fs.read_to_string(path)
        .await
        .map_err(|e| Error::PackageVersion {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
