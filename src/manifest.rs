// SPDX-License-Identifier: MPL-2.0
//! Comparison-manifest loading.
//!
//! The upload → upscale → analyze pipeline that produces image pairs runs
//! outside this application. Its completed output is handed over as a TOML
//! manifest listing, for each pair, the original image, its upscaled
//! counterpart, and the analysis record computed by the external service.
//! This module parses that document and resolves image paths; it never
//! inspects image bytes (decoding is left to Iced's image machinery).

use crate::error::{ManifestError, Result};
use iced::widget::image;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One bin of the 256-bin intensity histogram computed by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HistogramBin {
    /// Intensity value (0–255).
    pub value: u32,
    /// Pixel count in the original image.
    pub original: f64,
    /// Pixel count in the upscaled image.
    pub upscaled: f64,
}

/// Per-image measurement pair (original vs upscaled) for auxiliary metrics.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SideBySide {
    pub original: f64,
    pub upscaled: f64,
}

/// Quality analysis produced by the external analyzer for one pair.
///
/// Consumed for display only; nothing here is recomputed locally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisReport {
    pub psnr: f64,
    pub ssim: f64,
    pub edge_quality: f64,
    #[serde(default)]
    pub histogram: Vec<HistogramBin>,
    #[serde(default)]
    pub noise_level: Option<SideBySide>,
    #[serde(default)]
    pub texture_sharpness: Option<SideBySide>,
}

/// A loaded original/upscaled pair, ready for rendering.
///
/// Image handles are lazy: the renderer decodes pixels on first draw, so
/// constructing a pair performs no image I/O beyond an existence check.
#[derive(Debug, Clone)]
pub struct ImagePair {
    pub name: String,
    pub original: image::Handle,
    pub upscaled: image::Handle,
    pub original_path: PathBuf,
    pub upscaled_path: PathBuf,
    pub analysis: Option<AnalysisReport>,
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default, rename = "pair")]
    pairs: Vec<PairEntry>,
}

#[derive(Debug, Deserialize)]
struct PairEntry {
    name: Option<String>,
    original: PathBuf,
    upscaled: PathBuf,
    #[serde(default)]
    analysis: Option<AnalysisReport>,
}

/// Reads and resolves a manifest file.
///
/// Relative image paths are resolved against the manifest's directory.
pub async fn load(path: PathBuf) -> Result<Vec<ImagePair>> {
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| ManifestError::Unreadable(e.to_string()))?;
    let base_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
    parse(&content, &base_dir)
}

/// Parses manifest text, resolving image paths against `base_dir`.
pub fn parse(content: &str, base_dir: &Path) -> Result<Vec<ImagePair>> {
    let manifest: ManifestFile =
        toml::from_str(content).map_err(|e| ManifestError::Malformed(e.to_string()))?;

    if manifest.pairs.is_empty() {
        return Err(ManifestError::Empty.into());
    }

    let mut pairs = Vec::with_capacity(manifest.pairs.len());
    for entry in manifest.pairs {
        let original_path = resolve(base_dir, &entry.original);
        let upscaled_path = resolve(base_dir, &entry.upscaled);

        for p in [&original_path, &upscaled_path] {
            if !p.exists() {
                return Err(ManifestError::MissingImage(p.clone()).into());
            }
        }

        let name = entry.name.unwrap_or_else(|| {
            original_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        pairs.push(ImagePair {
            name,
            original: image::Handle::from_path(&original_path),
            upscaled: image::Handle::from_path(&upscaled_path),
            original_path,
            upscaled_path,
            analysis: entry.analysis,
        });
    }

    Ok(pairs)
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    fn create_image_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake image data").expect("failed to write test file");
        path
    }

    #[test]
    fn parse_resolves_relative_paths_and_names() {
        let dir = tempdir().expect("failed to create temp dir");
        create_image_file(dir.path(), "cat.png");
        create_image_file(dir.path(), "cat_upscaled.png");

        let content = r#"
            [[pair]]
            original = "cat.png"
            upscaled = "cat_upscaled.png"
        "#;

        let pairs = parse(content, dir.path()).expect("parse failed");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].name, "cat");
        assert_eq!(pairs[0].original_path, dir.path().join("cat.png"));
        assert!(pairs[0].analysis.is_none());
    }

    #[test]
    fn parse_reads_analysis_report() {
        let dir = tempdir().expect("failed to create temp dir");
        create_image_file(dir.path(), "a.png");
        create_image_file(dir.path(), "b.png");

        let content = r#"
            [[pair]]
            name = "sample"
            original = "a.png"
            upscaled = "b.png"

            [pair.analysis]
            psnr = 31.7
            ssim = 0.94
            edge_quality = 1.08
            noise_level = { original = 12.5, upscaled = 11.9 }

            [[pair.analysis.histogram]]
            value = 0
            original = 120.0
            upscaled = 95.0
        "#;

        let pairs = parse(content, dir.path()).expect("parse failed");
        let analysis = pairs[0].analysis.as_ref().expect("analysis missing");
        assert_eq!(analysis.psnr, 31.7);
        assert_eq!(analysis.histogram.len(), 1);
        assert_eq!(analysis.histogram[0].upscaled, 95.0);
        assert!(analysis.texture_sharpness.is_none());
    }

    #[test]
    fn parse_rejects_empty_manifest() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = parse("", dir.path());
        assert!(matches!(
            result,
            Err(Error::Manifest(ManifestError::Empty))
        ));
    }

    #[test]
    fn parse_rejects_missing_image() {
        let dir = tempdir().expect("failed to create temp dir");
        create_image_file(dir.path(), "present.png");

        let content = r#"
            [[pair]]
            original = "present.png"
            upscaled = "absent.png"
        "#;

        let result = parse(content, dir.path());
        assert!(matches!(
            result,
            Err(Error::Manifest(ManifestError::MissingImage(_)))
        ));
    }

    #[test]
    fn parse_rejects_invalid_toml() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = parse("not = valid = toml", dir.path());
        assert!(matches!(
            result,
            Err(Error::Manifest(ManifestError::Malformed(_)))
        ));
    }

    #[tokio::test]
    async fn load_reads_manifest_from_disk() {
        let dir = tempdir().expect("failed to create temp dir");
        create_image_file(dir.path(), "x.png");
        create_image_file(dir.path(), "y.png");
        let manifest_path = dir.path().join("pairs.toml");
        fs::write(
            &manifest_path,
            "[[pair]]\noriginal = \"x.png\"\nupscaled = \"y.png\"\n",
        )
        .expect("failed to write manifest");

        let pairs = load(manifest_path).await.expect("load failed");
        assert_eq!(pairs.len(), 1);
    }

    #[tokio::test]
    async fn load_reports_unreadable_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = load(dir.path().join("nope.toml")).await;
        assert!(matches!(
            result,
            Err(Error::Manifest(ManifestError::Unreadable(_)))
        ));
    }
}
