//! File I/O for sheet packing
//!
//! Every call is awaited in sequence; encoding and decoding run on the
//! blocking pool so callers on an async runtime are not stalled.

use image::RgbaImage;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::constants::page_file_name;
use crate::export::{build_pdf, build_zip, encode_png};
use crate::options::SheetOptions;
use crate::pack::Page;
use crate::types::*;

/// Load a single item image
pub async fn load_item(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    let image = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await??;
    Ok(image.to_rgba8())
}

/// Load every PNG in `dir`, ordered by file name.
///
/// Other files and subdirectories are ignored. An empty directory gives an
/// empty list.
pub async fn load_items(dir: impl AsRef<Path>) -> Result<Vec<RgbaImage>> {
    let paths = list_pngs(dir.as_ref()).await?;
    tracing::debug!(count = paths.len(), dir = %dir.as_ref().display(), "loading items");

    let mut items = Vec::with_capacity(paths.len());
    for path in &paths {
        items.push(load_item(path).await?);
    }
    Ok(items)
}

async fn list_pngs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut paths = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png && entry.file_type().await?.is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Write named images as PNG files into `dir`, creating it if needed.
///
/// Returns the written paths in the order given. Names must be unique so no
/// file overwrites another.
pub async fn save_images<I>(entries: Vec<(String, I)>, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>>
where
    I: Borrow<RgbaImage> + Send + 'static,
{
    ensure_unique_names(&entries)?;
    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir).await?;

    let mut written = Vec::with_capacity(entries.len());
    for (name, image) in entries {
        let bytes = tokio::task::spawn_blocking(move || encode_png(image.borrow())).await??;
        let path = dir.join(name);
        tokio::fs::write(&path, bytes).await?;
        written.push(path);
    }
    Ok(written)
}

/// Write each page as `page_NNN.png` into `dir`
pub async fn save_pages(pages: &[Page], dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    save_images(page_entries(pages), dir).await
}

fn page_entries(pages: &[Page]) -> Vec<(String, Arc<RgbaImage>)> {
    pages
        .iter()
        .map(|page| (page_file_name(page.number), Arc::clone(&page.image)))
        .collect()
}

fn ensure_unique_names<I>(entries: &[(String, I)]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for (name, _) in entries {
        if !seen.insert(name.as_str()) {
            return Err(SheetError::DuplicateName(name.clone()));
        }
    }
    Ok(())
}

/// Write named images as PNG entries of a ZIP archive
pub async fn save_zip<I>(entries: Vec<(String, I)>, path: impl AsRef<Path>) -> Result<()>
where
    I: Borrow<RgbaImage> + Send + 'static,
{
    ensure_unique_names(&entries)?;
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let encoded = entries
            .iter()
            .map(|(name, image)| encode_png(image.borrow()).map(|bytes| (name.clone(), bytes)))
            .collect::<Result<Vec<_>>>()?;
        build_zip(encoded)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Write pages into a ZIP archive as `page_NNN.png`
pub async fn save_pages_zip(pages: &[Page], path: impl AsRef<Path>) -> Result<()> {
    save_zip(page_entries(pages), path).await
}

/// Write pages as a print-ready PDF
pub async fn save_pdf(pages: &[Page], options: &SheetOptions, path: impl AsRef<Path>) -> Result<()> {
    // Clones share the page rasters
    let pages = pages.to_vec();
    let options = options.clone();
    let path = path.as_ref().to_owned();

    let bytes = tokio::task::spawn_blocking(move || build_pdf(&pages, &options)).await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}
