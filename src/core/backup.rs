//! Database backup: plain copy, optionally zipped.

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::fs;
use std::io::{Write, stderr, stdin};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() && !confirm_overwrite(dest)? {
            warning("Backup cancelled: existing file not overwritten");
            return Ok(());
        }

        fs::copy(src, dest)?;

        if compress {
            let zipped = compress_backup(dest)?;
            fs::remove_file(dest)?;
            success(format!("Backup created: {}", zipped.display()));
        } else {
            success(format!("Backup created: {}", dest.display()));
        }

        Ok(())
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    eprint!("⚠️  File '{}' already exists. Overwrite? [y/N]: ", dest.display());
    stderr().flush().ok();

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}

/// Compress a backup into a sibling .zip, returning the archive path.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "backup.sqlite".to_string());

    let mut src = fs::File::open(path)?;
    zip.start_file(name, options).map_err(std::io::Error::other)?;
    std::io::copy(&mut src, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}
