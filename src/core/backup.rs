use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, info, success};
use crate::utils::archive::zip_file;
use std::fs;
use std::path::Path;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest` (zipped when `compress`). Returns the
    /// final path, or `None` when the user declined to overwrite.
    pub fn backup(cfg: &Config, dest: &Path, compress: bool) -> AppResult<Option<String>> {
        let src = Path::new(&cfg.database);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if final_path == src {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Backup target is the database itself",
            )
            .into());
        }

        if final_path.exists()
            && !ask_confirmation(&format!(
                "The file '{}' already exists. Overwrite it?",
                final_path.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        if compress {
            zip_file(src, &final_path)?;
        } else {
            fs::copy(src, &final_path)?;
        }

        let shown = final_path.to_string_lossy().to_string();
        success(format!("Backup created: {}", shown));

        let pool = DbPool::new(&cfg.database)?;
        ttlog_soft(
            &pool.conn,
            "backup",
            &shown,
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(shown))
    }
}
