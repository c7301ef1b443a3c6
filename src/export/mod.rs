use chrono::Utc;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ScrapeResult;
use crate::extract::JobRecord;

/// Writes filtered records to timestamped CSV files under one directory.
pub struct CsvExporter {
    out_dir: PathBuf,
}

impl CsvExporter {
    pub fn new<P: AsRef<Path>>(out_dir: P) -> ScrapeResult<Self> {
        let out_dir = out_dir.as_ref().to_path_buf();
        fs::create_dir_all(&out_dir)?;
        Ok(Self { out_dir })
    }

    /// One row per record under a header of the field names, written to
    /// `<site>_jobs_<keyword>_<YYYYMMDD_HHMMSS>.csv`.
    pub fn export(
        &self,
        records: &[JobRecord],
        site: &str,
        keyword: &str,
    ) -> ScrapeResult<PathBuf> {
        let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
        let filename = format!("{}_jobs_{}_{}.csv", site, slug(keyword), timestamp);
        let path = self.out_dir.join(filename);

        let mut writer = csv::Writer::from_path(&path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        info!("Exported {} records to {}", records.len(), path.display());
        Ok(path)
    }
}

fn slug(keyword: &str) -> String {
    keyword
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
