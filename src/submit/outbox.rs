use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use fs2::FileExt;
use serde::Serialize;

use super::{ContactMessage, FormSubmitter, SubmitError};

/// Appends each message as one JSON line to a local file.
///
/// The file is exclusively locked while a line is written, so several
/// running instances can share one outbox.
pub struct OutboxSubmitter {
    path: PathBuf,
}

#[derive(Serialize)]
struct OutboxRecord<'a> {
    id: String,
    received_at: u64,
    #[serde(flatten)]
    message: &'a ContactMessage,
}

impl OutboxSubmitter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl FormSubmitter for OutboxSubmitter {
    fn name(&self) -> &'static str {
        "outbox"
    }

    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        let record = OutboxRecord {
            id: uuid::Uuid::new_v4().to_string(),
            received_at: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            message,
        };
        let line = serde_json::to_string(&record)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || append_locked(&path, &line))
            .await
            .map_err(|err| SubmitError::Unavailable {
                reason: format!("outbox writer stopped: {err}"),
            })??;

        tracing::info!(id = %record.id, path = %self.path.display(), "message written to outbox");
        Ok(())
    }
}

fn append_locked(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    FileExt::lock_exclusive(&file)?;
    let written = writeln!(file, "{line}").and_then(|()| file.flush());
    FileExt::unlock(&file)?;
    written
}
