use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rusqlite::Connection;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::db;
use crate::loader::DocumentFormat;
use crate::parser;
use crate::parser::profile::CandidateProfile;

const CONCURRENCY: usize = 4;

/// Ingest stats returned after completion.
pub struct IngestStats {
    pub total: usize,
    pub ok: usize,
    pub errors: usize,
}

struct IngestOutcome {
    file_name: String,
    profile: Option<CandidateProfile>,
    error: Option<String>,
}

/// Ingest documents concurrently, storing each profile as it arrives.
/// Decoding is bounded by the semaphore; the receiving loop owns the only
/// database handle, so writes stay sequential. An unreadable file counts as
/// an error and is skipped; an undecodable one still produces a profile
/// (from diagnostic text) and is stored.
pub async fn ingest_files_streaming(
    conn: &Connection,
    files: Vec<(PathBuf, DocumentFormat)>,
    owner: &str,
) -> Result<IngestStats> {
    let semaphore = Arc::new(Semaphore::new(CONCURRENCY));
    let total = files.len();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    // Channel: workers send extracted profiles, main loop saves to DB
    let (tx, mut rx) = tokio::sync::mpsc::channel::<IngestOutcome>(CONCURRENCY * 2);

    for (path, format) in files {
        let sem = Arc::clone(&semaphore);
        let tx = tx.clone();

        tokio::spawn(async move {
            let _permit = sem.acquire().await.unwrap();
            let _ = tx.send(ingest_one(&path, format).await).await;
        });
    }

    // Drop our copy of tx so rx closes when all spawned tasks finish
    drop(tx);

    let mut ok = 0usize;
    let mut errors = 0usize;

    // Prepare the insert once, reuse for each arriving profile
    let mut insert_stmt = db::prepare_insert(conn)?;

    while let Some(outcome) = rx.recv().await {
        match outcome.profile {
            Some(profile) => {
                db::insert_prepared(&mut insert_stmt, &profile, owner, &outcome.file_name)?;
                ok += 1;
            }
            None => {
                warn!(
                    "Skipping {}: {}",
                    outcome.file_name,
                    outcome.error.unwrap_or_else(|| "unknown error".into())
                );
                errors += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    info!("Ingested {} documents ({} stored, {} errors)", total, ok, errors);

    Ok(IngestStats { total, ok, errors })
}

async fn ingest_one(path: &Path, format: DocumentFormat) -> IngestOutcome {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document")
        .to_string();

    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let profile = parser::parse_document(bytes, format, &file_name).await;
            IngestOutcome {
                file_name,
                profile: Some(profile),
                error: None,
            }
        }
        Err(e) => IngestOutcome {
            file_name,
            profile: None,
            error: Some(e.to_string()),
        },
    }
}
