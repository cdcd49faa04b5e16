use anyhow::{Context, Result};
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
    sync::Arc,
};
use tabledata::envelope::{FileMeta, PreviewEnvelope};
use tabledata::ingest;
use tokio::{
    sync::{mpsc, Semaphore},
    time::Instant,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Preview stored uploads from the command line: parse each file into its
/// normalized table and print the response envelope as JSON. Files are
/// parsed concurrently, each on the blocking pool, the way the portal's
/// request layer fans out independent preview calls.
#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let paths: Vec<PathBuf> = env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        eprintln!("usage: tabledata <file.csv|file.xlsx|file.xls> [...]");
        process::exit(2);
    }
    info!("{} file(s) to preview", paths.len());

    // ─── 2) fan out parse calls, bounded ─────────────────────────────
    let (tx, mut rx) = mpsc::channel::<(PathBuf, Result<String>)>(paths.len());
    let sem = Arc::new(Semaphore::new(4));
    let mut handles = Vec::with_capacity(paths.len());

    for (idx, path) in paths.into_iter().enumerate() {
        let tx = tx.clone();
        let sem = sem.clone();

        handles.push(tokio::spawn(async move {
            let _permit = sem.acquire().await.unwrap();
            let start = Instant::now();
            let result = tokio::task::spawn_blocking({
                let path = path.clone();
                move || preview(idx as i64 + 1, &path)
            })
            .await
            .unwrap_or_else(|e| Err(anyhow::anyhow!("parse task panicked: {e}")));
            info!(path = %path.display(), elapsed = ?start.elapsed(), "previewed");
            let _ = tx.send((path, result)).await;
        }));
    }
    drop(tx);

    // ─── 3) print envelopes as they complete ─────────────────────────
    let mut failures = 0usize;
    while let Some((path, result)) = rx.recv().await {
        match result {
            Ok(json) => println!("{}", json),
            Err(e) => {
                failures += 1;
                error!("{}: {:#}", path.display(), e);
            }
        }
    }

    for h in handles {
        let _ = h.await;
    }

    if failures > 0 {
        process::exit(1);
    }
    Ok(())
}

/// Parse one file and assemble its preview envelope. The declared type is
/// derived from the path's extension, as it is for uploads recorded
/// without an explicit tag.
fn preview(id: i64, path: &Path) -> Result<String> {
    let file_type = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let table = ingest::parse_file(path, &file_type)?;
    let size_bytes = fs::metadata(path)
        .with_context(|| format!("reading metadata for {}", path.display()))?
        .len();
    let meta = FileMeta {
        id,
        name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        file_type,
        size_bytes,
    };

    serde_json::to_string_pretty(&PreviewEnvelope::new(&meta, &table)).map_err(Into::into)
}
