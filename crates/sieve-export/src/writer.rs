//! All-or-nothing export writer

use crate::error::{ExportError, Result};
use crate::format::{render, ExportKind};
use chrono::{DateTime, Utc};
use sieve_domain::ProcessingSession;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Write `session` in every format in `kinds` to `dir`
///
/// Each output is named `<stem>.<ext>` (see [`file_stem`]). Everything is
/// rendered and staged as hidden temp files before any target is touched.
/// Existing targets are moved aside while the new files are swapped in, so a
/// failure at any point leaves the directory as it was before the call.
pub fn export(session: &ProcessingSession, kinds: &[ExportKind], dir: &Path) -> Result<Vec<PathBuf>> {
    if session.is_empty() {
        return Err(ExportError::EmptySession);
    }

    let mut rendered = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        rendered.push((kind, render(session, kind)?));
    }

    fs::create_dir_all(dir).map_err(|source| unwritable(dir, source))?;

    let stem = file_stem(session);
    let mut staged = stage(&rendered, dir, &stem)?;
    commit(&mut staged)?;

    info!(
        "Exported {} files ({} formats) to {}",
        session.files.len(),
        staged.len(),
        dir.display()
    );
    Ok(staged.into_iter().map(|entry| entry.target).collect())
}

/// Export file stem for a session, e.g. `20240301_142501_9f3a61c2`
///
/// The session start time (UTC) followed by the low 32 bits of the session
/// id, so two sessions started in the same second never share a name.
pub fn file_stem(session: &ProcessingSession) -> String {
    let secs = i64::try_from(session.created_at).unwrap_or(i64::MAX);
    let timestamp = DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_default();
    format!(
        "{}_{:08x}",
        timestamp.format("%Y%m%d_%H%M%S"),
        session.id.value() as u32
    )
}

/// One output on its way into place
struct Staged {
    tmp: PathBuf,
    target: PathBuf,
    backup: Option<PathBuf>,
}

fn stage(rendered: &[(ExportKind, String)], dir: &Path, stem: &str) -> Result<Vec<Staged>> {
    let mut staged: Vec<Staged> = Vec::with_capacity(rendered.len());

    for (kind, content) in rendered {
        let target = dir.join(format!("{}.{}", stem, kind.extension()));
        let tmp = hidden_sibling(&target, "tmp");

        if let Err(source) = fs::write(&tmp, content) {
            let _ = fs::remove_file(&tmp);
            discard(&staged);
            return Err(unwritable(&tmp, source));
        }
        debug!("Staged {} ({} bytes)", tmp.display(), content.len());

        staged.push(Staged {
            tmp,
            target,
            backup: None,
        });
    }

    Ok(staged)
}

fn commit(staged: &mut [Staged]) -> Result<()> {
    for i in 0..staged.len() {
        if let Err(e) = swap_in(&mut staged[i]) {
            warn!(
                "Export to {} failed, restoring {} earlier files",
                staged[i].target.display(),
                i
            );
            restore(&staged[..i]);
            discard(&staged[i..]);
            return Err(e);
        }
    }

    for entry in staged.iter() {
        if let Some(backup) = &entry.backup {
            if let Err(e) = fs::remove_file(backup) {
                warn!("Could not remove backup {}: {}", backup.display(), e);
            }
        }
    }

    Ok(())
}

/// Move an existing target aside, then rename the staged file over it
fn swap_in(entry: &mut Staged) -> Result<()> {
    if fs::symlink_metadata(&entry.target).is_ok_and(|meta| meta.is_file()) {
        let backup = hidden_sibling(&entry.target, "bak");
        fs::rename(&entry.target, &backup).map_err(|source| unwritable(&entry.target, source))?;
        entry.backup = Some(backup);
    }

    if let Err(source) = fs::rename(&entry.tmp, &entry.target) {
        if let Some(backup) = entry.backup.take() {
            let _ = fs::rename(&backup, &entry.target);
        }
        return Err(unwritable(&entry.target, source));
    }

    debug!("Wrote {}", entry.target.display());
    Ok(())
}

/// Undo committed swaps: put the previous file back, or remove the new one
fn restore(committed: &[Staged]) {
    for entry in committed.iter().rev() {
        let result = match &entry.backup {
            Some(backup) => fs::rename(backup, &entry.target),
            None => fs::remove_file(&entry.target),
        };
        if let Err(e) = result {
            warn!("Could not restore {}: {}", entry.target.display(), e);
        }
    }
}

fn discard(staged: &[Staged]) {
    for entry in staged {
        let _ = fs::remove_file(&entry.tmp);
    }
}

fn hidden_sibling(target: &Path, suffix: &str) -> PathBuf {
    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{}.{}", file_name, suffix))
}

fn unwritable(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Unwritable {
        path: path.to_path_buf(),
        source,
    }
}
