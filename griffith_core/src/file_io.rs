//! # Project Files
//!
//! Reading and writing `.grf` project files.
//!
//! A save goes through a `.grf.tmp` sibling that is synced and renamed into
//! place. Concurrent editing is guarded twice: an OS advisory lock (fs2) on
//! a `.grf.lock` side file, whose JSON body tells other users who holds it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use griffith_core::file_io::{load_project, save_project, ProjectLock};
//! use griffith_core::project::Project;
//! use std::path::Path;
//!
//! let path = Path::new("spar_lug.grf");
//! let lock = ProjectLock::acquire(path, "analyst@example.com")?;
//! save_project(&Project::new("Analyst", "26-001", "Spar lug"), path)?;
//! drop(lock);
//!
//! assert_eq!(load_project(path)?.meta.job_id, "26-001");
//! # Ok::<(), griffith_core::errors::GriffithError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use fs2::FileExt;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{GriffithError, GriffithResult};
use crate::project::{Project, SCHEMA_VERSION};

pub const PROJECT_EXTENSION: &str = "grf";

/// Age after which a lock side file is ignored
const STALE_LOCK_HOURS: i64 = 24;

fn io_error<'a>(operation: &'a str, path: &'a Path) -> impl FnOnce(io::Error) -> GriffithError + 'a {
    move |e| GriffithError::file_error(operation, path.display().to_string(), e.to_string())
}

/// Write `bytes` to an open file and flush it to disk.
fn write_synced(file: &mut File, bytes: &[u8], path: &Path) -> GriffithResult<()> {
    file.write_all(bytes).map_err(io_error("write", path))?;
    file.sync_all().map_err(io_error("sync", path))
}

/// Who holds a project open, as recorded in its `.grf.lock` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockHolder {
    pub user: String,
    pub host: String,
    pub pid: u32,
    pub since: DateTime<Utc>,
}

impl LockHolder {
    fn current(user: String) -> Self {
        LockHolder {
            user,
            host: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            since: Utc::now(),
        }
    }

    /// Dead process on this host, or older than the stale cutoff
    fn is_stale(&self) -> bool {
        let same_host = hostname().as_deref() == Some(self.host.as_str());
        (same_host && !process_alive(self.pid)) || Utc::now() - self.since > Duration::hours(STALE_LOCK_HOURS)
    }

    fn describe(&self) -> String {
        format!("{}@{} (pid {})", self.user, self.host, self.pid)
    }
}

fn hostname() -> Option<String> {
    let vars: &[&str] = if cfg!(windows) { &["COMPUTERNAME"] } else { &["HOSTNAME", "HOST"] };
    vars.iter().find_map(|v| std::env::var(v).ok())
}

#[cfg(unix)]
fn process_alive(pid: u32) -> bool {
    Path::new("/proc").join(pid.to_string()).exists()
}

#[cfg(not(unix))]
fn process_alive(_pid: u32) -> bool {
    true
}

/// Exclusive hold on a project file. Dropping it deletes the side file.
pub struct ProjectLock {
    project: PathBuf,
    side_file: PathBuf,
    _handle: File,
    pub holder: LockHolder,
}

impl ProjectLock {
    /// Fails with `FileLocked` when a live holder is recorded or the OS lock
    /// is already taken. Stale side files are overwritten.
    pub fn acquire(path: &Path, user: impl Into<String>) -> GriffithResult<Self> {
        let side_file = lock_path_for(path);

        match read_holder(&side_file) {
            Some(existing) if !existing.is_stale() => {
                return Err(GriffithError::file_locked(
                    path.display().to_string(),
                    existing.describe(),
                    existing.since.to_rfc3339(),
                ));
            }
            Some(existing) => warn!("Replacing stale lock on {} from {}", path.display(), existing.describe()),
            None => {}
        }

        let mut handle = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&side_file)
            .map_err(io_error("open lock file", &side_file))?;
        handle
            .try_lock_exclusive()
            .map_err(|_| GriffithError::file_locked(path.display().to_string(), "another process", "unknown"))?;
        // Only the lock owner may rewrite the holder record.
        handle.set_len(0).map_err(io_error("clear lock file", &side_file))?;

        let holder = LockHolder::current(user.into());
        write_synced(&mut handle, serde_json::to_string_pretty(&holder)?.as_bytes(), &side_file)?;

        debug!("Locked {} for {}", path.display(), holder.user);
        Ok(ProjectLock {
            project: path.to_path_buf(),
            side_file,
            _handle: handle,
            holder,
        })
    }

    /// The live holder of `path`, if any. Does not take the lock.
    pub fn holder_of(path: &Path) -> Option<LockHolder> {
        read_holder(&lock_path_for(path)).filter(|h| !h.is_stale())
    }

    pub fn project_path(&self) -> &Path {
        &self.project
    }
}

impl Drop for ProjectLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.side_file);
    }
}

/// `study.grf` → `study.grf.lock`
fn lock_path_for(project_path: &Path) -> PathBuf {
    let mut name = project_path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

/// Missing or unreadable side files count as "no holder".
fn read_holder(side_file: &Path) -> Option<LockHolder> {
    let contents = fs::read_to_string(side_file).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Write `project` to `path` atomically.
pub fn save_project(project: &Project, path: &Path) -> GriffithResult<()> {
    let json = serde_json::to_string_pretty(project)?;
    let tmp_path = path.with_extension(format!("{}.tmp", PROJECT_EXTENSION));

    let mut tmp = File::create(&tmp_path).map_err(io_error("create", &tmp_path))?;
    write_synced(&mut tmp, json.as_bytes(), &tmp_path)?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        io_error("replace", path)(e)
    })?;

    debug!("Saved {} with {} calculations", path.display(), project.item_count());
    Ok(())
}

/// Read a project file and check that its schema is one we understand.
///
/// Errors: `FileError` on I/O, `SerializationError` on bad JSON,
/// `VersionMismatch` on an incompatible schema.
pub fn load_project(path: &Path) -> GriffithResult<Project> {
    let contents = fs::read_to_string(path).map_err(io_error("read", path))?;
    let project: Project = serde_json::from_str(&contents).map_err(|e| GriffithError::SerializationError {
        reason: format!("{}: {}", path.display(), e),
    })?;

    SchemaVersion::parse(&project.meta.version)
        .filter(|v| v.readable_by(&current_schema()))
        .ok_or_else(|| GriffithError::VersionMismatch {
            file_version: project.meta.version.clone(),
            expected_version: SCHEMA_VERSION.to_string(),
        })?;
    Ok(project)
}

/// A loaded project plus whoever currently has it locked.
#[derive(Debug)]
pub struct OpenedProject {
    pub project: Project,
    pub locked_by: Option<LockHolder>,
}

impl OpenedProject {
    pub fn is_read_only(&self) -> bool {
        self.locked_by.is_some()
    }
}

/// Load `path` without locking it, noting any other holder.
pub fn open_project(path: &Path) -> GriffithResult<OpenedProject> {
    Ok(OpenedProject {
        project: load_project(path)?,
        locked_by: ProjectLock::holder_of(path),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SchemaVersion {
    major: u32,
    minor: u32,
}

impl SchemaVersion {
    fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split('.').map(str::parse::<u32>);
        let major = parts.next()?.ok()?;
        let minor = parts.next().and_then(Result::ok).unwrap_or(0);
        Some(SchemaVersion { major, minor })
    }

    /// Same major; while pre-1.0 a newer minor may carry fields we lack.
    fn readable_by(&self, reader: &SchemaVersion) -> bool {
        self.major == reader.major && (reader.major > 0 || self.minor <= reader.minor)
    }
}

fn current_schema() -> SchemaVersion {
    SchemaVersion::parse(SCHEMA_VERSION).unwrap_or(SchemaVersion { major: 0, minor: 0 })
}
