//! Hand the current table to the host's print facility.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;
use tokio::runtime::Handle;

use crate::dashboard::DashboardState;
use crate::error::{AppError, Result};

static SPOOL_SEQ: AtomicU64 = AtomicU64::new(0);

/// Plain-text snapshot of what is on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintJob {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PrintJob {
    pub fn from_state(state: &DashboardState) -> Self {
        Self {
            title: state.breadcrumb().join(" > "),
            headers: state.table_headers().iter().map(|h| h.to_string()).collect(),
            rows: state.rows.iter().map(|r| r.cells()).collect(),
        }
    }

    /// Tab separated rendering, one line per row.
    pub fn render_text(&self) -> String {
        let mut out = format!(
            "Bookstore Management System\n{}\nPrinted {}\n\n",
            self.title,
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        if !self.headers.is_empty() {
            out.push_str(&self.headers.join("\t"));
            out.push('\n');
        }
        for row in &self.rows {
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        out
    }
}

/// Platform print capability.
pub trait PrintHost {
    fn print(&mut self, job: &PrintJob) -> Result<()>;
}

/// Spools the job to a temp file and passes it to the OS print command.
///
/// The command is waited on from the runtime's blocking pool, and the spool
/// file is removed once it exits.
#[derive(Debug)]
pub struct SystemPrinter {
    handle: Handle,
    program: OsString,
    args: Vec<OsString>,
}

impl SystemPrinter {
    pub fn new(handle: Handle) -> Self {
        let (program, args) = if cfg!(windows) {
            ("notepad", vec![OsString::from("/p")])
        } else {
            ("lp", Vec::new())
        };
        Self {
            handle,
            program: program.into(),
            args,
        }
    }

    fn spool_path() -> PathBuf {
        std::env::temp_dir().join(format!(
            "bookstore-print-{}-{}-{}.txt",
            std::process::id(),
            Local::now().format("%Y%m%d_%H%M%S%3f"),
            SPOOL_SEQ.fetch_add(1, Ordering::Relaxed)
        ))
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(path);
        cmd
    }
}

fn remove_spool(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        tracing::warn!("Failed to remove print spool {:?}: {}", path, e);
    }
}

impl PrintHost for SystemPrinter {
    fn print(&mut self, job: &PrintJob) -> Result<()> {
        let path = Self::spool_path();
        std::fs::write(&path, job.render_text())?;
        tracing::info!("Sending print job to host: {:?}", path);

        let mut child = match self.command(&path).spawn() {
            Ok(child) => child,
            Err(e) => {
                remove_spool(&path);
                return Err(AppError::print(format!("failed to start print command: {e}")));
            }
        };

        self.handle.spawn_blocking(move || {
            match child.wait() {
                Ok(status) if status.success() => tracing::debug!("Print command finished for {:?}", path),
                Ok(status) => tracing::warn!("Print command exited with {}", status),
                Err(e) => tracing::warn!("Failed to wait for print command: {}", e),
            }
            remove_spool(&path);
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ModuleKey;
    use crate::models::{Record, RecordDraft};

    #[test]
    fn test_job_from_retail_state() {
        let state = DashboardState {
            active_module: ModuleKey::Retail,
            active_page: Some("Book List".to_string()),
            rows: vec![Record::create(9, Some(RecordDraft::default().with("title", "Beloved")))],
            ..Default::default()
        };
        let job = PrintJob::from_state(&state);
        assert_eq!(job.title, "Retail Workflow > Book List");
        assert_eq!(job.headers.len(), 6);
        assert_eq!(job.rows, vec![vec!["9".to_string(), "Beloved".to_string()]]);

        let text = job.render_text();
        assert!(text.contains("ISBN\tTitle\tAuthor"));
        assert!(text.contains("9\tBeloved"));
    }

    #[test]
    fn test_management_job_has_no_header_line() {
        let state = DashboardState {
            active_module: ModuleKey::Management,
            ..Default::default()
        };
        let text = PrintJob::from_state(&state).render_text();
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_spool_paths_are_unique() {
        let first = SystemPrinter::spool_path();
        let second = SystemPrinter::spool_path();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_missing_command_is_an_error() {
        let mut printer = SystemPrinter {
            handle: Handle::current(),
            program: "bookstore-no-such-print-command".into(),
            args: Vec::new(),
        };
        let err = printer.print(&PrintJob::from_state(&DashboardState::default())).unwrap_err();
        assert!(matches!(err, AppError::Print(_)));
    }

    /// Zombie processes whose parent is this test binary.
    #[cfg(target_os = "linux")]
    fn zombie_children() -> usize {
        let me = std::process::id().to_string();
        std::fs::read_dir("/proc")
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| std::fs::read_to_string(entry.path().join("stat")).ok())
            .filter(|stat| {
                // pid (comm) state ppid ...
                let Some((_, rest)) = stat.rsplit_once(')') else {
                    return false;
                };
                let mut fields = rest.split_whitespace();
                fields.next() == Some("Z") && fields.next() == Some(me.as_str())
            })
            .count()
    }

    #[cfg(unix)]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_print_command_is_reaped_and_spool_removed() {
        let dir = std::env::temp_dir().join(format!("bookstore-print-host-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let log = dir.join("lp.log");
        let script = dir.join("lp");
        std::fs::write(&script, format!("#!/bin/sh\necho \"$1\" >> '{}'\n", log.display())).unwrap();

        let mut printer = SystemPrinter {
            handle: Handle::current(),
            program: "sh".into(),
            args: vec![script.into_os_string()],
        };
        let job = PrintJob::from_state(&DashboardState::default());
        for _ in 0..3 {
            printer.print(&job).unwrap();
        }

        let mut spooled: Vec<PathBuf> = Vec::new();
        for _ in 0..100 {
            spooled = std::fs::read_to_string(&log)
                .unwrap_or_default()
                .lines()
                .map(PathBuf::from)
                .collect();
            if spooled.len() == 3 && spooled.iter().all(|p| !p.exists()) {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }

        assert_eq!(spooled.len(), 3);
        let distinct: std::collections::HashSet<_> = spooled.iter().collect();
        assert_eq!(distinct.len(), 3, "spool files collided: {spooled:?}");
        for path in &spooled {
            assert!(!path.exists(), "spool file left behind: {path:?}");
        }
        #[cfg(target_os = "linux")]
        assert_eq!(zombie_children(), 0);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
