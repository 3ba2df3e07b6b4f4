//! Hand-off of link targets to the host platform.
//!
//! The screen never parses or validates a URI. `mailto:`, `tel:` and
//! `https:` strings alike go to whatever the platform uses to open them.

use std::cell::RefCell;
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Failure to dispatch a URI. Never fatal to the screen.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The platform opener could not be started.
    #[error("Failed to launch {program} for {uri}: {source}")]
    Launch {
        /// Program that was spawned.
        program: String,
        /// URI being opened.
        uri: String,
        /// Spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// No opener is known for this platform.
    #[error("No URI opener available on this platform")]
    Unsupported,
}

/// Something that can open a URI string.
pub trait UriOpener {
    /// Dispatch `uri`. Returns once the hand-off is done, not when the
    /// target application finishes.
    fn open(&self, uri: &str) -> Result<(), OpenError>;
}

/// Opens URIs with the desktop's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    /// Program and leading arguments used on this platform.
    fn command() -> Option<(&'static str, &'static [&'static str])> {
        const NO_ARGS: &[&str] = &[];
        // Empty title argument, otherwise `start` treats a quoted URI as one.
        const START_ARGS: &[&str] = &["/C", "start", ""];

        if cfg!(target_os = "macos") {
            Some(("open", NO_ARGS))
        } else if cfg!(target_os = "windows") {
            Some(("cmd", START_ARGS))
        } else if cfg!(unix) {
            Some(("xdg-open", NO_ARGS))
        } else {
            None
        }
    }
}

impl UriOpener for SystemOpener {
    fn open(&self, uri: &str) -> Result<(), OpenError> {
        let (program, args) = Self::command().ok_or(OpenError::Unsupported)?;
        debug!(program, uri, "Dispatching URI");

        let launched = launch(program, args, uri)?;
        // The waiter outlives this call; dropping its handle detaches it.
        drop(launched.waiter);

        info!(uri, pid = launched.pid, "Opened link");
        Ok(())
    }
}

/// A launched opener process and the thread that reaps it.
#[derive(Debug)]
struct Launched {
    pid: u32,
    waiter: JoinHandle<io::Result<ExitStatus>>,
}

/// Start `program args.. uri` with its output discarded and wait for it on
/// a background thread, so the screen never blocks on the opener and no
/// finished child is left unreaped.
fn launch(program: &str, args: &[&str], uri: &str) -> Result<Launched, OpenError> {
    // Output would corrupt the alternate screen.
    let mut child = Command::new(program)
        .args(args)
        .arg(uri)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| OpenError::Launch {
            program: program.to_string(),
            uri: uri.to_string(),
            source,
        })?;

    let pid = child.id();
    let program = program.to_string();
    let uri = uri.to_string();
    let waiter = thread::spawn(move || {
        let status = child.wait();
        match &status {
            Ok(status) if !status.success() => {
                warn!(program, uri, %status, "URI opener exited unsuccessfully");
            }
            Ok(_) => debug!(program, uri, "URI opener finished"),
            Err(err) => warn!(program, uri, error = %err, "Failed to wait for URI opener"),
        }
        status
    });

    Ok(Launched { pid, waiter })
}

/// Records dispatched URIs instead of opening them. Used by tests and
/// `--dump`.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl RecordingOpener {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// URIs dispatched so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl UriOpener for RecordingOpener {
    fn open(&self, uri: &str) -> Result<(), OpenError> {
        self.opened.borrow_mut().push(uri.to_string());
        Ok(())
    }
}

/// Shared openers, so a caller can keep a handle on a recorder it lent out.
impl<T: UriOpener + ?Sized> UriOpener for std::rc::Rc<T> {
    fn open(&self, uri: &str) -> Result<(), OpenError> {
        (**self).open(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn shared_recorder_sees_opens_through_clone() {
        let recorder = Rc::new(RecordingOpener::new());
        let lent: Box<dyn UriOpener> = Box::new(Rc::clone(&recorder));
        lent.open("https://example.org").unwrap();
        assert_eq!(recorder.opened(), vec!["https://example.org"]);
    }

    #[test]
    fn recording_opener_keeps_order() {
        let opener = RecordingOpener::new();
        opener.open("mailto:someone@example.org").unwrap();
        opener.open("tel:+100").unwrap();
        assert_eq!(
            opener.opened(),
            vec!["mailto:someone@example.org", "tel:+100"]
        );
    }

    #[test]
    fn recording_opener_passes_uri_through_untouched() {
        let opener = RecordingOpener::new();
        opener.open("not a uri at all").unwrap();
        assert_eq!(opener.opened(), vec!["not a uri at all"]);
    }

    #[test]
    fn system_opener_has_command_on_supported_platforms() {
        if cfg!(any(unix, windows)) {
            assert!(SystemOpener::command().is_some());
        }
    }

    #[test]
    fn launch_of_missing_program_is_an_error() {
        let result = launch("folio-no-such-opener", &[], "https://example.org");
        assert!(matches!(result, Err(OpenError::Launch { .. })));
    }

    #[cfg(target_os = "linux")]
    fn is_zombie(pid: u32) -> bool {
        // `pid (comm) state ...`; comm may contain spaces.
        std::fs::read_to_string(format!("/proc/{pid}/stat"))
            .ok()
            .and_then(|stat| {
                let (_, rest) = stat.rsplit_once(')')?;
                rest.split_whitespace().next().map(|state| state == "Z")
            })
            .unwrap_or(false)
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn finished_openers_are_reaped() {
        let launched: Vec<Launched> = (0..3)
            .map(|_| launch("sh", &["-c", "exit 0", "sh"], "https://example.org").unwrap())
            .collect();

        for Launched { pid, waiter } in launched {
            let status = waiter.join().unwrap().unwrap();
            assert!(status.success());
            assert!(!is_zombie(pid), "opener {pid} left unreaped");
        }
    }

    #[cfg(unix)]
    #[test]
    fn failing_opener_status_is_reported() {
        let launched = launch("sh", &["-c", "exit 3", "sh"], "tel:+100").unwrap();
        let status = launched.waiter.join().unwrap().unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn launch_error_mentions_program_and_uri() {
        let err = OpenError::Launch {
            program: "xdg-open".to_string(),
            uri: "https://example.org".to_string(),
            source: std::io::Error::other("missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("xdg-open"));
        assert!(msg.contains("https://example.org"));
    }
}
