use std::ffi::{CStr, CString};
use std::io::{self, ErrorKind};
use std::ptr;

use libc::{c_char, c_int, pid_t};
use tracing::debug;

use super::{signal, ExitState, ProcessError};
use crate::core::commands::LoopControl;

/// Errors `execvp` commonly reports; their messages are rendered before
/// forking.
const EXEC_ERRNOS: [c_int; 8] = [
    libc::ENOENT,
    libc::EACCES,
    libc::ENOEXEC,
    libc::ENOTDIR,
    libc::ELOOP,
    libc::ENAMETOOLONG,
    libc::E2BIG,
    libc::ENOMEM,
];

/// Runs external programs in the foreground, one at a time.
#[derive(Clone, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Starts `args[0]` with `args` as its argument vector and blocks until it
    /// terminates. The exit status is only logged.
    pub fn launch(&self, args: &[&[u8]]) -> Result<LoopControl, ProcessError> {
        let child = Child::spawn(args)?;
        let pid = child.id();
        let state = child.wait()?;

        debug!(pid, state = %state, "child terminated");
        Ok(LoopControl::Continue)
    }
}

/// NUL-terminated argument vector, built before forking so the child never
/// allocates.
struct Argv {
    strings: Vec<CString>,
    pointers: Vec<*const c_char>,
}

impl Argv {
    fn new(args: &[&[u8]]) -> Result<Self, ProcessError> {
        if args.is_empty() {
            return Err(ProcessError::EmptyCommand);
        }

        let strings = args
            .iter()
            .map(|arg| CString::new(arg.to_vec()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| {
                ProcessError::InvalidArgument(String::from_utf8_lossy(args[0]).into_owned())
            })?;

        let pointers = strings
            .iter()
            .map(|s| s.as_ptr())
            .chain(std::iter::once(ptr::null()))
            .collect();

        Ok(Self { strings, pointers })
    }

    fn program(&self) -> &CStr {
        &self.strings[0]
    }
}

/// Diagnostics the child may print when exec fails.
///
/// Everything is formatted in the parent: between fork and exec the child
/// may only look up a slice and write it out.
struct ExecFailure {
    prefix: Vec<u8>,
    messages: Vec<(c_int, Vec<u8>)>,
}

impl ExecFailure {
    fn new(program: &[u8]) -> Self {
        let mut prefix = b"rtsh: ".to_vec();
        prefix.extend_from_slice(program);
        prefix.extend_from_slice(b": ");

        let messages = EXEC_ERRNOS
            .iter()
            .map(|&errno| {
                let mut line = prefix.clone();
                line.extend_from_slice(io::Error::from_raw_os_error(errno).to_string().as_bytes());
                line.push(b'\n');
                (errno, line)
            })
            .collect();

        Self { prefix, messages }
    }

    fn message(&self, errno: c_int) -> Option<&[u8]> {
        self.messages
            .iter()
            .find(|(e, _)| *e == errno)
            .map(|(_, line)| line.as_slice())
    }

    /// Writes the diagnostic for `errno` to stderr without allocating.
    fn report(&self, errno: c_int) {
        match self.message(errno) {
            Some(line) => write_stderr(line),
            None => {
                let mut digits = [0u8; 12];
                write_stderr(&self.prefix);
                write_stderr(b"exec failed, errno ");
                write_stderr(format_errno(errno, &mut digits));
                write_stderr(b"\n");
            }
        }
    }
}

/// Renders `errno` in decimal into `buf`, returning the used tail.
fn format_errno(errno: c_int, buf: &mut [u8; 12]) -> &[u8] {
    let negative = errno < 0;
    let mut n = errno.unsigned_abs();
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    if negative {
        start -= 1;
        buf[start] = b'-';
    }
    &buf[start..]
}

/// Handle to a forked child that has not been reaped yet.
#[derive(Debug)]
pub struct Child {
    pid: pid_t,
}

impl Child {
    pub fn spawn(args: &[&[u8]]) -> Result<Self, ProcessError> {
        let argv = Argv::new(args)?;
        let failure = ExecFailure::new(args[0]);

        // SAFETY: the shell is multithreaded (the interrupt handler runs on
        // its own thread), so the child may only make async-signal-safe
        // calls. It runs execvp, write and _exit on memory prepared above
        // and never allocates or takes a lock.
        match unsafe { libc::fork() } {
            -1 => Err(ProcessError::Spawn(io::Error::last_os_error())),
            0 => exec_child(&argv, &failure),
            pid => {
                debug!(pid, program = %String::from_utf8_lossy(args[0]), "spawned child");
                Ok(Child { pid })
            }
        }
    }

    pub fn id(&self) -> u32 {
        self.pid as u32
    }

    /// Blocks until the child exits or is killed. A stop is not terminal:
    /// each stop notification is logged and waited past.
    pub fn wait(self) -> Result<ExitState, ProcessError> {
        let mut status: c_int = 0;

        loop {
            // SAFETY: `status` is a valid out-pointer for the whole call.
            let rc = unsafe { libc::waitpid(self.pid, &mut status, libc::WUNTRACED) };
            if rc == -1 {
                let err = io::Error::last_os_error();
                if err.kind() == ErrorKind::Interrupted {
                    continue;
                }
                return Err(ProcessError::Wait(err));
            }

            if libc::WIFEXITED(status) {
                return Ok(ExitState::Exited(libc::WEXITSTATUS(status)));
            }
            if libc::WIFSIGNALED(status) {
                return Ok(ExitState::Signaled(libc::WTERMSIG(status)));
            }
            if libc::WIFSTOPPED(status) {
                debug!(
                    pid = self.pid,
                    signal = %signal::signal_name(libc::WSTOPSIG(status)),
                    "child stopped, still waiting"
                );
            }
        }
    }
}

fn exec_child(argv: &Argv, failure: &ExecFailure) -> ! {
    // SAFETY: `argv.pointers` is a NULL-terminated array of pointers into
    // `argv.strings`, which outlives the call.
    unsafe {
        libc::execvp(argv.program().as_ptr(), argv.pointers.as_ptr());
    }

    // Reading errno is a thread-local load, not a libc call.
    let errno = io::Error::last_os_error().raw_os_error().unwrap_or(0);
    failure.report(errno);

    // SAFETY: _exit is async-signal-safe and skips atexit handlers.
    unsafe { libc::_exit(libc::EXIT_FAILURE) }
}

fn write_stderr(mut bytes: &[u8]) {
    while !bytes.is_empty() {
        // SAFETY: the pointer and length describe a live slice.
        let n = unsafe { libc::write(libc::STDERR_FILENO, bytes.as_ptr().cast(), bytes.len()) };
        if n <= 0 {
            return;
        }
        bytes = &bytes[n as usize..];
    }
}
