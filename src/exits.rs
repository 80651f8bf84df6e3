//! Exit handling: signal handlers and terminal cleanup.

/// Put the terminal back into cooked mode with echo.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

const RESTORE_CODES: &[u8] = b"\x1b[0m\x1b[?25h";

/// Cooked mode, default colours, visible cursor. Only raw syscalls, so it is
/// safe to call from a signal handler.
fn restore_terminal() {
    reset_terminal_termios();
    // Only emit escape codes to a TTY
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(
                1,
                RESTORE_CODES.as_ptr() as *const libc::c_void,
                RESTORE_CODES.len(),
            );
        }
    }
}

/// Registered with atexit, runs on every normal exit.
extern "C" fn cleanup_on_exit() {
    restore_terminal();
}

/// SIGINT/SIGTERM/SIGHUP: restore the terminal and leave without running
/// atexit handlers or flushing stdio.
extern "C" fn signal_handler(_: libc::c_int) {
    restore_terminal();
    unsafe { libc::_exit(130) }
}

/// Install signal handlers and register atexit cleanup. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
