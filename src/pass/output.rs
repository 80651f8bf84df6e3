//! Where accepted passwords go: terminal, file, or clipboard.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::mem;
use std::path::{Path, PathBuf};

use copypasta::{ClipboardContext, ClipboardProvider};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::batch::{BatchReport, BatchRequest, BatchRunner};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Terminal,
    /// Appended to, created along with missing parent directories.
    File(PathBuf),
    Clipboard,
}

/// Run one batch and deliver its lines to `destination`.
pub fn deliver<R: RngCore + CryptoRng>(
    runner: &mut BatchRunner<'_, R>,
    request: &BatchRequest,
    destination: &Destination,
) -> Result<BatchReport> {
    match destination {
        Destination::Terminal => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            runner.run(request, &mut out)
        }
        Destination::File(path) => {
            let mut out = BufWriter::new(open_append(path)?);
            let report = runner.run(request, &mut out)?;
            out.flush()?;
            Ok(report)
        }
        Destination::Clipboard => {
            let mut buf = SecureBuf::new();
            let report = runner.run(request, &mut buf)?;
            copy_to_clipboard(buf.into_inner())?;
            Ok(report)
        }
    }
}

/// True when a clipboard context can be opened in this session.
pub fn clipboard_available() -> bool {
    ClipboardContext::new().is_ok()
}

fn open_append(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// In-memory writer whose every backing allocation is wiped before release.
///
/// Growth copies into a fresh zeroized buffer instead of letting `Vec`
/// reallocate, so no stale copy of earlier lines is left on the heap.
pub struct SecureBuf {
    buf: Zeroizing<Vec<u8>>,
}

impl SecureBuf {
    const INITIAL_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self {
            buf: Zeroizing::new(Vec::with_capacity(Self::INITIAL_CAPACITY)),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn into_inner(mut self) -> Zeroizing<Vec<u8>> {
        mem::take(&mut self.buf)
    }

    fn reserve(&mut self, additional: usize) {
        let needed = self.buf.len() + additional;
        if needed <= self.buf.capacity() {
            return;
        }
        let capacity = needed.max(self.buf.capacity() * 2);
        let mut grown = Zeroizing::new(Vec::with_capacity(capacity));
        grown.extend_from_slice(&self.buf);
        // The old buffer is wiped as it drops.
        self.buf = grown;
    }
}

impl Default for SecureBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for SecureBuf {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.reserve(data.len());
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Hand the lines over to the clipboard. The provider keeps its own copy,
/// which is outside this process' control once set.
fn copy_to_clipboard(mut lines: Zeroizing<Vec<u8>>) -> Result<()> {
    let mut ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    // Lines are built from ASCII pools and UTF-8 notes.
    let text = match String::from_utf8(mem::take(&mut *lines)) {
        Ok(text) => text,
        Err(e) => {
            let mut bytes = e.into_bytes();
            bytes.zeroize();
            return Err(Error::Clipboard("clipboard text is not valid UTF-8".into()));
        }
    };
    ctx.set_contents(text)
        .map_err(|e| Error::Clipboard(e.to_string()))
}
