//! Clipboard output.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(Self { ctx })
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.ctx
            .set_contents(text.to_string())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        // Read back so the provider has taken ownership before we return.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

/// Clipboard that records copies, for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub fail: bool,
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::Clipboard("clipboard unavailable".into()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Copy and log failures; the caller's state is never touched.
pub fn copy_or_warn(clipboard: &mut dyn Clipboard, text: &str) -> bool {
    match clipboard.copy(text) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("failed to copy: {e}");
            false
        }
    }
}
