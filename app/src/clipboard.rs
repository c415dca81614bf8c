//! Clipboard copy of already-displayed values.

#[cfg(feature = "clipboard")]
use std::time::Duration;

/// How long the clipboard is kept open after writing. On Linux the contents
/// vanish once the owning instance is dropped, so clipboard managers need
/// time to read them before the process exits.
#[cfg(feature = "clipboard")]
const HOLD: Duration = Duration::from_secs(2);

#[cfg(feature = "clipboard")]
pub fn copy(text: &str) -> anyhow::Result<()> {
    use arboard::Clipboard;

    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    std::thread::sleep(HOLD);
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
pub fn copy(_text: &str) -> anyhow::Result<()> {
    anyhow::bail!("parseinbox was built without clipboard support")
}
