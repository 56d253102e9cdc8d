use crate::error::Result;

/// Copy `s` to the system clipboard.
///
/// This is a thin wrapper around the `arboard` crate. On some platforms or in
/// headless CI environments clipboard initialization may fail, and the host
/// may deny clipboard access entirely; either way the error is returned to the
/// caller rather than swallowed. A failed copy leaves the generator state
/// untouched.
pub fn copy_to_clipboard(s: &str) -> Result<()> {
    let mut ctx = arboard::Clipboard::new()?;
    ctx.set_text(s.to_owned())?;
    Ok(())
}
