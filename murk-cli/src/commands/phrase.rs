//! Phrase command implementation.

use anyhow::Result;
use murk_core::hex_passphrase;

/// Execute the phrase command.
///
/// Prints the bare passphrase only, so the output stays script-friendly.
pub fn execute(length: usize) -> Result<()> {
    let phrase = hex_passphrase(&mut rand::thread_rng(), length);
    println!("{phrase}");
    Ok(())
}
