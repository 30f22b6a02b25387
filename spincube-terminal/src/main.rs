/// Spincube Terminal - Rotating Cube
///
/// Animates a rotating cube on the terminal as wireframe, hidden-line or
/// light-sourced filled faces.
/// Controls:
///   - 1/2/3: Switch between line, hidden and filled styles
///   - Space: Pause
///   - Q/ESC: Quit

use std::io;
use spincube_terminal::TerminalApp;

fn main() -> io::Result<()> {
    println!("Spincube Terminal - Loading...");

    let mut app = TerminalApp::new()?;
    app.run()?;

    println!("Thank you for using Spincube!");
    Ok(())
}
