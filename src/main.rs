//! Entry point: sets the terminal title once and runs the program.

use bubbletea_rs::Program;
use crossterm::execute;
use crossterm::terminal::SetTitle;

use pomowork::App;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    execute!(std::io::stdout(), SetTitle("PomoWork"))?;

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
