mod error;
mod scheduler;

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use error::Error;
use scheduler::Session;
use std::io;

fn main() -> Result<(), Error> {
    execute!(io::stdout(), Clear(ClearType::All))?;

    Session::new().run()
}
