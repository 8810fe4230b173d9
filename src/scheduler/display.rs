use super::session::MenuChoice;
use super::{Algorithm, Report};
use crate::error::Error;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::{
    io::{self, Stdin, Stdout},
    str::FromStr,
};

const EXIT_KEY: char = 'F';

/// All terminal interaction for a session: prompting, the algorithm menu,
/// and styled report output.
pub struct Console {
    stdin: Stdin,
    stdout: Stdout,
}

impl Console {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }

    pub fn clear(&mut self) -> Result<(), Error> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, Error> {
        let mut line = String::new();
        if self.stdin.read_line(&mut line)? == 0 {
            return Err(Error::UnexpectedEof);
        }
        Ok(line.trim().to_owned())
    }

    // Reprompts until the line parses; malformed input never aborts the session.
    pub fn prompt_number<T: FromStr>(&mut self, label: &str) -> Result<T, Error> {
        loop {
            execute!(self.stdout, Print(label))?;
            match self.read_line()?.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.print_error("Invalid number, try again.")?,
            }
        }
    }

    pub fn prompt_positive(&mut self, label: &str) -> Result<u32, Error> {
        loop {
            let value = self.prompt_number(label)?;
            if value > 0 {
                return Ok(value);
            }
            self.print_error("Value must be at least 1.")?;
        }
    }

    pub fn prompt_process_count(&mut self) -> Result<usize, Error> {
        loop {
            let count = self.prompt_number("Input no. of processes [2-9]: ")?;
            if (2..=9).contains(&count) {
                return Ok(count);
            }
            self.print_error("Process count must be between 2 and 9.")?;
        }
    }

    pub fn prompt_choice(&mut self) -> Result<MenuChoice, Error> {
        loop {
            self.print_menu()?;
            execute!(self.stdout, Print("\nEnter choice: "))?;
            match self.read_line()?.chars().next() {
                Some(choice) if choice.eq_ignore_ascii_case(&EXIT_KEY) => {
                    return Ok(MenuChoice::Exit)
                }
                Some(choice) => match Algorithm::from_choice(choice) {
                    Some(algorithm) => return Ok(MenuChoice::Run(algorithm)),
                    None => self.print_error("Invalid choice!")?,
                },
                None => self.print_error("Invalid choice!")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), Error> {
        execute!(
            self.stdout,
            SetAttribute(Attribute::Bold),
            Print("\nCPU Scheduling Algorithm:\n"),
            SetAttribute(Attribute::Reset),
        )?;
        for algorithm in Algorithm::ALL {
            execute!(
                self.stdout,
                Print(format!("[{}] {}\n", algorithm.key(), algorithm)),
            )?;
        }
        execute!(self.stdout, Print(format!("[{}] Exit\n", EXIT_KEY)))?;
        Ok(())
    }

    pub fn prompt_again(&mut self) -> Result<bool, Error> {
        execute!(self.stdout, Print("\nInput again (y/n)? "))?;
        let line = self.read_line()?;
        Ok(matches!(line.chars().next(), Some('y' | 'Y')))
    }

    pub fn print_line(&mut self, text: &str) -> Result<(), Error> {
        execute!(self.stdout, Print(text), Print("\n"))?;
        Ok(())
    }

    pub fn print_heading(&mut self, text: &str) -> Result<(), Error> {
        execute!(
            self.stdout,
            SetForegroundColor(Color::Blue),
            SetAttribute(Attribute::Bold),
            Print(text),
            Print("\n"),
            SetAttribute(Attribute::Reset),
        )?;
        Ok(())
    }

    fn print_error(&mut self, text: &str) -> Result<(), Error> {
        execute!(
            self.stdout,
            SetForegroundColor(Color::Red),
            Print(text),
            Print("\n"),
            ResetColor,
        )?;
        Ok(())
    }

    pub fn print_report(&mut self, report: &Report) -> Result<(), Error> {
        execute!(
            self.stdout,
            SetForegroundColor(Color::Green),
            Print("Waiting time\tTurnaround time:\n"),
            ResetColor,
        )?;
        for process in report.processes() {
            execute!(
                self.stdout,
                Print(format!(
                    "\tP{}: {}\t\tP{}: {}\n",
                    process.id(),
                    process.waiting(),
                    process.id(),
                    process.turnaround()
                )),
            )?;
        }
        execute!(
            self.stdout,
            Print(format!(
                "Average Waiting Time: {:.2}\n",
                report.average_waiting()
            )),
            Print(format!(
                "Average Turnaround Time: {:.2}\n",
                report.average_turnaround()
            )),
        )?;
        Ok(())
    }
}
