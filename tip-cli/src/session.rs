//! Interactive session: reads commands line by line and re-renders the form
//! after every change.

use std::io::{self, BufRead, Write};

use tip_core::CalculatorForm;
use tracing::{debug, info};

use crate::command::{Command, HELP};
use crate::config::Config;
use crate::render::render_form;

/// Whether the session should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct Session<R, W> {
    form: CalculatorForm,
    input: R,
    output: W,
    prompt: String,
    show_help: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        input: R,
        output: W,
        config: &Config,
    ) -> Self {
        Self::with_form(CalculatorForm::new(), input, output, config)
    }

    /// Starts from an existing form, e.g. one prefilled from flags.
    pub fn with_form(
        form: CalculatorForm,
        input: R,
        output: W,
        config: &Config,
    ) -> Self {
        Self {
            form,
            input,
            output,
            prompt: config.prompt.clone(),
            show_help: config.show_help,
        }
    }

    /// Hands back the form and the output sink.
    pub fn into_parts(self) -> (CalculatorForm, W) {
        (self.form, self.output)
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        info!("interactive session started");
        if self.show_help {
            writeln!(self.output, "{HELP}")?;
        }
        self.print_form()?;

        let mut line = String::new();
        loop {
            if !self.prompt.is_empty() {
                write!(self.output, "{}", self.prompt)?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input");
                break;
            }

            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }

        info!("interactive session finished");
        Ok(())
    }

    /// Parses and applies one line, writing any response.
    pub fn handle_line(
        &mut self,
        line: &str,
    ) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(error) => {
                debug!(%error, line = line.trim_end(), "command rejected");
                writeln!(self.output, "error: {error}")?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Show => self.print_form()?,
            action => {
                let outcome = action.apply(&mut self.form);
                debug!(?action, ?outcome, "command applied");
                self.print_form()?;
            }
        }

        Ok(Flow::Continue)
    }

    fn print_form(&mut self) -> io::Result<()> {
        write!(self.output, "{}", render_form(&self.form.view()))
    }
}
