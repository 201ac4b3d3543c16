use std::io::{self, Write};
use std::path::Path;

mod runner;

pub use runner::{GroupRunner, LineOutcome};

use crate::{
    core::{
        config::Config,
        state::{Mode, ShellState},
    },
    error::{print_error, ShellError},
    flags::Flags,
    highlight::{PromptStyle, PROMPT},
    input::LineSource,
};

pub struct Shell {
    pub(crate) state: ShellState,
    pub(crate) runner: GroupRunner,
    pub(crate) input: LineSource,
    pub(crate) config: Config,
    pub(crate) prompt: Option<PromptStyle>,
}

impl Shell {
    /// Picks interactive or batch mode from the positional arguments.
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let (mode, input) = match flags.positional() {
            [] => (Mode::Interactive, LineSource::stdin()),
            [batch] => {
                let input = LineSource::open(Path::new(batch))
                    .map_err(|e| ShellError::BatchFile(batch.clone(), e))?;
                (Mode::Batch, input)
            }
            extra => return Err(ShellError::TooManyArguments(extra.len())),
        };

        let prompt = (mode == Mode::Interactive && !flags.is_set("quiet"))
            .then(PromptStyle::new);
        let config = Config::new(flags.get_value("config").map(String::as_str));
        let state = ShellState::new(mode).with_debug(flags.is_set("debug"));

        Ok(Self::with_parts(state, input, config, prompt))
    }

    pub fn with_parts(
        state: ShellState,
        input: LineSource,
        config: Config,
        prompt: Option<PromptStyle>,
    ) -> Self {
        Shell {
            state,
            runner: GroupRunner::default(),
            input,
            config,
            prompt,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Runs until `exit` or end of input and returns the process exit status.
    pub fn run(&mut self) -> Result<u8, ShellError> {
        if self.run_startup_file()? == LineOutcome::Terminate {
            return Ok(self.state.exit_status());
        }

        loop {
            self.show_prompt();

            let line = match self.input.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.end_of_input();
                    break;
                }
                Err(e) => {
                    self.state.trace(format_args!("read error: {}", e));
                    self.end_of_input();
                    break;
                }
            };

            if self.runner.run_line(&line, &mut self.state) == LineOutcome::Terminate {
                break;
            }
        }

        Ok(self.state.exit_status())
    }

    fn run_startup_file(&mut self) -> Result<LineOutcome, ShellError> {
        let lines = self.config.startup_lines(self.state.mode())?;
        if !lines.is_empty() {
            self.state.trace(format_args!(
                "running {} startup line(s) from {:?}",
                lines.len(),
                self.config.paths().rc_path
            ));
        }

        for line in lines {
            if self.runner.run_line(&line, &mut self.state) == LineOutcome::Terminate {
                return Ok(LineOutcome::Terminate);
            }
        }
        Ok(LineOutcome::Continue)
    }

    fn show_prompt(&self) {
        if let Some(style) = &self.prompt {
            let mut stdout = io::stdout().lock();
            let _ = write!(stdout, "{}", style.render(PROMPT));
            let _ = stdout.flush();
        }
    }

    /// Batch files may simply run out; an interactive session must end with `exit`.
    fn end_of_input(&mut self) {
        if self.state.is_interactive() {
            print_error();
            self.state.mark_failed();
        }
    }
}
