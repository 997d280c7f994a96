//! Interactive loop with line editing and persisted history.

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RustylineResult};

use crate::{ReplConfig, Session};

/// Line editor plus the history file it syncs with.
pub struct Repl {
    editor: DefaultEditor,
    history: Option<PathBuf>,
}

impl Repl {
    /// Create an editor, loading history if the config names a file.
    pub fn new(config: &ReplConfig) -> RustylineResult<Self> {
        let mut editor = DefaultEditor::new()?;
        if let Some(path) = &config.history {
            // A missing file just means a first run.
            if let Err(err) = editor.load_history(path) {
                tracing::debug!(path = %path.display(), %err, "no history loaded");
            }
        }
        Ok(Repl {
            editor,
            history: config.history.clone(),
        })
    }

    pub fn read_line(&mut self, prompt: &str) -> RustylineResult<String> {
        self.editor.readline(prompt)
    }

    pub fn add_history(&mut self, line: &str) {
        if let Err(err) = self.editor.add_history_entry(line) {
            tracing::warn!(%err, "failed to record history entry");
        }
    }

    /// Write history back to disk.
    pub fn finalize(&mut self) {
        let Some(path) = &self.history else {
            return;
        };
        if let Err(err) = self.editor.save_history(path) {
            tracing::warn!(path = %path.display(), %err, "failed to save history");
        }
    }
}

/// Run the read-eval-print loop until Ctrl-C or Ctrl-D.
pub fn run_repl(config: &ReplConfig) -> RustylineResult<()> {
    println!("{}", config.banner);

    let mut repl = Repl::new(config)?;
    let session = Session::new();

    let result = loop {
        match repl.read_line(&config.prompt) {
            Ok(line) => {
                repl.add_history(&line);
                println!("{}", session.eval_line(&line));
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break Ok(()),
            Err(err) => break Err(err),
        }
    };

    repl.finalize();
    result
}
