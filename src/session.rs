//! Terminal surface: one translation rendered as status lines plus the
//! English text, and an interactive loop with example quick-fill.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::error::{Result, TerjemahError};
use crate::orchestrator::TranslationOrchestrator;
use crate::report::{StatusLevel, StatusMessage, empty_input_message, status_messages};
use crate::samples::{SAMPLE_TEXTS, sample};
use crate::translate::TranslationResult;

const PROMPT: &str = "id> ";

const HELP: &str = "Type Indonesian text and press Enter to translate it.\n\
                    :examples  list example texts\n\
                    :<n>       translate example n\n\
                    :help      show this help\n\
                    :quit      exit\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Translate(String),
    Sample(usize),
    Examples,
    Help,
    Quit,
    Blank,
}

pub fn parse_line(line: &str) -> SessionCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return SessionCommand::Blank;
    }

    match trimmed.strip_prefix(':') {
        Some("q") | Some("quit") | Some("exit") => SessionCommand::Quit,
        Some("examples") | Some("e") => SessionCommand::Examples,
        Some(rest) => match rest.parse::<usize>() {
            Ok(n) => SessionCommand::Sample(n),
            Err(_) => SessionCommand::Help,
        },
        None => SessionCommand::Translate(trimmed.to_string()),
    }
}

/// Numbered list of example texts
pub fn render_examples() -> String {
    let mut out = String::from("Example texts:\n");
    for (idx, text) in SAMPLE_TEXTS.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", idx + 1, text));
    }
    out
}

/// Status lines followed by the translated text
pub fn render_result(result: &TranslationResult) -> String {
    let mut out = String::new();
    for message in status_messages(result) {
        out.push_str(&format!("{}\n", message));
    }
    if !result.translated_text.is_empty() {
        out.push_str(&format!("English: {}\n", result.translated_text));
    }
    out
}

fn start_spinner(enabled: bool) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Translating...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

pub struct Session<'a> {
    orchestrator: &'a TranslationOrchestrator,
    show_spinner: bool,
}

impl<'a> Session<'a> {
    pub fn new(orchestrator: &'a TranslationOrchestrator, show_spinner: bool) -> Self {
        Self {
            orchestrator,
            show_spinner,
        }
    }

    /// Translate one input. Blank input only produces the validation warning.
    pub async fn translate(&self, text: &str) -> Result<Option<TranslationResult>> {
        let spinner = start_spinner(self.show_spinner && !text.trim().is_empty());
        let outcome = self.orchestrator.translate_text(text).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match outcome {
            Ok(result) => Ok(Some(result)),
            Err(TerjemahError::EmptyInput) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn translate_and_write<W>(&self, text: &str, writer: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let rendered = match self.translate(text).await? {
            Some(result) => render_result(&result),
            None => format!("{}\n", empty_input_message()),
        };
        writer.write_all(rendered.as_bytes()).await?;
        Ok(())
    }

    /// Read lines until EOF or `:quit`
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let chain: Vec<String> = self
            .orchestrator
            .chain()
            .iter()
            .map(|kind| kind.to_string())
            .collect();
        writer
            .write_all(format!("Indonesian → English ({})\n{}", chain.join(" → "), HELP).as_bytes())
            .await?;

        let mut lines = reader.lines();
        loop {
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let command = parse_line(&line);
            debug!("Session command: {:?}", command);

            match command {
                SessionCommand::Quit => break,
                SessionCommand::Blank => {
                    writer
                        .write_all(format!("{}\n", empty_input_message()).as_bytes())
                        .await?;
                }
                SessionCommand::Examples => {
                    writer.write_all(render_examples().as_bytes()).await?;
                }
                SessionCommand::Help => {
                    writer.write_all(HELP.as_bytes()).await?;
                }
                SessionCommand::Sample(n) => match sample(n) {
                    Some(text) => {
                        writer.write_all(format!("Indonesian: {}\n", text).as_bytes()).await?;
                        self.translate_and_write(text, &mut writer).await?;
                    }
                    None => {
                        let message = StatusMessage {
                            level: StatusLevel::Warning,
                            text: format!(
                                "No example {}; choose 1-{}.",
                                n,
                                SAMPLE_TEXTS.len()
                            ),
                        };
                        writer.write_all(format!("{}\n", message).as_bytes()).await?;
                    }
                },
                SessionCommand::Translate(text) => {
                    self.translate_and_write(&text, &mut writer).await?;
                }
            }
        }

        writer.flush().await?;
        Ok(())
    }
}
