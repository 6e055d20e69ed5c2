//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::AnswerSpinner;
use covenant_application::ConversationController;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use tracing::warn;

const HISTORY_CAPACITY: usize = 500;

/// What the loop should do after a slash command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandOutcome {
    Continue,
    Quit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    controller: ConversationController,
    show_progress: bool,
    history_path: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(controller: ConversationController) -> Self {
        Self {
            controller,
            show_progress: true,
            history_path: dirs_history_path(),
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set the line history file (`None` disables history)
    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = self.editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(">>> ".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    // Discard replies to questions abandoned while editing
                    self.controller.drain();
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) == CommandOutcome::Quit {
                            break;
                        }
                        continue;
                    }

                    self.process_question(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_path else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!(path = %path.display(), "History unavailable: {}", e);
                editor
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Covenant - Agreement Chat          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Agreement: {}", self.controller.session().agreement_id());
        println!();
        Self::print_commands();
        for message in self.controller.messages() {
            println!("{}", ConsoleFormatter::format_message(message));
        }
        println!();
    }

    fn print_commands() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /history          - Show the conversation so far");
        println!("  /reset            - Abandon a pending question");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    /// Handle slash commands
    fn handle_command(&mut self, cmd: &str) -> CommandOutcome {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                CommandOutcome::Quit
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_commands();
                CommandOutcome::Continue
            }
            "/history" => {
                println!(
                    "{}",
                    ConsoleFormatter::format_transcript(self.controller.messages())
                );
                CommandOutcome::Continue
            }
            "/reset" => {
                self.controller.reset();
                println!("Pending question abandoned; you can ask again.");
                CommandOutcome::Continue
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                CommandOutcome::Continue
            }
        }
    }

    async fn process_question(&mut self, question: &str) {
        if !self.controller.submit(question) {
            println!("Still waiting for the previous answer. Use /reset to abandon it.");
            return;
        }

        let spinner = AnswerSpinner::start("Reading the agreement...", self.show_progress);
        let reply = tokio::select! {
            reply = self.controller.wait_for_reply() => Some(reply),
            _ = tokio::signal::ctrl_c() => None,
        };
        spinner.finish();

        match reply {
            Some(Some(message)) => {
                println!();
                println!("{}", ConsoleFormatter::format_message(&message));
                println!();
            }
            Some(None) => {}
            None => {
                self.controller.reset();
                println!("^C (question abandoned)");
            }
        }
    }
}

fn dirs_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("covenant").join("history.txt"))
}
