use crate::core::selection::RejectedEntry;
use crate::utils::Result;
use dialoguer::Input;
use std::io::BufRead;

/// Where the single selection line comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionInput {
    Preset(String),
    Prompt,
}

pub struct SelectionPrompt {
    input: SelectionInput,
}

impl SelectionPrompt {
    pub fn new(preset: Option<String>) -> Self {
        let input = match preset {
            Some(selection) => SelectionInput::Preset(selection),
            None => SelectionInput::Prompt,
        };
        Self { input }
    }

    pub fn show_instructions(&self) {
        println!("\nEnter branches to delete across all repositories");
        println!("   - Use format: <owner/name>:<branch_number>");
        println!("   - Example: acme/docs:1, acme/site:2, acme/docs:3");
        println!("   - Type 'all' to delete ALL stale branches");
        println!("   - Press Enter to skip deletion");
    }

    /// Reads exactly one line: the preset, an interactive prompt, or stdin.
    pub fn read_selection(&self) -> Result<String> {
        match &self.input {
            SelectionInput::Preset(selection) => {
                println!("\nEnter selection: {selection}");
                Ok(selection.clone())
            }
            SelectionInput::Prompt if Self::is_non_interactive() => {
                println!("\nEnter selection: ");
                read_selection_line(std::io::stdin().lock())
            }
            SelectionInput::Prompt => {
                let line = Input::<String>::new()
                    .with_prompt("\nEnter selection")
                    .allow_empty(true)
                    .interact_text()?;
                Ok(line)
            }
        }
    }

    pub fn report_rejected(&self, rejected: &[RejectedEntry]) {
        for entry in rejected {
            eprintln!("Invalid selection: {} ({})", entry.entry, entry.error);
        }
    }

    fn is_non_interactive() -> bool {
        std::env::var("REPO_CLEANER_NON_INTERACTIVE").is_ok()
            || std::env::var("CI").is_ok()
            || !atty::is(atty::Stream::Stdin)
    }
}

/// Reads one line; end of input yields an empty line, which skips deletion.
fn read_selection_line(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line)
}
