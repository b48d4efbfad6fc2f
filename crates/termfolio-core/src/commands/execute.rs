//! Command execution logic.
//!
//! Contains the `execute_command` function that evaluates parsed commands
//! against the session and the virtual filesystem.

use chrono::{DateTime, Local};
use rand::Rng;
use rand::rngs::StdRng;

use super::manual::{self, MANUAL};
use super::{Command, CommandResult, Decorative, Editor, Effect, FsCommand, InfoCommand, PathArg};
use crate::config::{ASCII_COFFEE, ASCII_PROFILE, JOKES, PORTFOLIO_3D_URL, SOCIAL_LINKS};
use crate::error::ShellError;
use crate::filesystem::{FileContent, VirtualFs};
use crate::history::History;
use crate::models::{Link, Output, Payload, Section, Session};

/// Everything besides the session a command may read.
pub struct Context<'a> {
    pub fs: &'a VirtualFs,
    pub history: &'a History,
    /// Current local time, for `date`
    pub now: DateTime<Local>,
    /// Randomness, for `joke`
    pub rng: &'a mut StdRng,
}

/// Execute a parsed command.
///
/// Never fails: every error becomes a single `error` output. The session
/// is only read; state changes come back as [`Effect`]s.
pub fn execute_command(cmd: &Command, session: &Session, ctx: &mut Context<'_>) -> CommandResult {
    let result = match cmd {
        Command::Clear => Ok(CommandResult::silent(Effect::ClearHistory)),
        Command::Navigate(section) => Ok(execute_navigate(*section, session)),
        Command::Edit { editor, file } => execute_edit(*editor, file.as_deref()),
        Command::Info(info) => Ok(execute_info(*info, session, ctx)),
        Command::Fs(fs_cmd) => execute_fs(fs_cmd, session, ctx.fs),
        Command::Echo(text) => Ok(CommandResult::output(Output::system(text.as_str()))),
        Command::Man(name) => execute_man(name.as_deref()),
        Command::Decorative(decorative) => Ok(execute_decorative(*decorative, ctx.rng)),
        Command::Unknown(verb) => Err(ShellError::UnknownCommand(verb.clone())),
    };

    result.unwrap_or_else(|e| CommandResult::output(Output::error(e.to_string())))
}

/// Execute a section name.
fn execute_navigate(section: Section, session: &Session) -> CommandResult {
    let message = if session.shell_visible() {
        format!("Opening {}...", section.file_name())
    } else {
        format!("Switched to {}", section)
    };
    CommandResult::with_effect(Output::success(message), Effect::Navigate(section))
}

/// Execute `edit`, `nano` or `vim`.
fn execute_edit(editor: Editor, file: Option<&str>) -> Result<CommandResult, ShellError> {
    let file = file.ok_or_else(|| ShellError::missing(editor.name(), "file operand"))?;
    let section = Section::from_file_name(file)
        .ok_or_else(|| ShellError::unknown_file(editor.name(), file))?;

    Ok(CommandResult::with_effect(
        Output::success(format!(
            "Opening {} in {}...",
            section.file_name(),
            editor.name()
        )),
        Effect::OpenEditor(section),
    ))
}

/// Execute a read-only informational command.
fn execute_info(info: InfoCommand, session: &Session, ctx: &Context<'_>) -> CommandResult {
    let output = match info {
        InfoCommand::Help => Output::info(Payload::Table(
            MANUAL
                .iter()
                .map(|m| (m.synopsis.to_string(), m.summary.to_string()))
                .collect(),
        )),
        InfoCommand::Social => Output::info(Payload::Links(
            SOCIAL_LINKS
                .iter()
                .map(|(label, url)| Link::new(*label, *url))
                .collect(),
        )),
        InfoCommand::Whoami => Output::info(Payload::Ascii(ASCII_PROFILE.to_string())),
        InfoCommand::Date => {
            Output::system(ctx.now.format("%a %b %e %H:%M:%S %Y").to_string())
        }
        InfoCommand::History => Output::info(Payload::Table(ctx.history.numbered())),
        InfoCommand::Pwd => Output::system(session.cwd()),
    };
    CommandResult::output(output)
}

/// Execute `ls`, `cd` or `cat`.
fn execute_fs(
    cmd: &FsCommand,
    session: &Session,
    fs: &VirtualFs,
) -> Result<CommandResult, ShellError> {
    let cwd = session.cwd();

    match cmd {
        FsCommand::Ls(path) => {
            let entries = fs.list_dir(cwd, path.as_ref().map(PathArg::as_str))?;
            Ok(CommandResult::output(Output::system(Payload::List(
                entries.iter().map(|e| e.label()).collect(),
            ))))
        }
        FsCommand::Cd(path) => {
            let target = fs.change_dir(cwd, path.as_ref().map(PathArg::as_str))?;
            Ok(CommandResult::with_effect(
                Output::system(target.as_str()),
                Effect::ChangeDir(target),
            ))
        }
        FsCommand::Cat(file) => {
            let file = file
                .as_ref()
                .ok_or_else(|| ShellError::missing("cat", "file operand"))?;
            let output = match fs.read_file(cwd, file.as_str())? {
                FileContent::Text(content) => Output::system(content),
                FileContent::Section(section) => Output::info(format!(
                    "{} is a section file. Open it with 'edit {}' (or nano, vim), or type '{}'.",
                    file,
                    section.file_name(),
                    section
                )),
            };
            Ok(CommandResult::output(output))
        }
    }
}

/// Execute `man`.
fn execute_man(name: Option<&str>) -> Result<CommandResult, ShellError> {
    let name = name.ok_or_else(|| ShellError::missing("man", "command name"))?;
    let page = manual::lookup(name).ok_or_else(|| ShellError::NoManualEntry(name.to_string()))?;

    Ok(CommandResult::output(Output::info(Payload::Table(vec![
        ("NAME".to_string(), format!("{} - {}", page.name, page.summary)),
        ("SYNOPSIS".to_string(), page.synopsis.to_string()),
        ("DESCRIPTION".to_string(), page.description.to_string()),
    ]))))
}

/// Execute an easter egg.
fn execute_decorative(decorative: Decorative, rng: &mut StdRng) -> CommandResult {
    match decorative {
        Decorative::Coffee => {
            CommandResult::output(Output::special(Payload::Ascii(ASCII_COFFEE.to_string())))
        }
        Decorative::Joke => {
            let joke = JOKES[rng.gen_range(0..JOKES.len())];
            CommandResult::output(Output::special(joke))
        }
        Decorative::LaunchPortfolio => CommandResult::with_effect(
            Output::special(format!(
                "Launching portfolio tour: {} sections, sit back.",
                Section::ALL.len()
            )),
            Effect::StartTour,
        ),
        Decorative::Portfolio3d => CommandResult::output(Output::special(Payload::Links(vec![
            Link::new("3D portfolio", PORTFOLIO_3D_URL),
        ]))),
        Decorative::Exit => CommandResult::output(Output::special(
            "Nice try. There is no exit, only 'help'.",
        )),
    }
}
