// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The interactive menu loop.
//!
//! A [`Session`] owns the namespace and the current position and reads one
//! answer per line. It is generic over its input and output so tests can
//! drive it from memory.

use std::io::{BufRead, Write};

use anyhow::Result;
use diagnostics::{log_debug, log_info};
use nametree::{EntryId, EntryKind, Error, Namespace};

/// Menu entries, numbered as they are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddDirectory,
    AddFile,
    Delete,
    List,
    ChangeDirectory,
    Exit,
    ShowTree,
    Export,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::AddDirectory,
        MenuChoice::AddFile,
        MenuChoice::Delete,
        MenuChoice::List,
        MenuChoice::ChangeDirectory,
        MenuChoice::Exit,
        MenuChoice::ShowTree,
        MenuChoice::Export,
    ];

    pub fn from_number(n: i64) -> Option<Self> {
        usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddDirectory => "Add Directory",
            MenuChoice::AddFile => "Add File",
            MenuChoice::Delete => "Delete",
            MenuChoice::List => "List",
            MenuChoice::ChangeDirectory => "Change Directory",
            MenuChoice::Exit => "Exit",
            MenuChoice::ShowTree => "Show Tree",
            MenuChoice::Export => "Export JSON",
        }
    }
}

pub struct Session<R, W> {
    ns: Namespace,
    current: EntryId,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(ns: Namespace, input: R, output: W) -> Self {
        let current = ns.root();
        Self {
            ns,
            current,
            input,
            output,
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.ns
    }

    pub fn current(&self) -> EntryId {
        self.current
    }

    /// Runs until Exit or end of input, then tears the namespace down.
    ///
    /// Returns the number of entries destroyed at shutdown.
    pub fn run(mut self) -> Result<usize> {
        log_info!("Session started");
        while let Some(choice) = self.prompt_menu()? {
            match choice {
                Some(MenuChoice::Exit) => break,
                Some(choice) => self.dispatch(choice)?,
                None => writeln!(self.output, "Invalid option.")?,
            }
        }
        self.output.flush()?;
        Ok(self.ns.destroy())
    }

    /// Shows the menu and reads an answer; `None` at end of input
    fn prompt_menu(&mut self) -> Result<Option<Option<MenuChoice>>> {
        let name = self.current_name()?;
        writeln!(self.output, "Current directory: {}", name)?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;

        Ok(self
            .read_line()?
            .map(|line| line.parse::<i64>().ok().and_then(MenuChoice::from_number)))
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::AddDirectory => self.add(EntryKind::Directory),
            MenuChoice::AddFile => self.add(EntryKind::File),
            MenuChoice::Delete => self.delete(),
            MenuChoice::List => self.list(),
            MenuChoice::ChangeDirectory => self.change_directory(),
            MenuChoice::ShowTree => self.show_tree(),
            MenuChoice::Export => self.export(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn add(&mut self, kind: EntryKind) -> Result<()> {
        let current_name = self.current_name()?;
        let prompt = format!("Enter {} name to add under {}: ", kind, current_name);
        let Some(name) = self.ask(&prompt)? else {
            return Ok(());
        };

        match self.ns.insert(self.current, &name, kind) {
            Ok(_) => Ok(()),
            Err(e) => self.report(&e),
        }
    }

    fn delete(&mut self) -> Result<()> {
        let current_name = self.current_name()?;
        let prompt = format!("Enter name to delete from {}: ", current_name);
        let Some(name) = self.ask(&prompt)? else {
            return Ok(());
        };

        match self.ns.remove(self.current, &name) {
            Ok(_) => Ok(()),
            Err(e) => self.report(&e),
        }
    }

    fn list(&mut self) -> Result<()> {
        let current_name = self.current_name()?;
        writeln!(self.output, "Contents of {}:", current_name)?;
        for listing in self.ns.list(self.current)? {
            writeln!(self.output, "{}", listing)?;
        }
        Ok(())
    }

    fn change_directory(&mut self) -> Result<()> {
        let choices = match self.ns.navigation_choices(self.current) {
            Ok(choices) => choices,
            Err(e) => return self.report(&e),
        };

        if choices.is_empty() {
            writeln!(self.output, "No directories found.")?;
            return Ok(());
        }

        writeln!(self.output, "Available directories:")?;
        for (n, id) in choices.iter() {
            writeln!(self.output, "{}. {}", n, self.ns.get(id)?.name())?;
        }
        let answer = self.ask("Select a directory by number (0 to stay in current): ")?;
        let choice = answer.and_then(|a| a.parse::<i64>().ok()).unwrap_or(0);

        self.current = choices.select_or_stay(choice);
        let path = self.ns.display_path(self.current)?;
        log_debug!("Now in {path}", path: path);
        Ok(())
    }

    fn show_tree(&mut self) -> Result<()> {
        let rendered = self.ns.render_tree(self.current)?;
        write!(self.output, "{}", rendered)?;
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        let snapshot = self.ns.snapshot()?;
        writeln!(self.output, "{}", serde_json::to_string_pretty(&snapshot)?)?;
        Ok(())
    }

    // Conflicts are warnings; everything else, misses included, is an error
    fn report(&mut self, err: &Error) -> Result<()> {
        let label = if err.is_warning() { "Warning" } else { "Error" };
        writeln!(self.output, "{}: {}.", label, err)?;
        Ok(())
    }

    fn current_name(&self) -> Result<String> {
        Ok(self.ns.get(self.current)?.name().to_string())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::AddDirectory));
        assert_eq!(MenuChoice::from_number(6), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(8), Some(MenuChoice::Export));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(9), None);
        assert_eq!(MenuChoice::from_number(-3), None);
    }
}
