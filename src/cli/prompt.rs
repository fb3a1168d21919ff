//! Interactive prompt routines, threaded through a `Prompt` value instead
//! of a package-level scanner (§9's suggested re-architecture away from a
//! global `bufio.Scanner`). Grounded in
//! `examples/original_source/ward/common.go`'s `readInput`/`readPassword`/
//! `readPasswordConfirm`/`readIndex`/`selectCredential`/`findCredential`,
//! using `rpassword` for masked input in place of shelling out to a
//! terminal package.

use std::io::{self, BufRead, Write};

use crate::store::Store;
use crate::types::Credential;

pub struct Prompt<R: BufRead> {
    reader: R,
}

impl Prompt<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> Prompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn print_success(&self, message: &str) {
        println!("\u{2713} {message}");
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("\u{2717} {message}");
    }

    pub fn read_input(&mut self, prompt: &str) -> String {
        eprint!("{prompt}");
        io::stderr().flush().ok();
        let mut line = String::new();
        self.reader.read_line(&mut line).ok();
        line.trim_end_matches(['\r', '\n']).to_string()
    }

    pub fn read_password(&self, prompt: &str) -> String {
        rpassword::prompt_password(prompt).unwrap_or_default()
    }

    pub fn read_password_confirm(&self, label: &str) -> String {
        loop {
            let password = self.read_password(&format!("{label}: "));
            let confirm = self.read_password(&format!("{label} (confirm): "));
            if password != confirm {
                self.print_error("Passwords do not match.");
            } else {
                return password;
            }
        }
    }

    /// Returns `None` if the user leaves the prompt blank (meaning: keep
    /// the current password), matching `readEditPasswordConfirm`.
    pub fn read_edit_password_confirm(&self) -> Option<String> {
        loop {
            let password = self.read_password("Password (blank to keep current): ");
            if password.is_empty() {
                return None;
            }
            let confirm = self.read_password("Password (confirm): ");
            if password != confirm {
                self.print_error("Passwords do not match.");
            } else {
                return Some(password);
            }
        }
    }

    pub fn read_yes_no(&mut self, prompt: &str) -> bool {
        loop {
            let answer = self.read_input(&format!("{prompt} [y/n] ")).to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => self.print_error("Please answer yes or no."),
            }
        }
    }

    fn read_index(&mut self, low: usize, high: usize, prompt: &str) -> usize {
        loop {
            let input = self.read_input(prompt);
            match input.parse::<usize>() {
                Ok(index) if (low..=high).contains(&index) => return index,
                _ => self.print_error("Invalid choice."),
            }
        }
    }

    pub fn select_credential(&mut self, credentials: &[Credential]) -> Credential {
        for (i, credential) in credentials.iter().enumerate() {
            eprintln!("{}. {}", i + 1, credential.format());
        }
        let index = self.read_index(1, credentials.len(), "> ");
        credentials[index - 1].clone()
    }

    /// Find the one credential matching every pattern in `query`. Prompts
    /// for a disambiguating selection when more than one matches; prints
    /// an error and returns `None` when none do.
    pub fn find_credential(&mut self, store: &Store, query: &[String]) -> Option<Credential> {
        let matches = store.find(query).ok()?;
        match matches.len() {
            0 => {
                self.print_error(&format!("No credentials match \"{}\".", query.join(" ")));
                None
            }
            1 => Some(matches[0].clone()),
            _ => {
                eprintln!(
                    "Found multiple credentials matching \"{}\":",
                    query.join(" ")
                );
                Some(self.select_credential(&matches))
            }
        }
    }
}
