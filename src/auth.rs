//! Password input for the CLI.
//!
//! A password comes from `HASHNEST_PASSWORD`, else the first line of piped
//! stdin, else a terminal prompt. Empty values fall through to the next
//! source.

use anyhow::{Result, bail};
use std::io::{self, BufRead, IsTerminal};
use zeroize::Zeroizing;

pub const PASSWORD_ENV: &str = "HASHNEST_PASSWORD";

type Secret = Zeroizing<String>;

pub fn read_password() -> Result<Secret> {
    if let Some(pw) = from_env() {
        return Ok(pw);
    }

    let stdin = io::stdin();
    let pw = if stdin.is_terminal() {
        Zeroizing::new(rpassword::prompt_password("Password: ")?)
    } else {
        read_line(&mut stdin.lock())?
    };

    if pw.is_empty() {
        bail!("no password provided; set {PASSWORD_ENV}, pipe it on stdin or use a terminal");
    }
    Ok(pw)
}

/// Reads a password twice. Piped stdin supplies both lines.
pub fn read_new_password_with_confirmation() -> Result<Secret> {
    let stdin = io::stdin();
    let (first, second) = if stdin.is_terminal() {
        (
            Zeroizing::new(rpassword::prompt_password("New password: ")?),
            Zeroizing::new(rpassword::prompt_password("Confirm password: ")?),
        )
    } else {
        let mut handle = stdin.lock();
        (read_line(&mut handle)?, read_line(&mut handle)?)
    };

    confirm(first, second)
}

fn from_env() -> Option<Secret> {
    std::env::var(PASSWORD_ENV)
        .ok()
        .filter(|pw| !pw.is_empty())
        .map(Zeroizing::new)
}

fn read_line(input: &mut impl BufRead) -> Result<Secret> {
    let mut line = Zeroizing::new(String::new());
    input.read_line(&mut line)?;
    trim_newline(&mut line);
    Ok(line)
}

fn confirm(first: Secret, second: Secret) -> Result<Secret> {
    if first.is_empty() {
        bail!("password cannot be empty");
    }
    if first != second {
        bail!("passwords do not match");
    }
    Ok(first)
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
