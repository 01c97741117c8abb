//! Password hashing for user directory entries.
//!
//! # Usage
//!
//! ```bash
//! read -rs PW && echo "$PW" | rd-cli hash-password
//! ```

use std::io::BufRead;

use recruitdesk_portal::services::hash_password;
use secrecy::SecretString;

use super::CliError;

/// Read one password line from `input` and return its Argon2id PHC string.
pub fn hash_from_reader(input: &mut impl BufRead) -> Result<String, CliError> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let password = SecretString::from(line.trim_end_matches(['\r', '\n']).to_string());
    Ok(hash_password(&password)?)
}
