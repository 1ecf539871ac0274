use crate::error::AppError;
use crate::identity::RiotId;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-based questions on a reader/writer pair (stdin/stdout in the binary).
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Prompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Prints `question` and returns the trimmed answer. EOF reads as empty.
    pub fn ask(&mut self, question: &str) -> Result<String, AppError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    pub fn api_key(&mut self) -> Result<String, AppError> {
        self.ask("Riot API key: ")
    }

    pub fn riot_id(&mut self) -> Result<RiotId, AppError> {
        self.ask("Riot ID (gameName#tagLine), e.g. MERTcimek#yiyin: ")?
            .parse()
    }

    /// Blank, zero or non-numeric answers fall back to `default`.
    pub fn match_count(&mut self, default: usize) -> Result<usize, AppError> {
        let answer = self.ask(&format!(
            "How many recent matches to scan? [default {}]: ",
            default
        ))?;

        Ok(answer
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .unwrap_or(default))
    }

    /// `y` / `yes` in any case means yes; anything else means no.
    pub fn confirm(&mut self, question: &str) -> Result<bool, AppError> {
        let answer = self.ask(&format!("{} [y/N]: ", question))?.to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

#[cfg(test)]
impl<R> Prompter<R, Vec<u8>> {
    /// Everything printed so far.
    pub fn written(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn asks_and_trims() {
        let mut p = prompter("  RGAPI-abc  \n");
        assert_eq!(p.api_key().unwrap(), "RGAPI-abc");
        assert_eq!(String::from_utf8(p.output).unwrap(), "Riot API key: ");
    }

    #[test]
    fn reads_riot_id() {
        let mut p = prompter("Faker#KR1\n");
        assert_eq!(
            p.riot_id().unwrap(),
            RiotId {
                game_name: "Faker".to_string(),
                tag_line: "KR1".to_string()
            }
        );
    }

    #[test]
    fn bad_riot_id_is_rejected() {
        let mut p = prompter("Faker\n");
        assert!(matches!(p.riot_id(), Err(AppError::InvalidRiotId)));
    }

    #[test]
    fn match_count_defaults() {
        assert_eq!(prompter("\n").match_count(100).unwrap(), 100);
        assert_eq!(prompter("lots\n").match_count(100).unwrap(), 100);
        assert_eq!(prompter("0\n").match_count(100).unwrap(), 100);
        assert_eq!(prompter("").match_count(100).unwrap(), 100);
        assert_eq!(prompter("35\n").match_count(100).unwrap(), 35);
    }

    #[test]
    fn confirm_only_accepts_yes() {
        assert!(prompter("y\n").confirm("Write CSV?").unwrap());
        assert!(prompter("YES\n").confirm("Write CSV?").unwrap());
        assert!(!prompter("\n").confirm("Write CSV?").unwrap());
        assert!(!prompter("nope\n").confirm("Write CSV?").unwrap());
    }
}
