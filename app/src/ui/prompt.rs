use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Line-oriented terminal input.
pub struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Prints `label: ` and reads one trimmed line. EOF reads as an empty
    /// line error so callers can wind down.
    pub async fn line(&mut self, label: &str) -> std::io::Result<String> {
        print!("{label}: ");
        std::io::stdout().flush()?;
        match self.lines.next_line().await? {
            Some(line) => Ok(line.trim().to_owned()),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "stdin closed",
            )),
        }
    }

    /// Like `line`, but an empty entry keeps the current value. This is how
    /// a rejected form stays editable instead of being retyped.
    pub async fn line_with_default(&mut self, label: &str, current: &str) -> std::io::Result<String> {
        let shown = if current.is_empty() {
            label.to_owned()
        } else {
            format!("{label} [{current}]")
        };
        let entered = self.line(&shown).await?;
        Ok(if entered.is_empty() {
            current.to_owned()
        } else {
            entered
        })
    }

    /// Numbered multi-select; accepts comma-separated indices and ignores
    /// anything out of range.
    pub async fn multi_select(
        &mut self,
        label: &str,
        options: &[&str],
    ) -> std::io::Result<Vec<String>> {
        println!("{label}:");
        for (index, option) in options.iter().enumerate() {
            println!("  {}. {option}", index + 1);
        }
        let entered = self.line("Choose numbers, comma-separated").await?;
        Ok(parse_selection(&entered, options))
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_selection(entered: &str, options: &[&str]) -> Vec<String> {
    let mut picked = Vec::new();
    for token in entered.split(',') {
        let Ok(number) = token.trim().parse::<usize>() else {
            continue;
        };
        if (1..=options.len()).contains(&number) {
            let choice = options[number - 1].to_owned();
            if !picked.contains(&choice) {
                picked.push(choice);
            }
        }
    }
    picked
}
