use std::io::{self, Write};

/// Prompts and reads one line, `None` once stdin is closed.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    Define(&'a str),
}

/// Splits a line into a command. Unknown first words make the whole line the query.
pub fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    let mut parts = line.splitn(2, char::is_whitespace);
    match parts.next().unwrap_or_default() {
        "exit" | "leave" | "quit" | "e" | "q" | "l" => Command::Exit,
        "define" | "find" => Command::Define(parts.next().unwrap_or_default().trim()),
        _ => Command::Define(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_exit_words() {
        for line in ["exit", "quit\n", "  q  ", "leave", "e", "l"] {
            assert_eq!(parse_command(line), Command::Exit, "{line:?}");
        }
    }

    #[test]
    fn define_prefix_is_stripped() {
        assert_eq!(parse_command("define quit"), Command::Define("quit"));
        assert_eq!(parse_command("find   ice cream \n"), Command::Define("ice cream"));
        assert_eq!(parse_command("define"), Command::Define(""));
    }

    #[test]
    fn anything_else_is_the_query() {
        assert_eq!(parse_command("serendipity\r\n"), Command::Define("serendipity"));
        assert_eq!(parse_command("ice cream"), Command::Define("ice cream"));
        assert_eq!(parse_command("\n"), Command::Define(""));
    }
}
