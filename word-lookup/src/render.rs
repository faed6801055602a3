use std::io::{self, Write};

use chrono::Datelike;
use dictionary::WordMeaning;

use crate::state::LookupState;

pub fn print_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Dictionary App")?;
    writeln!(out, "Powered by Free Dictionary API (https://dictionaryapi.dev/)")?;
    writeln!(out, "Type a word to look it up, 'define <word>' to look up a command name, 'quit' to leave.")
}

pub fn print_footer(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "© {} Dictionary App.", chrono::Local::now().year())
}

pub fn print_state(out: &mut impl Write, word: &str, state: &LookupState) -> io::Result<()> {
    match state {
        LookupState::Idle => Ok(()),
        LookupState::Loading => writeln!(out, "Searching..."),
        LookupState::Failure(error) => writeln!(out, "{error}"),
        LookupState::Success(meanings) => print_definition(out, word, meanings),
    }
}

fn print_definition(out: &mut impl Write, word: &str, meanings: &[WordMeaning]) -> io::Result<()> {
    writeln!(out, "Showing definition for '{word}':")?;
    for meaning in meanings {
        writeln!(out, "    {}:", meaning.part_of_speech)?;
        for definition in &meaning.definitions {
            writeln!(out, "      • {}", definition.definition)?;
            if let Some(example) = &definition.example {
                writeln!(out, "          example: {example}")?;
            }
            if !definition.synonyms.is_empty() {
                writeln!(out, "          synonyms: {}", definition.synonyms.join(", "))?;
            }
            if !definition.antonyms.is_empty() {
                writeln!(out, "          antonyms: {}", definition.antonyms.join(", "))?;
            }
        }
        if !meaning.synonyms.is_empty() {
            writeln!(out, "      synonyms: {}", meaning.synonyms.join(", "))?;
        }
        if !meaning.antonyms.is_empty() {
            writeln!(out, "      antonyms: {}", meaning.antonyms.join(", "))?;
        }
    }
    Ok(())
}
