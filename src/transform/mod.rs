//! The six text transformations offered by the session loop.
//!
//! Every transform is a pure, total function from text to text: it always
//! terminates and never fails, whatever the input string. State lives
//! entirely in the input; applying a transform mutates nothing.

use std::fmt;

/// A text transformation selectable by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Return the content unchanged.
    Identity,
    /// Map every character to its uppercase form.
    Uppercase,
    /// Map every character to its lowercase form.
    Lowercase,
    /// Capitalize the first letter of each sentence, lowercase the rest.
    CapitalizeSentences,
    /// Prefix each line with a right-aligned 1-based line number.
    AddLineNumbers,
    /// Collapse runs of spaces and trim each line.
    RemoveExtraSpaces,
}

impl Transform {
    /// All transforms, in menu order. Indices 0-5 are the interactive choices.
    pub const ALL: [Transform; 6] = [
        Transform::Identity,
        Transform::Uppercase,
        Transform::Lowercase,
        Transform::CapitalizeSentences,
        Transform::AddLineNumbers,
        Transform::RemoveExtraSpaces,
    ];

    /// Human-readable label shown in the interactive menu.
    pub fn label(&self) -> &'static str {
        match self {
            Transform::Identity => "Keep original content",
            Transform::Uppercase => "Convert to uppercase",
            Transform::Lowercase => "Convert to lowercase",
            Transform::CapitalizeSentences => "Capitalize sentences",
            Transform::AddLineNumbers => "Add line numbers",
            Transform::RemoveExtraSpaces => "Remove extra spaces",
        }
    }

    /// Stable name used for the `--transform` flag and the `list` subcommand.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Identity => "identity",
            Transform::Uppercase => "uppercase",
            Transform::Lowercase => "lowercase",
            Transform::CapitalizeSentences => "capitalize",
            Transform::AddLineNumbers => "line-numbers",
            Transform::RemoveExtraSpaces => "collapse-spaces",
        }
    }

    /// One-line description for the transform catalogue.
    pub fn description(&self) -> &'static str {
        match self {
            Transform::Identity => "Write the content through unchanged",
            Transform::Uppercase => "Uppercase every character (Unicode case mapping)",
            Transform::Lowercase => "Lowercase every character (Unicode case mapping)",
            Transform::CapitalizeSentences => {
                "Uppercase the first letter of each sentence, lowercase the rest"
            }
            Transform::AddLineNumbers => "Prefix each line with a right-aligned line number",
            Transform::RemoveExtraSpaces => "Collapse repeated spaces and trim each line",
        }
    }

    /// Look up a transform by menu index (0-5).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Look up a transform by its flag name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|t| t.name() == name).copied()
    }

    /// Apply the transform to `text`, producing the output content.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Transform::Identity => text.to_string(),
            Transform::Uppercase => text.to_uppercase(),
            Transform::Lowercase => text.to_lowercase(),
            Transform::CapitalizeSentences => capitalize_sentences(text),
            Transform::AddLineNumbers => add_line_numbers(text),
            Transform::RemoveExtraSpaces => remove_extra_spaces(text),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capitalize the first letter of each sentence.
///
/// A sentence boundary is a `.`, `!`, or `?` followed by whitespace; the
/// whitespace run (newlines included) is consumed and sentences are rejoined
/// with a single space. Each sentence fragment is "capitalized": first
/// character uppercased, every following character lowercased. This flattens
/// mid-sentence capitals such as acronyms; that is the documented behavior,
/// not a bug.
fn capitalize_sentences(text: &str) -> String {
    let mut sentences: Vec<String> = Vec::new();
    let mut current = String::new();
    // True when the text ended right after a boundary, leaving a trailing
    // empty fragment (so "hi! " keeps its trailing space after rejoining).
    let mut trailing_fragment = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            sentences.push(std::mem::take(&mut current));
            trailing_fragment = true;
        }
    }
    if !current.is_empty() || trailing_fragment {
        sentences.push(current);
    }

    sentences
        .iter()
        .map(|s| capitalize(s))
        .collect::<Vec<_>>()
        .join(" ")
}

/// First character uppercased, all remaining characters lowercased.
fn capitalize(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Prefix each line with a right-aligned 3-width 1-based number and ". ".
///
/// Splitting on `\n` means a trailing newline produces a final empty line,
/// which is numbered like any other.
fn add_line_numbers(text: &str) -> String {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| format!("{:>3}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse runs of the space character into one, then trim each line.
///
/// Only spaces are collapsed; tabs survive inside a line but are trimmed at
/// line boundaries along with any other whitespace.
fn remove_extra_spaces(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut prev_space = false;
    for c in text.chars() {
        if c == ' ' {
            if !prev_space {
                collapsed.push(c);
            }
            prev_space = true;
        } else {
            collapsed.push(c);
            prev_space = false;
        }
    }

    collapsed
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_flattens_interior_capitals() {
        assert_eq!(capitalize("this is a TEST!"), "This is a test!");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }

    #[test]
    fn sentence_split_consumes_whitespace_run() {
        assert_eq!(
            capitalize_sentences("one.  \n two!   three?"),
            "One. Two! Three?"
        );
    }

    #[test]
    fn sentence_split_keeps_trailing_empty_fragment() {
        // Boundary at end of text leaves an empty fragment, so the joined
        // result keeps a single trailing space.
        assert_eq!(capitalize_sentences("done. "), "Done. ");
    }

    #[test]
    fn no_split_without_following_whitespace() {
        assert_eq!(capitalize_sentences("v1.2 is out"), "V1.2 is out");
    }
}
