//! Line walker that turns chat-shaped text into stanzas.
//!
//! Content is interpreted as a transcript optionally followed by commentary:
//! once a blank line is followed by a line the dialect's delimiter doesn't
//! match, the rest of the content is ignored.

use regex::Captures;

use super::{ChatDialects, ChatLine, ChatTranscript, Stanza};
use crate::html::{make_clickable, strip_tags};

/// Parses `content` as a chat transcript.
///
/// Returns an empty transcript when the content is empty or no dialect's
/// newline pattern matches it.
pub fn parse_chat(content: &str, dialects: &ChatDialects) -> ChatTranscript {
    let stripped = strip_tags(content.trim());
    let text = stripped.trim();
    if text.is_empty() {
        return ChatTranscript::default();
    }

    let Some(dialect) = dialects.select(text) else {
        tracing::debug!("no chat dialect matched; content is not a transcript");
        return ChatTranscript::default();
    };
    tracing::debug!(dialect = dialect.name(), "parsing chat transcript");

    let linked = make_clickable(text);
    // Neighbour checks look at the untrimmed line: a whitespace-only line is
    // blank itself but does not count as a blank neighbour.
    let raw: Vec<&str> = linked
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let mut builder = TranscriptBuilder::default();

    for (index, line) in raw.iter().map(|line| line.trim()).enumerate() {
        if line.is_empty() {
            if builder.found {
                builder.close_stanza();
                let next = raw.get(index + 1).copied().unwrap_or_default();
                if !next.is_empty() && !dialect.delimiter().is_match(next) {
                    break;
                }
            }
            continue;
        }

        if let Some(caps) = dialect.newline().captures(line) {
            if let Some(speaker) = Speaker::from_captures(&caps) {
                builder.found = true;
                let isolated = is_empty_at(&raw, index.checked_sub(1))
                    && is_empty_at(&raw, Some(index + 1));

                if speaker.accepted(isolated) {
                    builder.start_turn(speaker.time, speaker.author, remove_prefix(line, &caps));
                    continue;
                }
            }
        }

        builder.push_fragment(line);
    }

    builder.finish()
}

/// Author and optional time captured from a newline match.
struct Speaker<'a> {
    time: &'a str,
    author: &'a str,
    /// A second capture group matched, so the author position is unambiguous.
    definite: bool,
}

impl<'a> Speaker<'a> {
    /// Group 2 is the author whenever it matched, with group 1 as an
    /// optional time. Otherwise group 1 is the author.
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        match (caps.get(1), caps.get(2)) {
            (time, Some(author)) if !author.as_str().is_empty() => Some(Self {
                time: time.map_or("", |m| m.as_str()),
                author: author.as_str(),
                definite: true,
            }),
            (Some(author), _) => Some(Self {
                time: "",
                author: author.as_str(),
                definite: false,
            }),
            (None, _) => None,
        }
    }

    /// Usernames have no whitespace; a multi-word name is only trusted as a
    /// script-style cue on a line of its own.
    fn accepted(&self, isolated: bool) -> bool {
        let has_ws = self.author.contains([' ', '\t', '\r', '\n']);
        self.definite || !has_ws || isolated
    }
}

fn is_empty_at(lines: &[&str], index: Option<usize>) -> bool {
    index
        .and_then(|i| lines.get(i))
        .is_none_or(|line| line.is_empty())
}

fn remove_prefix(line: &str, caps: &Captures<'_>) -> String {
    let Some(m) = caps.get(0) else {
        return line.to_string();
    };
    let mut rest = String::with_capacity(line.len());
    rest.push_str(&line[..m.start()]);
    rest.push_str(&line[m.end()..]);
    rest.trim().to_string()
}

#[derive(Default)]
struct TranscriptBuilder {
    found: bool,
    author: String,
    time: String,
    fragments: Vec<String>,
    stanza: Stanza,
    stanzas: Vec<Stanza>,
}

impl TranscriptBuilder {
    fn start_turn(&mut self, time: &str, author: &str, first_fragment: String) {
        self.emit_turn();
        self.time = time.to_string();
        self.author = author.to_string();
        self.fragments.push(first_fragment);
    }

    /// Lines before the first accepted author are preamble and dropped.
    fn push_fragment(&mut self, line: &str) {
        if !self.author.is_empty() {
            self.fragments.push(line.to_string());
        }
    }

    fn emit_turn(&mut self) {
        let fragments = std::mem::take(&mut self.fragments);
        if self.author.is_empty() {
            return;
        }
        self.stanza.push(ChatLine {
            time: std::mem::take(&mut self.time),
            author: std::mem::take(&mut self.author),
            message: fragments.join(" ").trim().to_string(),
        });
    }

    fn close_stanza(&mut self) {
        self.emit_turn();
        self.author.clear();
        self.time.clear();
        if !self.stanza.is_empty() {
            self.stanzas.push(std::mem::take(&mut self.stanza));
        }
    }

    fn finish(mut self) -> ChatTranscript {
        self.close_stanza();
        ChatTranscript::new(self.stanzas)
    }
}
