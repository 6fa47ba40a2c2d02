//! Definition-list markup for parsed transcripts.

use super::{ChatLine, ChatTranscript};
use crate::html::{esc_attr, esc_html, sanitize_title_with_dashes};

/// Renders a transcript as `<dl class="chat">` markup.
///
/// Each line becomes a `<dt>`/`<dd>` pair on one line of markup. The author
/// slug is added as a `chat-author-{slug}` class and the time is shown in
/// brackets. Messages are inserted as-is since the parser already produced
/// them as HTML. Stanzas are separated by a blank line.
///
/// Stripping the markup leaves `[time] Author: message` lines, so parsing
/// the stripped output again gives back the same transcript. An empty
/// transcript renders as an empty string.
pub fn render_chat(transcript: &ChatTranscript) -> String {
    if transcript.is_empty() {
        return String::new();
    }

    let mut output = String::from("<dl class=\"chat\">");
    for (index, stanza) in transcript.stanzas.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        for line in stanza {
            push_line(&mut output, line);
        }
    }
    output.push_str("</dl><!-- .chat -->");
    output
}

fn push_line(output: &mut String, line: &ChatLine) {
    let time = if line.has_time() {
        format!(
            r#"<time class="chat-timestamp">[{}]</time>"#,
            esc_html(&line.time)
        )
    } else {
        String::new()
    };

    output.push_str(&format!(
        "<dt class=\"chat-author chat-author-{slug} vcard\">{time} <cite class=\"fn\">{author}</cite>: </dt><dd class=\"chat-text\">{message}</dd>\n",
        slug = esc_attr(&sanitize_title_with_dashes(&line.author)),
        author = esc_html(&line.author),
        message = line.message,
    ));
}
