//! Extractors that consult the item's collaborators: media directives,
//! galleries and oEmbed meta.

use crate::render::{MediaKind, Renderer};
use crate::shortcode::find_shortcode;

use super::markup;

/// Renders the first `[kind …]` directive in `content` through `renderer`.
///
/// Returns `None` when there is no such directive or it renders to nothing.
pub fn media(kind: MediaKind, content: &str, renderer: &dyn Renderer) -> Option<String> {
    let shortcode = find_shortcode(content, kind.tag())?;
    let rendered = renderer.render_media(kind, &shortcode.attrs);
    (!rendered.is_empty()).then_some(rendered)
}

/// First meta value whose key contains "oembed".
pub fn oembed_meta(meta: &[(String, Vec<String>)]) -> Option<String> {
    meta.iter()
        .find(|(key, _)| key.contains("oembed"))
        .and_then(|(_, values)| values.first().cloned())
}

/// oEmbed meta, else the first iframe, else the content unchanged.
pub fn embed(content: &str, meta: &[(String, Vec<String>)]) -> String {
    if let Some(cached) = oembed_meta(meta) {
        return cached;
    }
    markup::iframe(content).unwrap_or(content).to_string()
}

/// Video directive, falling through to [`embed`].
pub fn video(
    content: &str,
    meta: &[(String, Vec<String>)],
    renderer: &dyn Renderer,
) -> String {
    media(MediaKind::Video, content, renderer).unwrap_or_else(|| embed(content, meta))
}

/// Audio directive, falling through to [`video`].
///
/// The audio → video → embed cascade mirrors the historical behavior of post
/// style formatting. It most likely started as a missing `break` but themes
/// depend on it, so it is kept.
pub fn audio(
    content: &str,
    meta: &[(String, Vec<String>)],
    renderer: &dyn Renderer,
) -> String {
    media(MediaKind::Audio, content, renderer).unwrap_or_else(|| video(content, meta, renderer))
}

/// Playlist directive, or the content unchanged. No fallthrough.
pub fn playlist(content: &str, renderer: &dyn Renderer) -> String {
    media(MediaKind::Playlist, content, renderer).unwrap_or_else(|| content.to_string())
}

/// First gallery, or the content unchanged.
pub fn gallery(content: &str, galleries: &[String]) -> String {
    galleries
        .first()
        .cloned()
        .unwrap_or_else(|| content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::BasicRenderer;

    fn meta(pairs: &[(&str, &str)]) -> Vec<(String, Vec<String>)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), vec![v.to_string()]))
            .collect()
    }

    #[test]
    fn test_audio_found() {
        let html = audio(r#"x [audio src="a.mp3"] y"#, &[], &BasicRenderer);
        assert!(html.starts_with("<audio"));
    }

    #[test]
    fn test_audio_falls_through_to_video() {
        let html = audio(r#"[video src="v.mp4"]"#, &[], &BasicRenderer);
        assert!(html.starts_with("<video"));
    }

    #[test]
    fn test_audio_falls_through_to_iframe() {
        let content = r#"Hear this <iframe src="https://sound.example"></iframe>"#;
        assert_eq!(
            audio(content, &[], &BasicRenderer),
            r#"<iframe src="https://sound.example"></iframe>"#
        );
    }

    #[test]
    fn test_audio_falls_through_to_unchanged() {
        assert_eq!(audio("plain", &[], &BasicRenderer), "plain");
    }

    #[test]
    fn test_audio_without_source_falls_through() {
        let html = audio(r#"[audio] [video src="v.mp4"]"#, &[], &BasicRenderer);
        assert!(html.starts_with("<video"));
    }

    #[test]
    fn test_embed_prefers_oembed_meta() {
        let meta = meta(&[("_edit_lock", "1"), ("_oembed_123", "<blockquote>tweet</blockquote>")]);
        let content = "<iframe></iframe>";
        assert_eq!(embed(content, &meta), "<blockquote>tweet</blockquote>");
    }

    #[test]
    fn test_embed_iframe_then_unchanged() {
        assert_eq!(embed("a <iframe>x</iframe> b", &[]), "<iframe>x</iframe>");
        assert_eq!(embed("no frame", &[]), "no frame");
    }

    #[test]
    fn test_playlist_no_fallthrough() {
        assert_eq!(playlist("<iframe></iframe>", &BasicRenderer), "<iframe></iframe>");
        let html = playlist(r#"[playlist ids="1,2"]"#, &BasicRenderer);
        assert!(html.contains("wp-playlist"));
    }

    #[test]
    fn test_gallery() {
        let galleries = vec!["<div class=\"gallery\">1</div>".to_string(), "2".to_string()];
        assert_eq!(gallery("raw", &galleries), "<div class=\"gallery\">1</div>");
        assert_eq!(gallery("raw", &[]), "raw");
    }
}
