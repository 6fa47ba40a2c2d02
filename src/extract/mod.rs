//! Per-style content extractors.
//!
//! | Style | Result |
//! |-------|--------|
//! | quote | first `<blockquote>`, else the whole content |
//! | link-list | first `<ul>`/`<ol>`, else empty |
//! | gallery | first attached gallery, else unchanged |
//! | playlist | first `[playlist]` rendered, else unchanged |
//! | audio | first `[audio]` rendered, else as video |
//! | video | first `[video]` rendered, else as embed |
//! | embed | oEmbed meta, else first `<iframe>`, else unchanged |
//! | link | first `<a>`, else unchanged |
//! | chat | rendered transcript, else unchanged |
//! | anything else | unchanged |

mod markup;
mod media;

pub use markup::{anchor, iframe, link_list, quote, quote_figure};
pub use media::{audio, embed, gallery, media, oembed_meta, playlist, video};

use crate::chat::{ChatDialects, parse_chat, render_chat};
use crate::render::Renderer;
use crate::repository::{ContentRepository, ItemId};
use crate::style::StyleKey;

/// Collaborators an extractor may consult for the item being formatted.
pub struct ExtractContext<'a> {
    pub item: ItemId,
    pub repository: &'a dyn ContentRepository,
    pub renderer: &'a dyn Renderer,
    pub dialects: &'a ChatDialects,
}

/// Runs the extractor for `style` over `content`.
pub fn extract(style: &StyleKey, content: &str, ctx: &ExtractContext<'_>) -> String {
    match style {
        StyleKey::Chat => {
            let transcript = parse_chat(content, ctx.dialects);
            if transcript.is_empty() {
                content.to_string()
            } else {
                render_chat(&transcript)
            }
        }
        StyleKey::Quote => quote(content),
        StyleKey::LinkList => link_list(content),
        StyleKey::Gallery => gallery(content, &ctx.repository.galleries(ctx.item)),
        StyleKey::Playlist => playlist(content, ctx.renderer),
        StyleKey::Audio => audio(content, &ctx.repository.meta(ctx.item), ctx.renderer),
        StyleKey::Video => video(content, &ctx.repository.meta(ctx.item), ctx.renderer),
        StyleKey::Embed => embed(content, &ctx.repository.meta(ctx.item)),
        StyleKey::Link => anchor(content).unwrap_or(content).to_string(),
        StyleKey::NoPhoto
        | StyleKey::Aside
        | StyleKey::Image
        | StyleKey::Standard
        | StyleKey::Custom(_) => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::BasicRenderer;
    use crate::repository::{ContentItem, MemoryRepository};

    fn run(style: StyleKey, content: &str, repo: &MemoryRepository) -> String {
        let dialects = ChatDialects::with_builtins();
        let ctx = ExtractContext {
            item: 1,
            repository: repo,
            renderer: &BasicRenderer,
            dialects: &dialects,
        };
        extract(&style, content, &ctx)
    }

    #[test]
    fn test_passthrough_styles() {
        let repo = MemoryRepository::new();
        for style in [
            StyleKey::Aside,
            StyleKey::NoPhoto,
            StyleKey::Image,
            StyleKey::Standard,
            StyleKey::Custom("status".into()),
        ] {
            assert_eq!(run(style, "<p>body</p>", &repo), "<p>body</p>");
        }
    }

    #[test]
    fn test_chat_renders_or_passes_through() {
        let repo = MemoryRepository::new();
        let html = run(StyleKey::Chat, "Scott: hi", &repo);
        assert!(html.starts_with("<dl class=\"chat\">"));
        assert_eq!(run(StyleKey::Chat, "no chat here", &repo), "no chat here");
    }

    #[test]
    fn test_gallery_uses_repository() {
        let mut repo = MemoryRepository::new();
        repo.insert(ContentItem::new(1, ""));
        repo.add_gallery(1, "<div class=\"gallery\"></div>");
        assert_eq!(run(StyleKey::Gallery, "raw", &repo), "<div class=\"gallery\"></div>");
    }

    #[test]
    fn test_video_uses_oembed_meta_on_fallthrough() {
        let mut repo = MemoryRepository::new();
        repo.add_meta(1, "_oembed_abc", "<iframe src=\"cached\"></iframe>");
        assert_eq!(
            run(StyleKey::Video, "no directive", &repo),
            "<iframe src=\"cached\"></iframe>"
        );
    }

    #[test]
    fn test_link_and_link_list() {
        let repo = MemoryRepository::new();
        assert_eq!(
            run(StyleKey::Link, "go <a href=\"x\">x</a>", &repo),
            "<a href=\"x\">x</a>"
        );
        assert_eq!(run(StyleKey::Link, "no link", &repo), "no link");
        assert_eq!(run(StyleKey::LinkList, "no list", &repo), "");
    }
}
