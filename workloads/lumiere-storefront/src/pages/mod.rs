//! Page assembly: request parsing into views, and the streamed page order.

mod collection;
mod font;
mod home;

pub use collection::CollectionView;
pub use font::{apply_font, safe_return, FontRedirect};
pub use home::{requested_transition, HomeView};

use std::fmt::Display;

use futures::Sink;
use lumiere_sdk::lumiere_core::{RequestContext, ThemeSettings, WorkloadError};
use lumiere_sdk::lumiere_streaming::{Shell, StreamingSink};
use lumiere_sdk::lumiere_theme::{
    CookieStore, DocumentStyle, FontCatalog, FontPreference, FontProvider, ThemeError,
};

/// Font preference backed by the request's cookies.
pub type CookiePreference = FontPreference<'static, CookieStore, DocumentStyle>;

/// Provider scope for one request.
pub type RequestFontProvider = FontProvider<'static, CookieStore, DocumentStyle>;

/// Restore the visitor's font preference from the request cookie.
pub fn font_preference(
    ctx: &RequestContext,
    theme: &ThemeSettings,
) -> Result<CookiePreference, ThemeError> {
    let mut store = CookieStore::new(theme.cookie_max_age_secs);
    if let Some(value) = ctx.cookie(&theme.preference_key) {
        store = store.with_cookie(&theme.preference_key, &value);
    }
    FontPreference::initialize(
        FontCatalog::standard(),
        store,
        DocumentStyle::new(),
        theme.preference_key.as_str(),
    )
}

/// A fully rendered page, ready to stream.
pub struct Page {
    pub status: u16,
    pub shell: Shell,
    /// Named sections, in send order.
    pub sections: Vec<(&'static str, String)>,
    /// `Set-Cookie` values for the response head.
    pub set_cookies: Vec<String>,
}

impl Page {
    pub fn new(status: u16, shell: Shell) -> Self {
        Self {
            status,
            shell,
            sections: Vec::new(),
            set_cookies: Vec::new(),
        }
    }

    pub fn with_section(mut self, name: &'static str, html: String) -> Self {
        self.sections.push((name, html));
        self
    }

    pub fn with_set_cookies(mut self, cookies: Vec<String>) -> Self {
        self.set_cookies = cookies;
        self
    }
}

/// Stream a page: shell, each section, then the shell closing.
pub async fn write_page<S, E>(
    sink: &mut StreamingSink<S, E>,
    page: &Page,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    sink.send_shell(&page.shell.render_opening()).await?;
    for (name, html) in &page.sections {
        sink.send_section(name, html).await?;
    }
    sink.finish(&page.shell.render_closing()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use lumiere_sdk::lumiere_core::{Method, TimingContext};
    use lumiere_sdk::lumiere_streaming::HeadContent;

    #[test]
    fn test_preference_from_cookie() {
        let theme = ThemeSettings::default();
        let ctx = RequestContext::new(Method::Get, "/")
            .with_header("cookie", "lumiere.selected-font=cinzel");
        let mut pref = font_preference(&ctx, &theme).unwrap();
        assert_eq!(pref.current().id, "cinzel");
        // Already persisted: nothing to send back.
        assert!(pref.store_mut().take_set_cookie_headers().is_empty());
    }

    #[test]
    fn test_preference_without_cookie_persists_default() {
        let theme = ThemeSettings::default();
        let ctx = RequestContext::new(Method::Get, "/");
        let mut pref = font_preference(&ctx, &theme).unwrap();
        assert_eq!(pref.current().id, "playfair-inter");
        let cookies = pref.store_mut().take_set_cookie_headers();
        assert_eq!(cookies.len(), 1);
        assert!(cookies[0].starts_with("lumiere.selected-font=playfair-inter;"));
    }

    #[test]
    fn test_bad_preference_key_is_store_error() {
        let theme = ThemeSettings {
            preference_key: "selected font".to_string(),
            ..ThemeSettings::default()
        };
        let ctx = RequestContext::new(Method::Get, "/");
        assert!(matches!(font_preference(&ctx, &theme), Err(ThemeError::Store(_))));
    }

    #[test]
    fn test_write_page_order() {
        let shell = Shell::new(HeadContent::new("Test"));
        let page = Page::new(200, shell)
            .with_section("header", "<header></header>".to_string())
            .with_section("hero", "<section></section>".to_string());

        let mut sink: StreamingSink<Vec<Vec<u8>>, std::convert::Infallible> =
            StreamingSink::new(Vec::new(), TimingContext::new());
        block_on(write_page(&mut sink, &page)).unwrap();

        assert_eq!(sink.sections_sent(), ["header", "hero", "closing"]);
        let body = String::from_utf8(sink.into_inner().concat()).unwrap();
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.ends_with("</html>"));
        assert!(body.find("<header>").unwrap() < body.find("<section>").unwrap());
    }
}
