//! `/font`: switch the font preset, then send the visitor back.

use lumiere_sdk::lumiere_core::{RequestContext, ThemeSettings};
use lumiere_sdk::lumiere_theme::{FontChange, FontSelector, ThemeError};

use super::font_preference;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRedirect {
    pub location: String,
    pub change: FontChange,
    pub font_id: String,
    pub set_cookies: Vec<String>,
}

/// Apply `?id=` from an open selector and build the redirect to `?return=`.
///
/// The selector closes on selection, so the return target loses any
/// `fonts=open` flag.
pub fn apply_font(ctx: &RequestContext, theme: &ThemeSettings) -> Result<FontRedirect, ThemeError> {
    let mut preference = font_preference(ctx, theme)?;
    let mut selector = FontSelector::with_open(true);

    let change = match ctx.query_param("id") {
        Some(id) => selector.select(id, &mut preference)?,
        None => {
            selector.close();
            FontChange::Unknown
        }
    };

    let mut location = safe_return(ctx.query_param("return"));
    if !selector.is_open() {
        location = without_param(&location, "fonts");
    }

    Ok(FontRedirect {
        location,
        change,
        font_id: preference.current().id.clone(),
        set_cookies: preference.store_mut().take_set_cookie_headers(),
    })
}

/// Same-site path to return to; anything else becomes `/`.
///
/// Control characters are refused outright: browsers strip tab and
/// newline from a `Location`, so `/\t/host` would become `//host`.
pub fn safe_return(target: Option<&str>) -> String {
    match target {
        Some(t)
            if !t.chars().any(|c| c.is_ascii_control())
                && t.starts_with('/')
                && !t.starts_with("//")
                && !t.contains('\\') =>
        {
            t.to_string()
        }
        _ => "/".to_string(),
    }
}

fn without_param(location: &str, name: &str) -> String {
    let Some((path, query)) = location.split_once('?') else {
        return location.to_string();
    };
    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty() && pair.split('=').next() != Some(name))
        .collect();
    if kept.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, kept.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_sdk::lumiere_core::Method;

    fn redirect(path: &str, cookie: Option<&str>) -> FontRedirect {
        let mut ctx = RequestContext::new(Method::Get, path);
        if let Some(cookie) = cookie {
            ctx = ctx.with_header("cookie", cookie);
        }
        apply_font(&ctx, &ThemeSettings::default()).unwrap()
    }

    #[test]
    fn test_applies_and_sets_cookie() {
        let r = redirect("/font?id=lato&return=%2F%3Fslide%3D1%26fonts%3Dopen", None);
        assert_eq!(r.change, FontChange::Applied);
        assert_eq!(r.font_id, "lato");
        assert_eq!(r.location, "/?slide=1");
        assert_eq!(r.set_cookies.len(), 1);
        assert!(r.set_cookies[0].starts_with("lumiere.selected-font=lato;"));
    }

    #[test]
    fn test_unknown_id_keeps_cookie() {
        let r = redirect("/font?id=wingdings", Some("lumiere.selected-font=cinzel"));
        assert_eq!(r.change, FontChange::Unknown);
        assert_eq!(r.font_id, "cinzel");
        assert!(r.set_cookies.is_empty());
        assert_eq!(r.location, "/");
    }

    #[test]
    fn test_same_font_unchanged() {
        let r = redirect("/font?id=cinzel", Some("lumiere.selected-font=cinzel"));
        assert_eq!(r.change, FontChange::Unchanged);
        assert!(r.set_cookies.is_empty());
    }

    #[test]
    fn test_encoded_tab_in_return_goes_home() {
        let r = redirect("/font?id=lato&return=%2F%09%2Fevil.test%2F", None);
        assert_eq!(r.change, FontChange::Applied);
        assert_eq!(r.location, "/");
    }

    #[test]
    fn test_safe_return() {
        assert_eq!(safe_return(Some("/collections/gems?sort=price-low")), "/collections/gems?sort=price-low");
        assert_eq!(safe_return(Some("https://evil.test/")), "/");
        assert_eq!(safe_return(Some("//evil.test/")), "/");
        assert_eq!(safe_return(Some("/\\evil.test")), "/");
        assert_eq!(safe_return(None), "/");
        assert_eq!(safe_return(Some("/\t/evil.test")), "/");
        assert_eq!(safe_return(Some("/\n/evil.test")), "/");
        assert_eq!(safe_return(Some("/\r\n/evil.test")), "/");
        assert_eq!(safe_return(Some("/collections\u{7f}")), "/");
    }

    #[test]
    fn test_without_param() {
        assert_eq!(without_param("/?fonts=open", "fonts"), "/");
        assert_eq!(without_param("/?slide=2&fonts=open&dir=backward", "fonts"), "/?slide=2&dir=backward");
        assert_eq!(without_param("/collections/gems", "fonts"), "/collections/gems");
    }
}
