//! Persistence for the selected preset id.

use std::collections::HashMap;

use lumiere_core::url_encode;

use crate::ThemeError;

/// Key the storefront persists the preset id under.
pub const DEFAULT_PREFERENCE_KEY: &str = "lumiere.selected-font";

/// Default cookie lifetime: one year.
pub const DEFAULT_COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// String key/value store for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// In-process store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Request-scoped store backed by cookies.
///
/// Reads come from the request's cookies. Writes update the view and queue
/// a `Set-Cookie` header value for the response, at most one per cookie
/// name. Writing the value a cookie already holds queues nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieStore {
    cookies: HashMap<String, String>,
    pending: Vec<String>,
    max_age_secs: u64,
}

impl CookieStore {
    pub fn new(max_age_secs: u64) -> Self {
        Self {
            cookies: HashMap::new(),
            pending: Vec::new(),
            max_age_secs,
        }
    }

    /// Seed with a decoded cookie from the request.
    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.insert(name.to_string(), value.to_string());
        self
    }

    /// `Set-Cookie` values queued by writes, oldest first.
    pub fn set_cookie_headers(&self) -> &[String] {
        &self.pending
    }

    pub fn take_set_cookie_headers(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}

impl PreferenceStore for CookieStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.cookies.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if key.is_empty() || !key.bytes().all(is_cookie_name_byte) {
            return Err(ThemeError::Store(format!("invalid cookie name: {:?}", key)));
        }
        if self.cookies.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }

        let prefix = format!("{}=", key);
        self.pending.retain(|c| !c.starts_with(&prefix));
        self.pending.push(format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            key,
            url_encode(value),
            self.max_age_secs
        ));
        self.cookies.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn is_cookie_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}
