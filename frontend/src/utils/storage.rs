use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Storage, Window};

/// localStorage key holding the bearer credential across reloads.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Where the persisted token lives. The session store only talks to this
/// seam, so host tests can swap the browser out.
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// Browser-backed store; storage failures degrade to "no token".
#[derive(Clone, Copy, Default)]
pub struct BrowserCredentials;

impl CredentialStore for BrowserCredentials {
    fn load(&self) -> Option<String> {
        local_storage().ok()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()
    }

    fn store(&self, token: &str) {
        if let Ok(storage) = local_storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryCredentials {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryCredentials {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Rc::new(RefCell::new(Some(token.into()))),
        }
    }
}

impl CredentialStore for MemoryCredentials {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}
