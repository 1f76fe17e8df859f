use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use todolist_service::RequestContext;
use tracing::{debug, info};

use crate::SessionError;

/// Where the session token survives between runs.
///
/// The file plays the role of a `token` cookie: written on login, deleted on
/// logout.
#[derive(Debug, Clone)]
pub enum TokenStore {
    File(PathBuf),
    /// Nothing persisted; the token lives only as long as the session.
    Memory,
}

impl TokenStore {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        TokenStore::File(path.into())
    }

    /// `$XDG_DATA_HOME/todolist/token`, falling back to `~/.local/share`.
    pub fn default_path() -> PathBuf {
        default_data_dir().join("todolist").join("token")
    }

    pub fn load(&self) -> Result<Option<String>, SessionError> {
        let path = match self {
            TokenStore::File(path) => path,
            TokenStore::Memory => return Ok(None),
        };
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                let token = raw.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, token: &str) -> Result<(), SessionError> {
        if let TokenStore::File(path) = self {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            write_private(path, token)?;
            debug!("token written to {}", path.display());
        }
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        if let TokenStore::File(path) = self {
            match std::fs::remove_file(path) {
                Ok(()) => debug!("token removed from {}", path.display()),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

/// Owner-only from the moment the file exists. A file left by an older run
/// is narrowed before the new token goes in.
fn write_private(path: &Path, token: &str) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(token.as_bytes())
}

fn default_data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg)
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local/share")
    } else {
        PathBuf::from(".")
    }
}

/// The signed-in user's credential, handed to every request.
#[derive(Debug)]
pub struct Session {
    tokens: TokenStore,
    ctx: RequestContext,
}

impl Session {
    /// A session with no credential that persists through `tokens` once
    /// someone signs in.
    pub fn anonymous(tokens: TokenStore) -> Self {
        Self {
            tokens,
            ctx: RequestContext::anonymous(),
        }
    }

    /// Pick up a token saved by an earlier run, if any.
    pub fn restore(tokens: TokenStore) -> Result<Self, SessionError> {
        let ctx = match tokens.load()? {
            Some(token) => {
                debug!("restored saved session token");
                RequestContext::with_token(token)
            }
            None => RequestContext::anonymous(),
        };
        Ok(Self { tokens, ctx })
    }

    pub fn context(&self) -> &RequestContext {
        &self.ctx
    }

    pub fn is_authenticated(&self) -> bool {
        self.ctx.is_authenticated()
    }

    pub(crate) fn begin(&mut self, token: String) -> Result<(), SessionError> {
        self.tokens.save(&token)?;
        self.ctx = RequestContext::with_token(token);
        info!("signed in");
        Ok(())
    }

    /// Drops the in-memory credential even when deleting the file fails.
    pub(crate) fn end(&mut self) -> Result<(), SessionError> {
        self.ctx = RequestContext::anonymous();
        self.tokens.clear()?;
        info!("signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::file(dir.path().join("token"));
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::file(dir.path().join("nested/token"));
        store.save("abc").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc"));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn blank_file_is_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "\n").unwrap();
        assert_eq!(TokenStore::file(path).load().unwrap(), None);
    }

    #[test]
    fn restore_then_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "saved\n").unwrap();

        let mut session = Session::restore(TokenStore::file(&path)).unwrap();
        assert_eq!(session.context().token(), Some("saved"));

        session.end().unwrap();
        assert!(!session.is_authenticated());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn token_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let fresh = dir.path().join("fresh");
        TokenStore::file(&fresh).save("abc").unwrap();
        let mode = std::fs::metadata(&fresh).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);

        let stale = dir.path().join("stale");
        std::fs::write(&stale, "old-token-that-is-longer").unwrap();
        std::fs::set_permissions(&stale, std::fs::Permissions::from_mode(0o644)).unwrap();
        let store = TokenStore::file(&stale);
        store.save("new").unwrap();
        let mode = std::fs::metadata(&stale).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.load().unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn memory_store_never_persists() {
        let mut session = Session::anonymous(TokenStore::Memory);
        session.begin("t".into()).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(TokenStore::Memory.load().unwrap(), None);
    }
}
