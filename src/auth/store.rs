//! Session & authorization store
//!
//! Single source of truth for "who is the current user and what can they
//! do". Authorization decisions are memoized per permission name; the cache
//! is tagged with the epoch of the session state it was computed from and is
//! discarded wholesale whenever the epoch moves, so a decision computed
//! against a superseded permission set can never be returned.

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::api::{ApiClient, User};
use crate::utils::error::{AdminError, Result};

/// Role id that is always granted every permission.
///
/// This is the single canonical super-access representation; the `"Admin"`
/// permission name carries no special meaning.
pub const ADMIN_ROLE_ID: i64 = 1;

pub(crate) const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub(crate) const SESSION_CHECK_FAILED: &str = "Failed to load user session";

#[derive(Debug)]
struct SessionState {
    user: Option<User>,
    permissions: HashSet<String>,
    /// True while the initial session check (or a later session mutation)
    /// has not settled; `has_permission` fails closed in that window.
    loading: bool,
    error: Option<String>,
    /// Version counter, bumped on every permission-set replacement.
    epoch: u64,
}

#[derive(Debug, Default)]
struct DecisionCache {
    /// Epoch of the session state the decisions were computed from.
    epoch: u64,
    decisions: HashMap<String, bool>,
}

/// Process-wide session and authorization state.
///
/// Constructed once at application start; all mutations go through
/// [`check_session`](Self::check_session), [`login`](Self::login) and
/// [`logout`](Self::logout). Concurrent `login`/`logout` calls are not
/// serialized here; callers should not issue them in parallel.
pub struct SessionStore {
    api: ApiClient,
    state: RwLock<SessionState>,
    cache: RwLock<DecisionCache>,
}

impl SessionStore {
    /// Create a store in the unresolved state.
    ///
    /// The store stays fail-closed until [`check_session`](Self::check_session)
    /// or [`login`](Self::login) settles.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: RwLock::new(SessionState {
                user: None,
                permissions: HashSet::new(),
                loading: true,
                error: None,
                epoch: 0,
            }),
            cache: RwLock::new(DecisionCache::default()),
        }
    }

    /// Resolve the current backend session.
    ///
    /// Returns `true` when a valid session exists. Failures (network errors,
    /// 401) are recovered locally: the store resets to unauthenticated and
    /// records a user-visible error. Safe to call repeatedly.
    pub async fn check_session(&self) -> bool {
        self.begin();
        match self.api.check_session().await {
            Ok(payload) => {
                info!("Session resolved for user {}", payload.user.id);
                self.apply(
                    Some(payload.user),
                    payload.permissions.into_iter().collect(),
                    None,
                );
                true
            }
            Err(err) => {
                warn!("Session check failed: {err}");
                self.apply(None, HashSet::new(), Some(SESSION_CHECK_FAILED.to_string()));
                false
            }
        }
    }

    /// Authenticate with credentials.
    ///
    /// On success the user and permission set are replaced atomically. On
    /// failure the store resets to unauthenticated, records the error, and
    /// re-raises so the caller can react (this is the one operation whose
    /// failure propagates).
    pub async fn login(&self, login: &str, password: &str) -> Result<User> {
        self.begin();
        match self.api.login(login, password).await {
            Ok(payload) => {
                info!("Login succeeded for user {}", payload.user.id);
                let user = payload.user.clone();
                self.apply(
                    Some(payload.user),
                    payload.permissions.into_iter().collect(),
                    None,
                );
                Ok(user)
            }
            Err(err) => {
                warn!("Login failed: {err}");
                self.apply(None, HashSet::new(), Some(LOGIN_FAILED.to_string()));
                Err(AdminError::auth(LOGIN_FAILED))
            }
        }
    }

    /// End the session.
    ///
    /// The backend call is best effort: a failed request is logged and
    /// swallowed. Local user, permission set and decision cache are always
    /// cleared as the terminal action.
    pub async fn logout(&self) {
        self.begin();
        if let Err(err) = self.api.logout().await {
            warn!("Logout request failed, clearing local session anyway: {err}");
        }
        self.apply(None, HashSet::new(), None);
    }

    /// Answer "may the current user perform `name`".
    ///
    /// Fails closed while the session is unresolved. Decisions are memoized;
    /// a cached value is only trusted when its epoch tag matches the current
    /// session epoch, otherwise the cache is cleared and re-tagged first.
    pub fn has_permission(&self, name: &str) -> bool {
        let state = self.state.read();
        if state.loading {
            return false;
        }

        let mut cache = self.cache.write();
        if cache.epoch != state.epoch {
            debug!("Decision cache stale (epoch {} -> {}), clearing", cache.epoch, state.epoch);
            cache.decisions.clear();
            cache.epoch = state.epoch;
        }

        if let Some(&decision) = cache.decisions.get(name) {
            return decision;
        }

        let granted = state
            .user
            .as_ref()
            .is_some_and(|user| user.role_id == ADMIN_ROLE_ID)
            || state.permissions.contains(name);
        cache.decisions.insert(name.to_string(), granted);
        granted
    }

    /// Snapshot of the current user, if authenticated.
    pub fn current_user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    /// Snapshot of the granted permission names.
    pub fn permissions(&self) -> HashSet<String> {
        self.state.read().permissions.clone()
    }

    /// The last recorded user-visible error, if any.
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// Whether the session is still resolving.
    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    /// Mark the store as resolving; decisions fail closed until the next
    /// [`apply`](Self::apply).
    fn begin(&self) {
        let mut state = self.state.write();
        state.loading = true;
        state.error = None;
    }

    /// Replace the session atomically.
    ///
    /// The epoch bump happens in the same critical section as the
    /// permission-set replacement, which is what invalidates the decision
    /// cache: `has_permission` discards any decisions tagged with an older
    /// epoch before trusting them.
    fn apply(&self, user: Option<User>, permissions: HashSet<String>, error: Option<String>) {
        let mut state = self.state.write();
        state.user = user;
        state.permissions = permissions;
        state.error = error;
        state.loading = false;
        state.epoch = state.epoch.wrapping_add(1);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("SessionStore")
            .field("user", &state.user.as_ref().map(|u| u.id))
            .field("permissions", &state.permissions.len())
            .field("loading", &state.loading)
            .field("epoch", &state.epoch)
            .finish()
    }
}
