//! Reactive application state.
//!
//! [`Cell`] is an observable single-value holder: writes are
//! last-write-wins and subscribers are notified synchronously, in
//! subscription order, on the writing thread. There is no debouncing or
//! batching. [`AppState`] bundles the cells UI layers care about and is
//! passed by reference rather than living in a global.

use serde::{Deserialize, Serialize};
use std::sync::RwLock;

use crate::models::User;
use crate::session::Session;

type Subscriber<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Observable single-value container.
pub struct Cell<T> {
    value: RwLock<T>,
    subscribers: RwLock<Vec<Subscriber<T>>>,
}

impl<T: Clone> Cell<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.value
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Replace the value and notify every subscriber with the new one.
    pub fn set(&self, value: T) {
        {
            let mut guard = self.value.write().unwrap_or_else(|e| e.into_inner());
            *guard = value;
        }
        // Value lock released before notifying, so subscribers may read
        // the cell again.
        let value = self.get();
        let subscribers = self.subscribers.read().unwrap_or_else(|e| e.into_inner());
        for subscriber in subscribers.iter() {
            subscriber(&value);
        }
    }

    /// Register a change listener. Listeners stay registered for the
    /// lifetime of the cell and fire in registration order.
    pub fn subscribe(&self, subscriber: impl Fn(&T) + Send + Sync + 'static) {
        self.subscribers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(Box::new(subscriber));
    }
}

impl<T: Clone + Default> Default for Cell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Sidebar visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SidebarState {
    Hidden,
    #[default]
    IconOnly,
    Expanded,
}

/// Application state cells shared with the UI layer.
pub struct AppState {
    user: Cell<Option<User>>,
    is_authenticated: Cell<bool>,
    is_loading: Cell<bool>,
    sidebar: Cell<SidebarState>,
}

impl AppState {
    /// Empty state: no user, not loading, sidebar in its default state.
    pub fn new() -> Self {
        Self {
            user: Cell::new(None),
            is_authenticated: Cell::new(false),
            is_loading: Cell::new(false),
            sidebar: Cell::default(),
        }
    }

    /// State seeded from the persisted session, so a restarted UI starts
    /// signed in when a bundle is on disk.
    pub fn from_session(session: &Session) -> Self {
        let state = Self::new();
        state.set_user(session.current_user());
        state
    }

    /// Replace the current user. `is_authenticated` is recomputed
    /// synchronously from the new value.
    pub fn set_user(&self, user: Option<User>) {
        let authenticated = user.is_some();
        self.user.set(user);
        self.is_authenticated.set(authenticated);
    }

    /// Sign-out projection: drops the user and the derived flag.
    pub fn clear_user(&self) {
        self.set_user(None);
    }

    /// Loading flag, set explicitly by callers around async operations.
    /// Not tied to any request lifecycle.
    pub fn set_loading(&self, loading: bool) {
        self.is_loading.set(loading);
    }

    pub fn set_sidebar(&self, sidebar: SidebarState) {
        self.sidebar.set(sidebar);
    }

    pub fn user(&self) -> &Cell<Option<User>> {
        &self.user
    }

    pub fn is_authenticated(&self) -> &Cell<bool> {
        &self.is_authenticated
    }

    pub fn is_loading(&self) -> &Cell<bool> {
        &self.is_loading
    }

    pub fn sidebar(&self) -> &Cell<SidebarState> {
        &self.sidebar
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthBundle, UserRole};
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::sync::{Arc, Mutex};

    fn sample_user() -> User {
        User {
            id: "1".to_string(),
            email: "ana@example.com".to_string(),
            full_name: "Ana Torres".to_string(),
            username: "ana".to_string(),
            phone_number: "+52 555 0100".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1992, 4, 17).unwrap(),
            role: UserRole::User,
            is_active: true,
            avatar_url: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            created_by: None,
            updated_by: None,
        }
    }

    #[test]
    fn test_cell_last_write_wins() {
        let cell = Cell::new(1);
        cell.set(2);
        cell.set(3);
        assert_eq!(cell.get(), 3);
    }

    #[test]
    fn test_subscribers_fire_in_subscription_order() {
        let cell = Cell::new(0);
        let log = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&log);
        cell.subscribe(move |v| first.lock().unwrap().push(format!("first:{v}")));
        let second = Arc::clone(&log);
        cell.subscribe(move |v| second.lock().unwrap().push(format!("second:{v}")));

        cell.set(7);
        assert_eq!(*log.lock().unwrap(), vec!["first:7", "second:7"]);
    }

    #[test]
    fn test_is_authenticated_derived_from_user() {
        let state = AppState::new();
        assert!(!state.is_authenticated().get());

        state.set_user(Some(sample_user()));
        assert!(state.is_authenticated().get());

        state.clear_user();
        assert!(!state.is_authenticated().get());
        assert!(state.user().get().is_none());
    }

    #[test]
    fn test_loading_flag_is_independent() {
        let state = AppState::new();
        state.set_loading(true);
        state.set_user(Some(sample_user()));
        // User changes leave the loading flag alone
        assert!(state.is_loading().get());
        state.set_loading(false);
        assert!(!state.is_loading().get());
    }

    #[test]
    fn test_derived_notification_on_user_change() {
        let state = AppState::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        state
            .is_authenticated()
            .subscribe(move |v| sink.lock().unwrap().push(*v));

        state.set_user(Some(sample_user()));
        state.clear_user();
        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_sidebar_default_and_set() {
        let state = AppState::new();
        assert_eq!(state.sidebar().get(), SidebarState::IconOnly);
        state.set_sidebar(SidebarState::Expanded);
        assert_eq!(state.sidebar().get(), SidebarState::Expanded);
    }

    #[test]
    fn test_from_session_seeds_user() {
        let session = Session::in_memory();
        session.set(&AuthBundle {
            access_token: "tok".to_string(),
            token_type: "bearer".to_string(),
            user: sample_user(),
        });

        let state = AppState::from_session(&session);
        assert!(state.is_authenticated().get());
        assert_eq!(state.user().get().unwrap().id, "1");
    }

    #[test]
    fn test_sidebar_wire_spelling() {
        let json = serde_json::to_string(&SidebarState::IconOnly).unwrap();
        assert_eq!(json, "\"icon-only\"");
    }
}
