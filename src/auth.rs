// src/auth.rs

use log::{debug, info};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::models::{Role, User, UserUpdate};
use crate::store::{Store, KEY_CURRENT_USER};

impl Store {
    /// Registers a new user and establishes them as the current session.
    ///
    /// Fails with [`StoreError::DuplicateEmail`] if any existing user has
    /// the same email (case-sensitive exact match). No password is taken:
    /// authentication security is out of scope for this app.
    pub fn sign_up(&mut self, email: &str, name: &str) -> Result<User> {
        let mut users = self.load_users()?;
        if users.iter().any(|u| u.email == email) {
            debug!("Signup rejected, email already registered");
            return Err(StoreError::DuplicateEmail {
                email: email.to_string(),
            });
        }

        let role = match &self.admin_email {
            Some(admin) if admin == email => Role::Admin,
            _ => Role::Volunteer,
        };
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
            skills: Vec::new(),
            interests: Vec::new(),
            bio: String::new(),
            joined_projects: Vec::new(),
        };

        users.push(user.clone());
        self.save_users(&users)?;
        self.storage.put(KEY_CURRENT_USER, &user)?;

        info!("User signed up: {} ({:?})", user.id, user.role);
        Ok(user)
    }

    /// Sets the user matching `email` as the current session.
    ///
    /// The session is a snapshot copy of the collection entry, refreshed by
    /// [`Store::update_current_user`], not a live reference.
    pub fn log_in(&mut self, email: &str) -> Result<User> {
        let users = self.load_users()?;
        let user = users
            .into_iter()
            .find(|u| u.email == email)
            .ok_or(StoreError::NotFound)?;

        self.storage.put(KEY_CURRENT_USER, &user)?;
        info!("User logged in: {}", user.id);
        Ok(user)
    }

    /// Clears the session. Logging out while logged out is fine.
    pub fn log_out(&mut self) -> Result<()> {
        self.storage.remove(KEY_CURRENT_USER)
    }

    /// The session snapshot, or `None` when logged out. Side-effect-free.
    pub fn current_session(&self) -> Result<Option<User>> {
        self.storage.get(KEY_CURRENT_USER)
    }

    /// Whether the current session may mutate the catalog. Presentation
    /// uses this to gate the admin views; the catalog operations enforce it
    /// again themselves.
    pub fn is_admin(&self) -> Result<bool> {
        Ok(self
            .current_session()?
            .is_some_and(|user| user.role == Role::Admin))
    }

    /// Merges `updates` into the current user's profile, writing the
    /// collection entry and the session snapshot together so both locations
    /// read the same state afterwards. No-op when logged out.
    pub fn update_current_user(&mut self, updates: UserUpdate) -> Result<()> {
        let Some(mut user) = self.current_session()? else {
            debug!("update_current_user without a session, ignoring");
            return Ok(());
        };

        updates.apply(&mut user);
        self.commit_user(&user)
    }
}
