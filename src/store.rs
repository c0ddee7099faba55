// src/store.rs

use std::path::PathBuf;

use log::{error, info};

use crate::config::Config;
use crate::error::Result;
use crate::models::{Project, User};
use crate::seed;
use crate::storage::Storage;

// Storage keys, one JSON document each.
pub(crate) const KEY_USERS: &str = "volunteer_link_users";
pub(crate) const KEY_PROJECTS: &str = "volunteer_link_projects";
pub(crate) const KEY_CURRENT_USER: &str = "volunteer_link_current_user";

/// The data-access layer. Owns the user collection, the project catalog and
/// the current-session snapshot, all behind one [`Storage`] area.
///
/// Every operation is synchronous and runs to completion before another can
/// observe storage; mutating operations take `&mut self`, so the borrow
/// checker enforces the single-writer discipline. The multi-step sequences
/// (`apply_to_project`, `update_current_user`) roll back their first write
/// when a later one fails, so a subsequent read never sees a half-applied
/// state.
#[derive(Debug)]
pub struct Store {
    pub(crate) storage: Storage,
    pub(crate) admin_email: Option<String>,
}

impl Store {
    /// Store over a throwaway in-memory area.
    pub fn in_memory() -> Self {
        Self {
            storage: Storage::in_memory(),
            admin_email: None,
        }
    }

    /// Store over a file-backed area at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            storage: Storage::open(dir)?,
            admin_email: None,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut store = match &config.data_dir {
            Some(dir) => Self::open(dir)?,
            None => Self::in_memory(),
        };
        store.admin_email = config.admin_email.clone();
        Ok(store)
    }

    /// Grants the admin role to signups with this email. See
    /// [`Config::admin_email`].
    pub fn with_admin_email(mut self, email: impl Into<String>) -> Self {
        self.admin_email = Some(email.into());
        self
    }

    pub(crate) fn load_users(&self) -> Result<Vec<User>> {
        Ok(self.storage.get(KEY_USERS)?.unwrap_or_default())
    }

    pub(crate) fn save_users(&mut self, users: &[User]) -> Result<()> {
        self.storage.put(KEY_USERS, &users)
    }

    /// Loads the catalog, seeding the starter set on the first-ever read of
    /// a fresh area. Seeding keys off the key being absent entirely; a
    /// catalog that was emptied by deletions stays empty.
    pub(crate) fn load_projects(&mut self) -> Result<Vec<Project>> {
        if !self.storage.contains(KEY_PROJECTS) {
            let starters = seed::starter_projects();
            info!("Seeding catalog with {} starter projects", starters.len());
            self.storage.put(KEY_PROJECTS, &starters)?;
        }
        Ok(self.storage.get(KEY_PROJECTS)?.unwrap_or_default())
    }

    pub(crate) fn save_projects(&mut self, projects: &[Project]) -> Result<()> {
        self.storage.put(KEY_PROJECTS, &projects)
    }

    /// Writes `user` back to the collection entry with the matching id and,
    /// when it is the session user, to the session snapshot. The collection
    /// write is rolled back if the snapshot write fails, so the two
    /// locations always read the same state.
    pub(crate) fn commit_user(&mut self, user: &User) -> Result<()> {
        let previous = self.storage.get_raw(KEY_USERS);

        let mut users = self.load_users()?;
        let in_collection = match users.iter_mut().find(|u| u.id == user.id) {
            Some(entry) => {
                *entry = user.clone();
                true
            }
            None => false,
        };
        if in_collection {
            self.save_users(&users)?;
        }

        let is_session = self
            .current_session()?
            .is_some_and(|session| session.id == user.id);
        if is_session {
            if let Err(e) = self.storage.put(KEY_CURRENT_USER, user) {
                if in_collection {
                    if let Some(raw) = previous {
                        if let Err(rollback) = self.storage.put_raw(KEY_USERS, &raw) {
                            error!("Rollback of user collection failed: {}", rollback);
                        }
                    }
                }
                return Err(e);
            }
        }

        Ok(())
    }
}
