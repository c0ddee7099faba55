// src/catalog.rs

use log::{debug, error, info};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::models::{NewProject, Project, ProjectUpdate, Role, User};
use crate::store::{Store, KEY_PROJECTS};

impl Store {
    /// All projects in insertion order. The first-ever read of a fresh
    /// storage area seeds the starter catalog.
    pub fn list_projects(&mut self) -> Result<Vec<Project>> {
        self.load_projects()
    }

    /// Single lookup by id; an unknown id is `None`, not an error.
    pub fn get_project(&mut self, id: &str) -> Result<Option<Project>> {
        let projects = self.load_projects()?;
        Ok(projects.into_iter().find(|p| p.id == id))
    }

    /// Adds a project to the catalog. Admin only.
    pub fn create_project(&mut self, fields: NewProject) -> Result<Project> {
        let admin = self.require_admin()?;

        let mut projects = self.load_projects()?;
        let project = fields.into_project(Uuid::new_v4().to_string());
        projects.push(project.clone());
        self.save_projects(&projects)?;

        info!("Project created {} by {}", project.id, admin.id);
        Ok(project)
    }

    /// Merges `updates` into the matching project. Admin only; an unknown
    /// id is a no-op.
    pub fn update_project(&mut self, id: &str, updates: ProjectUpdate) -> Result<()> {
        self.require_admin()?;

        let mut projects = self.load_projects()?;
        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            debug!("update_project: no project {}, ignoring", id);
            return Ok(());
        };
        updates.apply(project);
        self.save_projects(&projects)
    }

    /// Removes the matching project. Admin only; an unknown id is a no-op.
    pub fn delete_project(&mut self, id: &str) -> Result<()> {
        let admin = self.require_admin()?;

        let mut projects = self.load_projects()?;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() < before {
            info!("Project deleted {} by {}", id, admin.id);
        }
        self.save_projects(&projects)
    }

    /// The one multi-entity transaction: joins the session user to a
    /// project, bumping the project's `volunteers` counter and appending the
    /// id to the user's `joined_projects` together.
    ///
    /// Preconditions, checked in order with the first failure returning
    /// `Ok(false)` and no effect: a session exists, the project exists,
    /// capacity is not exhausted, and the user has not already applied.
    /// Returns `Ok(true)` only when both mutations are committed; a storage
    /// failure rolls back whatever was already written and propagates.
    pub fn apply_to_project(&mut self, project_id: &str) -> Result<bool> {
        let Some(user) = self.current_session()? else {
            debug!("apply_to_project without a session");
            return Ok(false);
        };

        let mut projects = self.load_projects()?;
        let Some(idx) = projects.iter().position(|p| p.id == project_id) else {
            debug!("apply_to_project: no project {}", project_id);
            return Ok(false);
        };
        if projects[idx].volunteers >= projects[idx].max_volunteers {
            debug!("apply_to_project: project {} is full", project_id);
            return Ok(false);
        }
        if user.joined_projects.iter().any(|id| id == project_id) {
            debug!("apply_to_project: {} already joined {}", user.id, project_id);
            return Ok(false);
        }

        // Counter first, membership second; undo the counter if the
        // membership commit fails so the consistency invariant holds.
        let previous = self.storage.get_raw(KEY_PROJECTS);
        projects[idx].volunteers += 1;
        self.save_projects(&projects)?;

        let mut joined = user;
        joined.joined_projects.push(project_id.to_string());
        if let Err(e) = self.commit_user(&joined) {
            if let Some(raw) = previous {
                if let Err(rollback) = self.storage.put_raw(KEY_PROJECTS, &raw) {
                    error!("Rollback of project catalog failed: {}", rollback);
                }
            }
            return Err(e);
        }

        info!("User {} joined project {}", joined.id, project_id);
        Ok(true)
    }

    /// The session user's joined projects, in catalog order. Empty when
    /// logged out.
    pub fn joined_projects(&mut self) -> Result<Vec<Project>> {
        let Some(user) = self.current_session()? else {
            return Ok(Vec::new());
        };
        let projects = self.load_projects()?;
        Ok(projects
            .into_iter()
            .filter(|p| user.joined_projects.contains(&p.id))
            .collect())
    }

    fn require_admin(&self) -> Result<User> {
        match self.current_session()? {
            Some(user) if user.role == Role::Admin => Ok(user),
            Some(user) => {
                error!("User {} attempted catalog mutation without admin role", user.id);
                Err(StoreError::Unauthorized)
            }
            None => {
                error!("Catalog mutation attempted without a session");
                Err(StoreError::Unauthorized)
            }
        }
    }
}
