// src/models/mod.rs

mod project;
mod user;

pub use project::{NewProject, Project, ProjectStatus, ProjectUpdate};
pub use user::{Role, User, UserUpdate};
