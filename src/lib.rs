// src/lib.rs

//! Data layer for Volunteer Link, a volunteer-matching app.
//!
//! Users register, browse volunteer projects and apply to join them;
//! administrators curate the project catalog. Everything persists into a
//! process-local key-value area ([`storage::Storage`]), one JSON document
//! per key, owned by a single [`Store`]. Presentation code is expected to
//! call into [`Store`] and render its results; there is no server and no
//! network surface.

mod auth;
mod catalog;
pub mod config;
mod error;
pub mod models;
mod seed;
pub mod storage;
mod store;

pub use config::Config;
pub use error::{Result, StoreError};
pub use models::{NewProject, Project, ProjectStatus, ProjectUpdate, Role, User, UserUpdate};
pub use store::Store;
