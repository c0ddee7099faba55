// src/models/project.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Advisory lifecycle state. It is shown to volunteers but does not by
/// itself block applications; only capacity does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Upcoming,
}

/// A volunteer project in the catalog.
///
/// `volunteers` counts accepted applicants and must always equal the number
/// of users whose `joined_projects` contains this project's id. It is
/// maintained transactionally by [`crate::Store::apply_to_project`], never
/// recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub duration: String,
    pub volunteers: u32,
    pub max_volunteers: u32,
    pub start_date: NaiveDate,
    pub status: ProjectStatus,
    pub organizer: String,
    pub requirements: Vec<String>,
    pub image: String,
}

/// Everything a [`Project`] carries except the id, which the store assigns.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub duration: String,
    pub volunteers: u32,
    pub max_volunteers: u32,
    pub start_date: NaiveDate,
    pub status: ProjectStatus,
    pub organizer: String,
    pub requirements: Vec<String>,
    pub image: String,
}

impl NewProject {
    pub(crate) fn into_project(self, id: String) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            location: self.location,
            duration: self.duration,
            // keep the capacity invariant even if the form lies
            volunteers: self.volunteers.min(self.max_volunteers),
            max_volunteers: self.max_volunteers,
            start_date: self.start_date,
            status: self.status,
            organizer: self.organizer,
            requirements: self.requirements,
            image: self.image,
        }
    }
}

/// Partial catalog edit: `Some` overrides the field, `None` leaves it
/// unchanged.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub volunteers: Option<u32>,
    pub max_volunteers: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
    pub organizer: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub image: Option<String>,
}

impl ProjectUpdate {
    pub fn apply(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(category) = self.category {
            project.category = category;
        }
        if let Some(location) = self.location {
            project.location = location;
        }
        if let Some(duration) = self.duration {
            project.duration = duration;
        }
        if let Some(volunteers) = self.volunteers {
            project.volunteers = volunteers;
        }
        if let Some(max_volunteers) = self.max_volunteers {
            project.max_volunteers = max_volunteers;
        }
        if let Some(start_date) = self.start_date {
            project.start_date = start_date;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(organizer) = self.organizer {
            project.organizer = organizer;
        }
        if let Some(requirements) = self.requirements {
            project.requirements = requirements;
        }
        if let Some(image) = self.image {
            project.image = image;
        }
        // an edit may lower the ceiling below the current count
        if project.volunteers > project.max_volunteers {
            project.volunteers = project.max_volunteers;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        NewProject {
            title: "Community Garden Cleanup".into(),
            description: "Weeding and planting".into(),
            category: "Environment".into(),
            location: "Central Park".into(),
            duration: "3 hours".into(),
            volunteers: 2,
            max_volunteers: 5,
            start_date: NaiveDate::from_ymd_opt(2025, 11, 5).unwrap(),
            status: ProjectStatus::Active,
            organizer: "Green Earth".into(),
            requirements: vec!["Outdoor work".into()],
            image: String::new(),
        }
        .into_project("p-1".into())
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let value = serde_json::to_value(sample_project()).unwrap();
        assert_eq!(value["maxVolunteers"], 5);
        assert_eq!(value["startDate"], "2025-11-05");
        assert_eq!(value["status"], "active");
    }

    #[test]
    fn update_keeps_counter_within_new_ceiling() {
        let mut project = sample_project();
        let update = ProjectUpdate {
            max_volunteers: Some(1),
            ..Default::default()
        };
        update.apply(&mut project);

        assert_eq!(project.max_volunteers, 1);
        assert_eq!(project.volunteers, 1);
    }

    #[test]
    fn into_project_clamps_oversubscribed_count() {
        let new = NewProject {
            title: "Overbooked".into(),
            description: String::new(),
            category: String::new(),
            location: String::new(),
            duration: String::new(),
            volunteers: 9,
            max_volunteers: 3,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            status: ProjectStatus::Upcoming,
            organizer: String::new(),
            requirements: vec![],
            image: String::new(),
        };
        let project = new.into_project("p-2".into());
        assert_eq!(project.volunteers, 3);
    }
}
