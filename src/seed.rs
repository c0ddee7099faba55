// src/seed.rs

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Project, ProjectStatus};

/// Starter catalog for a fresh storage area, so an empty deployment is not
/// an empty projects page. Only inserted when the projects key has never
/// held a value; see [`crate::Store`]'s catalog loading.
pub(crate) fn starter_projects() -> Vec<Project> {
    vec![
        Project {
            id: Uuid::new_v4().to_string(),
            title: "Community Garden Cleanup".to_string(),
            description: "Help us maintain and beautify our local community garden. \
                          Activities include weeding, planting, and general maintenance."
                .to_string(),
            category: "Environment".to_string(),
            location: "Central Park Community Garden".to_string(),
            duration: "3 hours".to_string(),
            volunteers: 0,
            max_volunteers: 20,
            start_date: date(2025, 11, 5),
            status: ProjectStatus::Active,
            organizer: "Green Earth Initiative".to_string(),
            requirements: vec![
                "Physical fitness".to_string(),
                "Outdoor work experience".to_string(),
            ],
            image: "https://images.unsplash.com/photo-1464226184884-fa280b87c399?w=800"
                .to_string(),
        },
        Project {
            id: Uuid::new_v4().to_string(),
            title: "Food Bank Distribution".to_string(),
            description: "Assist with sorting, packing, and distributing food to families \
                          in need."
                .to_string(),
            category: "Community".to_string(),
            location: "City Food Bank".to_string(),
            duration: "4 hours".to_string(),
            volunteers: 0,
            max_volunteers: 15,
            start_date: date(2025, 11, 8),
            status: ProjectStatus::Active,
            organizer: "Helping Hands".to_string(),
            requirements: vec![
                "Lifting capability".to_string(),
                "Team player".to_string(),
            ],
            image: "https://images.unsplash.com/photo-1593113598332-cd288d649433?w=800"
                .to_string(),
        },
        Project {
            id: Uuid::new_v4().to_string(),
            title: "Youth Mentorship Program".to_string(),
            description: "Mentor young students in academics, career planning, and personal \
                          development."
                .to_string(),
            category: "Education".to_string(),
            location: "Lincoln High School".to_string(),
            duration: "Ongoing".to_string(),
            volunteers: 0,
            max_volunteers: 25,
            start_date: date(2025, 11, 12),
            status: ProjectStatus::Upcoming,
            organizer: "Future Leaders".to_string(),
            requirements: vec![
                "Background check".to_string(),
                "Communication skills".to_string(),
            ],
            image: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?w=800"
                .to_string(),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_projects_have_unique_ids_and_room_for_volunteers() {
        let projects = starter_projects();
        assert_eq!(projects.len(), 3);
        for (i, p) in projects.iter().enumerate() {
            assert!(p.volunteers < p.max_volunteers);
            assert!(projects[i + 1..].iter().all(|other| other.id != p.id));
        }
    }
}
