// src/models/user.rs

use serde::{Deserialize, Serialize};

/// Authorization level. Only admins may mutate the project catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Volunteer,
    Admin,
}

/// A registered user.
///
/// `joined_projects` is kept in sync with each project's `volunteers`
/// counter by [`crate::Store::apply_to_project`]; nothing else appends to
/// it, so the same project id never appears twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub bio: String,
    pub joined_projects: Vec<String>,
}

/// Partial profile update: `Some` overrides the field, `None` leaves it
/// unchanged. Email, role and project membership are deliberately not
/// editable through here.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
}

impl UserUpdate {
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(bio) = self.bio {
            user.bio = bio;
        }
        if let Some(skills) = self.skills {
            user.skills = skills;
        }
        if let Some(interests) = self.interests {
            user.interests = interests;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u-1".into(),
            email: "ada@example.com".into(),
            name: "Ada".into(),
            role: Role::Volunteer,
            skills: vec!["gardening".into()],
            interests: vec![],
            bio: String::new(),
            joined_projects: vec!["p-1".into()],
        }
    }

    #[test]
    fn serializes_with_camel_case_names_and_lowercase_role() {
        let value = serde_json::to_value(sample_user()).unwrap();
        assert_eq!(value["role"], "volunteer");
        assert_eq!(value["joinedProjects"][0], "p-1");
        assert!(value.get("joined_projects").is_none());
    }

    #[test]
    fn update_overrides_only_present_fields() {
        let mut user = sample_user();
        let update = UserUpdate {
            name: Some("Ada L.".into()),
            bio: Some("volunteer since 2025".into()),
            ..Default::default()
        };
        update.apply(&mut user);

        assert_eq!(user.name, "Ada L.");
        assert_eq!(user.bio, "volunteer since 2025");
        // untouched fields keep their values
        assert_eq!(user.skills, vec!["gardening".to_string()]);
        assert_eq!(user.joined_projects, vec!["p-1".to_string()]);
    }
}
