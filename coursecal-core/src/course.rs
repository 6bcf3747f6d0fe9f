//! Courses and course lookups.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CourseCalError, CourseCalResult};

/// Label shown for events whose course no longer exists.
pub const FALLBACK_COURSE_LABEL: &str = "General";

/// Display colour tag of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseColor {
    #[default]
    Blue,
    Purple,
    Green,
    Orange,
    Red,
    Pink,
    /// Fallback for dangling course references. Not offered when creating a course.
    Gray,
}

impl CourseColor {
    /// Colours a new course can pick from. The first one is the default.
    pub const PALETTE: [CourseColor; 6] = [
        CourseColor::Blue,
        CourseColor::Purple,
        CourseColor::Green,
        CourseColor::Orange,
        CourseColor::Red,
        CourseColor::Pink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseColor::Blue => "blue",
            CourseColor::Purple => "purple",
            CourseColor::Green => "green",
            CourseColor::Orange => "orange",
            CourseColor::Red => "red",
            CourseColor::Pink => "pink",
            CourseColor::Gray => "gray",
        }
    }
}

impl fmt::Display for CourseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CourseColor {
    type Err = CourseCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        CourseColor::PALETTE
            .into_iter()
            .chain([CourseColor::Gray])
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| CourseCalError::Validation(format!("Unknown course color '{}'", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub instructor: String,
    /// Percent complete, 0-100.
    pub progress: u8,
    pub color: CourseColor,
    /// Topic handed to the quiz generator.
    pub quiz_topic: String,
}

/// Input of the course creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub instructor: String,
    pub color: CourseColor,
}

impl NewCourse {
    /// Check the form and build the course.
    ///
    /// New courses start at 0% progress and quiz on their own title.
    pub fn into_course(self, id: String) -> CourseCalResult<Course> {
        if self.title.trim().is_empty() || self.instructor.trim().is_empty() {
            return Err(CourseCalError::Validation(
                "Both title and instructor are required.".to_string(),
            ));
        }
        if !CourseColor::PALETTE.contains(&self.color) {
            return Err(CourseCalError::Validation(format!(
                "'{}' is not available for new courses.",
                self.color
            )));
        }

        Ok(Course {
            id,
            quiz_topic: self.title.clone(),
            title: self.title,
            instructor: self.instructor,
            progress: 0,
            color: self.color,
        })
    }
}

/// Read-only view over the course list, keyed by id.
pub struct CourseDirectory<'a> {
    courses: &'a [Course],
    by_id: HashMap<&'a str, &'a Course>,
}

impl<'a> CourseDirectory<'a> {
    pub fn new(courses: &'a [Course]) -> Self {
        let by_id = courses.iter().map(|c| (c.id.as_str(), c)).collect();
        CourseDirectory { courses, by_id }
    }

    pub fn lookup(&self, id: &str) -> Option<&'a Course> {
        self.by_id.get(id).copied()
    }

    /// Course title, or [`FALLBACK_COURSE_LABEL`] if the course is gone.
    pub fn label_for(&self, id: &str) -> &'a str {
        self.lookup(id)
            .map(|c| c.title.as_str())
            .unwrap_or(FALLBACK_COURSE_LABEL)
    }

    pub fn color_for(&self, id: &str) -> CourseColor {
        self.lookup(id).map(|c| c.color).unwrap_or(CourseColor::Gray)
    }

    /// Course preselected by a fresh event form.
    pub fn first(&self) -> Option<&'a Course> {
        self.courses.first()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Course> {
        self.courses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses() -> Vec<Course> {
        vec![
            Course {
                id: "1".to_string(),
                title: "Quantum Physics".to_string(),
                instructor: "Dr. Evelyn Reed".to_string(),
                progress: 75,
                color: CourseColor::Blue,
                quiz_topic: "Quantum Mechanics".to_string(),
            },
            Course {
                id: "2".to_string(),
                title: "Advanced Algebra".to_string(),
                instructor: "Prof. David Chen".to_string(),
                progress: 45,
                color: CourseColor::Purple,
                quiz_topic: "Linear Algebra".to_string(),
            },
        ]
    }

    #[test]
    fn lookup_resolves_known_courses() {
        let courses = courses();
        let dir = CourseDirectory::new(&courses);
        assert_eq!(dir.label_for("2"), "Advanced Algebra");
        assert_eq!(dir.color_for("2"), CourseColor::Purple);
        assert_eq!(dir.first().map(|c| c.id.as_str()), Some("1"));
    }

    #[test]
    fn dangling_reference_falls_back() {
        let courses = courses();
        let dir = CourseDirectory::new(&courses);
        assert!(dir.lookup("99").is_none());
        assert_eq!(dir.label_for("99"), "General");
        assert_eq!(dir.color_for("99"), CourseColor::Gray);
    }

    #[test]
    fn new_course_defaults() {
        let course = NewCourse {
            title: "Creative Writing".to_string(),
            instructor: "Mr. Samuel Jones".to_string(),
            color: CourseColor::Orange,
        }
        .into_course("c1".to_string())
        .unwrap();

        assert_eq!(course.progress, 0);
        assert_eq!(course.quiz_topic, "Creative Writing");
    }

    #[test]
    fn new_course_requires_title_and_instructor() {
        let err = NewCourse {
            title: "  ".to_string(),
            instructor: "Someone".to_string(),
            color: CourseColor::default(),
        }
        .into_course("c1".to_string())
        .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Both title and instructor are required.");
    }

    #[test]
    fn new_course_cannot_use_fallback_color() {
        let err = NewCourse {
            title: "Astronomy".to_string(),
            instructor: "Dr. Vera Rubin".to_string(),
            color: CourseColor::Gray,
        }
        .into_course("c1".to_string())
        .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "'gray' is not available for new courses.");
    }

    #[test]
    fn color_parsing() {
        assert_eq!("Green".parse::<CourseColor>().unwrap(), CourseColor::Green);
        assert_eq!("gray".parse::<CourseColor>().unwrap(), CourseColor::Gray);
        assert!("teal".parse::<CourseColor>().is_err());
    }
}
