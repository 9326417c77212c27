//! # Home Page Model
//!
//! Flat display records for the home widgets: projects, meetings, emails,
//! and artifacts. All mock, all read-only. Projects are the only records
//! with behavior attached — selecting one pushes it into the detail pane.

/// Accent hue attached to a record. The TUI maps these to terminal colors;
/// core stays presentation-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Violet,
    Blue,
    Emerald,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: &'static str,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Meeting {
    pub title: &'static str,
    pub time: &'static str,
    /// Featured meetings get the large card treatment with attendees.
    pub featured: bool,
    pub attendees: Vec<&'static str>,
    pub extra_attendees: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub subject: &'static str,
    pub from: &'static str,
    pub unread: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Doc,
    Pdf,
    Sheet,
    Presentation,
}

impl ArtifactKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ArtifactKind::Doc => "doc",
            ArtifactKind::Pdf => "pdf",
            ArtifactKind::Sheet => "sheet",
            ArtifactKind::Presentation => "deck",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub name: &'static str,
    pub kind: ArtifactKind,
}

pub fn mock_projects() -> Vec<Project> {
    vec![
        Project { name: "Website Redesign", progress: 75, accent: Accent::Violet },
        Project { name: "Mobile App v2", progress: 45, accent: Accent::Blue },
        Project { name: "API Integration", progress: 90, accent: Accent::Emerald },
    ]
}

pub fn mock_meetings() -> Vec<Meeting> {
    vec![
        Meeting {
            title: "Walkthrough of the upcoming sprint goals",
            time: "01:00 - 02:00 PM",
            featured: true,
            attendees: vec!["Alice", "Bob", "Carol"],
            extra_attendees: 5,
        },
        Meeting {
            title: "Meeting with developers about system design and its problems.",
            time: "02:30 - 03:00 PM",
            featured: false,
            attendees: vec![],
            extra_attendees: 0,
        },
    ]
}

pub fn mock_emails() -> Vec<Email> {
    vec![
        Email { subject: "Re: Q4 Planning", from: "Sarah K.", unread: true },
        Email { subject: "Design review feedback", from: "Mike R.", unread: true },
        Email { subject: "Weekly sync notes", from: "Team", unread: false },
    ]
}

pub fn mock_artifacts() -> Vec<Artifact> {
    vec![
        Artifact { name: "Data agent spec", kind: ArtifactKind::Doc },
        Artifact { name: "JD - Product designer", kind: ArtifactKind::Pdf },
        Artifact { name: "AI for Work - PM check list", kind: ArtifactKind::Sheet },
        Artifact { name: "AI for Work - Overview slide deck", kind: ArtifactKind::Presentation },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_data_shapes() {
        assert_eq!(mock_projects().len(), 3);
        assert_eq!(mock_meetings().len(), 2);
        assert_eq!(mock_emails().len(), 3);
        assert_eq!(mock_artifacts().len(), 4);
    }

    #[test]
    fn test_one_featured_meeting() {
        let featured: Vec<Meeting> = mock_meetings().into_iter().filter(|m| m.featured).collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].attendees.len(), 3);
        assert_eq!(featured[0].extra_attendees, 5);
    }

    #[test]
    fn test_project_progress_in_range() {
        for project in mock_projects() {
            assert!(project.progress <= 100, "{} out of range", project.name);
        }
    }

    #[test]
    fn test_artifact_tags() {
        assert_eq!(ArtifactKind::Doc.tag(), "doc");
        assert_eq!(ArtifactKind::Presentation.tag(), "deck");
    }
}
