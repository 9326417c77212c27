//! # Inbox Model
//!
//! Read-only mock inbox records and the client-side search over them.
//! Nothing here is persisted or mutated at runtime; the list is filtered
//! by a case-insensitive substring match and that's it.

/// What kind of thing landed in the inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Message,
    Task,
    Review,
    Alert,
}

impl ItemKind {
    /// Short glyph for list rows (the TUI stand-in for the web app's icons).
    pub fn glyph(&self) -> &'static str {
        match self {
            ItemKind::Message => "✉",
            ItemKind::Task => "◆",
            ItemKind::Review => "▤",
            ItemKind::Alert => "⚠",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Message => "message",
            ItemKind::Task => "task",
            ItemKind::Review => "review",
            ItemKind::Alert => "alert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Normal,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

/// A related resource shown in the detail pane's Context section.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextLink {
    pub label: &'static str,
    pub kind: &'static str,
}

/// The expanded payload rendered when an item is opened in the detail pane.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetail {
    pub summary: &'static str,
    pub action_items: Vec<&'static str>,
    pub suggested_actions: Vec<&'static str>,
    pub context_links: Vec<ContextLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InboxItem {
    pub id: &'static str,
    pub kind: ItemKind,
    pub title: &'static str,
    pub preview: &'static str,
    pub from: &'static str,
    pub received_at: &'static str,
    pub priority: Priority,
    pub tags: Vec<&'static str>,
    pub detail: ItemDetail,
}

/// Time-filter pills above the list. Presentation state only: the original
/// UI renders the active pill but never applies it to the list, and this
/// port keeps that behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeFilter {
    #[default]
    Now,
    Soon,
    Later,
}

impl TimeFilter {
    pub fn label(&self) -> &'static str {
        match self {
            TimeFilter::Now => "Now",
            TimeFilter::Soon => "Soon",
            TimeFilter::Later => "Later",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            TimeFilter::Now => TimeFilter::Soon,
            TimeFilter::Soon => TimeFilter::Later,
            TimeFilter::Later => TimeFilter::Now,
        }
    }

    pub const ALL: [TimeFilter; 3] = [TimeFilter::Now, TimeFilter::Soon, TimeFilter::Later];
}

/// The mock dataset. Built fresh per call; callers hold it for the session.
pub fn mock_items() -> Vec<InboxItem> {
    vec![
        InboxItem {
            id: "1",
            kind: ItemKind::Message,
            title: "Review Q4 Planning Document",
            preview: "Sarah needs your feedback on the Q4 planning document before the team meeting.",
            from: "Sarah K.",
            received_at: "2h ago",
            priority: Priority::High,
            tags: vec!["urgent", "review"],
            detail: ItemDetail {
                summary: "Sarah has shared a Q4 planning document that requires your review and feedback before the upcoming team meeting.",
                action_items: vec![
                    "Review the Q4 planning document for accuracy and completeness",
                    "Provide feedback on proposed initiatives and timelines",
                    "Confirm availability for the team meeting on Friday",
                ],
                suggested_actions: vec!["Open document", "Add comments", "Schedule follow-up"],
                context_links: vec![
                    ContextLink { label: "Q4 Planning Doc", kind: "document" },
                    ContextLink { label: "Sarah K.", kind: "person" },
                    ContextLink { label: "Team Meeting", kind: "event" },
                ],
            },
        },
        InboxItem {
            id: "2",
            kind: ItemKind::Task,
            title: "Approve Design System Updates",
            preview: "The design team has submitted updates to the component library that need approval.",
            from: "Design Team",
            received_at: "5h ago",
            priority: Priority::Normal,
            tags: vec!["approval", "design"],
            detail: ItemDetail {
                summary: "The design team has completed updates to the component library and is requesting your approval to proceed with implementation.",
                action_items: vec![
                    "Review the updated component specifications",
                    "Verify alignment with brand guidelines",
                    "Approve or request changes",
                ],
                suggested_actions: vec!["View changes", "Approve", "Request revisions"],
                context_links: vec![
                    ContextLink { label: "Component Library", kind: "document" },
                    ContextLink { label: "Design Team", kind: "team" },
                ],
            },
        },
        InboxItem {
            id: "3",
            kind: ItemKind::Review,
            title: "Code Review: Feature Branch",
            preview: "A pull request for the new authentication flow is ready for your review.",
            from: "Engineering",
            received_at: "1d ago",
            priority: Priority::Normal,
            tags: vec!["code-review", "engineering"],
            detail: ItemDetail {
                summary: "A pull request for the new authentication flow has been submitted and is awaiting your code review.",
                action_items: vec![
                    "Review the code changes for security and best practices",
                    "Test the authentication flow in the staging environment",
                    "Provide feedback or approve the merge",
                ],
                suggested_actions: vec!["View PR", "Test in staging", "Approve merge"],
                context_links: vec![
                    ContextLink { label: "PR #1423", kind: "pull-request" },
                    ContextLink { label: "Auth Flow Spec", kind: "document" },
                ],
            },
        },
        InboxItem {
            id: "4",
            kind: ItemKind::Alert,
            title: "System Alert: High Error Rate",
            preview: "The API is experiencing elevated error rates. Immediate attention recommended.",
            from: "System Monitor",
            received_at: "30m ago",
            priority: Priority::High,
            tags: vec!["alert", "urgent"],
            detail: ItemDetail {
                summary: "The monitoring system has detected elevated error rates in the API over the past hour. Immediate investigation is recommended.",
                action_items: vec![
                    "Check error logs and identify the root cause",
                    "Review recent deployments for potential issues",
                    "Coordinate with the on-call engineer if needed",
                ],
                suggested_actions: vec!["View logs", "Check metrics", "Contact on-call"],
                context_links: vec![
                    ContextLink { label: "Error Dashboard", kind: "dashboard" },
                    ContextLink { label: "Recent Deployments", kind: "deployment" },
                ],
            },
        },
        InboxItem {
            id: "5",
            kind: ItemKind::Message,
            title: "Weekly Team Sync Notes",
            preview: "Summary of key discussion points and action items from this week's team sync.",
            from: "Team",
            received_at: "3d ago",
            priority: Priority::Low,
            tags: vec!["notes", "team"],
            detail: ItemDetail {
                summary: "Weekly team sync notes have been shared, including key discussion points and action items from this week's meeting.",
                action_items: vec![
                    "Review action items assigned to you",
                    "Update project status if needed",
                    "Confirm attendance for next week's sync",
                ],
                suggested_actions: vec!["View notes", "Update status", "RSVP"],
                context_links: vec![
                    ContextLink { label: "Meeting Notes", kind: "document" },
                    ContextLink { label: "Team Calendar", kind: "calendar" },
                ],
            },
        },
    ]
}

/// Case-insensitive substring search over title, preview, sender, and tags.
/// A blank (or whitespace-only) query matches everything; a non-blank query
/// is matched verbatim, surrounding whitespace included. No ranking, no
/// pagination — the list is five items long.
pub fn filter_items<'a>(items: &'a [InboxItem], query: &str) -> Vec<&'a InboxItem> {
    if query.trim().is_empty() {
        return items.iter().collect();
    }
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&query)
                || item.preview.to_lowercase().contains(&query)
                || item.from.to_lowercase().contains(&query)
                || item.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        })
        .collect()
}
