//! Fixed startup dataset.
//!
//! The store has no persistence or external configuration; every process
//! starts from this fixture. Seed ids are short hand-written tokens, unlike
//! generated ids - consumers must treat both as opaque.

use chrono::NaiveDate;

use crate::domain::{
    ActivityBody, ActivityEntry, ActivityKind, AllocationStatus, Assignment, AssignmentStatus,
    AssignmentType, Book, BookStatus, Notification, NotificationKind, Resource, ToolAllocation,
    User, UserRole, Workshop, WorkshopKind,
};

/// Everything the store owns at startup.
///
/// `current_user` names the session identity and is a clone of one of
/// `users`; the rotation in `switch_user` anchors on the roles present here.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub current_user: User,
    pub users: Vec<User>,
    pub resources: Vec<Resource>,
    pub allocations: Vec<ToolAllocation>,
    pub assignments: Vec<Assignment>,
    pub activity: Vec<ActivityEntry>,
    pub notifications: Vec<Notification>,
    pub books: Vec<Book>,
    pub workshops: Vec<Workshop>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed literals are all valid calendar dates.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "u1".to_string(),
            name: "Sarah Jenkins".to_string(),
            email: "sarah.j@company.com".to_string(),
            role: UserRole::SuperAdmin,
            department: "People Operations".to_string(),
            avatar_url: "https://picsum.photos/id/1011/200/200".to_string(),
            manager_id: None,
        },
        User {
            id: "u4".to_string(),
            name: "Mike Ross".to_string(),
            email: "mike.r@company.com".to_string(),
            role: UserRole::Admin,
            department: "Engineering Lead".to_string(),
            avatar_url: "https://picsum.photos/id/1005/200/200".to_string(),
            manager_id: Some("u1".to_string()),
        },
        User {
            id: "u2".to_string(),
            name: "David Chen".to_string(),
            email: "david.c@company.com".to_string(),
            role: UserRole::Staff,
            department: "Engineering".to_string(),
            avatar_url: "https://picsum.photos/id/1012/200/200".to_string(),
            manager_id: Some("u4".to_string()),
        },
        User {
            id: "u3".to_string(),
            name: "Elena Rodriguez".to_string(),
            email: "elena.r@company.com".to_string(),
            role: UserRole::Staff,
            department: "Product".to_string(),
            avatar_url: "https://picsum.photos/id/1027/200/200".to_string(),
            manager_id: Some("u4".to_string()),
        },
    ]
}

fn seed_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "r1".to_string(),
            name: "Talstack".to_string(),
            logo_url: "https://logo.clearbit.com/talstack.com".to_string(),
            url: "https://talstack.com".to_string(),
            description: "Our primary platform for technical skills and career development."
                .to_string(),
            is_official: true,
        },
        Resource {
            id: "r2".to_string(),
            name: "Coursera".to_string(),
            logo_url:
                "https://upload.wikimedia.org/wikipedia/commons/9/97/Coursera-Logo_600x600.svg"
                    .to_string(),
            url: "https://coursera.org".to_string(),
            description: "University-grade courses and professional certifications.".to_string(),
            is_official: false,
        },
        Resource {
            id: "r3".to_string(),
            name: "O'Reilly Learning".to_string(),
            logo_url:
                "https://upload.wikimedia.org/wikipedia/commons/6/67/O%27Reilly_Media_logo_2019.svg"
                    .to_string(),
            url: "https://oreilly.com".to_string(),
            description: "Technical books and video courses.".to_string(),
            is_official: true,
        },
    ]
}

fn seed_allocations() -> Vec<ToolAllocation> {
    vec![
        ToolAllocation {
            id: "ta1".to_string(),
            resource_id: "r3".to_string(),
            user_id: "u2".to_string(),
            assigned_by: "Sarah Jenkins".to_string(),
            start_date: date(2023, 1, 15),
            end_date: None,
            status: AllocationStatus::Active,
        },
        ToolAllocation {
            id: "ta2".to_string(),
            resource_id: "r2".to_string(),
            user_id: "u3".to_string(),
            assigned_by: "Sarah Jenkins".to_string(),
            start_date: date(2023, 2, 1),
            end_date: Some(date(2023, 8, 1)),
            status: AllocationStatus::Returned,
        },
    ]
}

fn seed_assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            id: "a1".to_string(),
            title: "Advanced TypeScript: Generics & Utility Types".to_string(),
            kind: AssignmentType::Course,
            assigned_by: "Mike Ross".to_string(),
            assigned_to: "u2".to_string(),
            due_date: date(2023, 11, 15),
            status: AssignmentStatus::InProgress,
            source_name: "Talstack".to_string(),
            grade: None,
            feedback: None,
            description: Some(
                "Deep dive into advanced typing patterns to improve code safety.".to_string(),
            ),
            estimated_time: Some("4h 30m".to_string()),
        },
        Assignment {
            id: "a2".to_string(),
            title: "System Design: Scalability Patterns".to_string(),
            kind: AssignmentType::Course,
            assigned_by: "Mike Ross".to_string(),
            assigned_to: "u2".to_string(),
            due_date: date(2023, 11, 30),
            status: AssignmentStatus::NotStarted,
            source_name: "Talstack".to_string(),
            grade: None,
            feedback: None,
            description: Some(
                "Understanding load balancing, caching strategies, and partitioning.".to_string(),
            ),
            estimated_time: Some("6h 00m".to_string()),
        },
        Assignment {
            id: "a3".to_string(),
            title: "Q4 Security Compliance Training".to_string(),
            kind: AssignmentType::Course,
            assigned_by: "Sarah Jenkins".to_string(),
            assigned_to: "u2".to_string(),
            due_date: date(2023, 12, 1),
            status: AssignmentStatus::NotStarted,
            source_name: "Internal".to_string(),
            grade: None,
            feedback: None,
            description: Some(
                "Mandatory annual security review for all engineering staff.".to_string(),
            ),
            estimated_time: Some("1h 00m".to_string()),
        },
        Assignment {
            id: "a4".to_string(),
            title: "Effective Communication for Leaders".to_string(),
            kind: AssignmentType::Workshop,
            assigned_by: "Sarah Jenkins".to_string(),
            assigned_to: "u2".to_string(),
            due_date: date(2023, 11, 20),
            status: AssignmentStatus::Completed,
            source_name: "Internal".to_string(),
            grade: Some("Pass".to_string()),
            feedback: Some("Great participation in the roleplay scenarios.".to_string()),
            description: Some("Workshop focusing on giving feedback and running 1:1s.".to_string()),
            estimated_time: Some("2h 00m".to_string()),
        },
    ]
}

fn seed_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            id: "feed1".to_string(),
            user_id: "u4".to_string(),
            user_name: "Mike Ross".to_string(),
            user_avatar: "https://picsum.photos/id/1005/200/200".to_string(),
            timestamp: "10 mins ago".to_string(),
            kind: ActivityKind::Post,
            body: ActivityBody::Post {
                channel: "#ai-learnings".to_string(),
                content: "Just watched this incredible breakdown of how mixture-of-experts \
                          models actually route tokens. Essential viewing for the infra team."
                    .to_string(),
                link_url: Some("https://youtube.com/watch?v=example".to_string()),
                link_title: Some("Visualizing MoE Architecture".to_string()),
            },
        },
        ActivityEntry {
            id: "feed2".to_string(),
            user_id: "u3".to_string(),
            user_name: "Elena Rodriguez".to_string(),
            user_avatar: "https://picsum.photos/id/1027/200/200".to_string(),
            timestamp: "2 hours ago".to_string(),
            kind: ActivityKind::Post,
            body: ActivityBody::Post {
                channel: "#random".to_string(),
                content: "Found a great list of \"Falsehoods programmers believe about time\". \
                          We should definitely check our timezone logic again"
                    .to_string(),
                link_url: Some("https://infiniteundo.com/compare".to_string()),
                link_title: Some("Falsehoods about Time".to_string()),
            },
        },
        ActivityEntry {
            id: "feed3".to_string(),
            user_id: "u1".to_string(),
            user_name: "Sarah Jenkins".to_string(),
            user_avatar: "https://picsum.photos/id/1011/200/200".to_string(),
            timestamp: "4 hours ago".to_string(),
            kind: ActivityKind::Post,
            body: ActivityBody::Post {
                channel: "#book-club".to_string(),
                content: "Reminder! We are discussing Chapter 4 of \"Designing Data-Intensive \
                          Applications\" this Friday. Please come prepared with one question."
                    .to_string(),
                link_url: None,
                link_title: None,
            },
        },
        ActivityEntry {
            id: "feed4".to_string(),
            user_id: "u2".to_string(),
            user_name: "David Chen".to_string(),
            user_avatar: "https://picsum.photos/id/1012/200/200".to_string(),
            timestamp: "Yesterday".to_string(),
            kind: ActivityKind::Post,
            body: ActivityBody::Post {
                channel: "#engineering".to_string(),
                content: "Just finished the \"Advanced TypeScript\" module on Talstack. Highly \
                          recommend the section on conditional types."
                    .to_string(),
                link_url: Some("#".to_string()),
                link_title: Some("Talstack: Advanced TypeScript".to_string()),
            },
        },
    ]
}

fn seed_notifications() -> Vec<Notification> {
    vec![Notification {
        id: "n1".to_string(),
        title: "New Workshop Added".to_string(),
        message: "Advanced React Patterns has been scheduled.".to_string(),
        date: "1 hour ago".to_string(),
        read: false,
        kind: NotificationKind::Info,
    }]
}

fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: "b1".to_string(),
            title: "Designing Data-Intensive Applications".to_string(),
            author: "Martin Kleppmann".to_string(),
            cover_url: "https://m.media-amazon.com/images/I/91rr3B9jERL._AC_UF1000,1000_QL80_.jpg"
                .to_string(),
            discussion_date: date(2023, 11, 25),
            location: Some("Main Conference Room".to_string()),
            meeting_url: None,
            slack_thread_url: None,
            description: "The big ideas behind reliable, scalable, and maintainable systems."
                .to_string(),
            status: BookStatus::Current,
        },
        Book {
            id: "b2".to_string(),
            title: "Atomic Habits".to_string(),
            author: "James Clear".to_string(),
            cover_url: "https://m.media-amazon.com/images/I/81F90H7hnML._AC_UF1000,1000_QL80_.jpg"
                .to_string(),
            discussion_date: date(2023, 10, 15),
            location: None,
            meeting_url: None,
            slack_thread_url: None,
            description: "An easy & proven way to build good habits & break bad ones.".to_string(),
            status: BookStatus::Archived,
        },
    ]
}

fn seed_workshops() -> Vec<Workshop> {
    vec![
        Workshop {
            id: "w1".to_string(),
            title: "Q4 Leadership Workshop".to_string(),
            date: date(2023, 11, 20),
            instructor: "External Consultant".to_string(),
            description: "Developing core leadership skills for new managers.".to_string(),
            kind: WorkshopKind::InPerson,
            location: Some("Room 304".to_string()),
            meeting_url: None,
            recording_url: None,
            materials_url: Some("https://example.com/slides".to_string()),
            attendees: vec!["u2".to_string(), "u3".to_string()],
        },
        Workshop {
            id: "w2".to_string(),
            title: "Advanced React Patterns".to_string(),
            date: date(2023, 9, 10),
            instructor: "Senior Engineer".to_string(),
            description: "Deep dive into hooks and performance.".to_string(),
            kind: WorkshopKind::Virtual,
            location: None,
            meeting_url: Some("https://meet.google.com/abc-defg-hij".to_string()),
            recording_url: Some("https://example.com/video".to_string()),
            materials_url: None,
            attendees: vec!["u2".to_string()],
        },
    ]
}

impl Default for SeedData {
    fn default() -> Self {
        let users = seed_users();
        // Session opens as the super-admin, the first seeded user.
        let current_user = users[0].clone();
        Self {
            current_user,
            users,
            resources: seed_resources(),
            allocations: seed_allocations(),
            assignments: seed_assignments(),
            activity: seed_activity(),
            notifications: seed_notifications(),
            books: seed_books(),
            workshops: seed_workshops(),
        }
    }
}
