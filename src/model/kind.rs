use strum::Display;

/// Entity tables that carry unique `username` and `email` columns.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Display)]
pub enum EntityKind {
    User,
    Employee,
}

impl EntityKind {
    pub fn table(self) -> &'static str {
        match self {
            EntityKind::User => "users",
            EntityKind::Employee => "employees",
        }
    }
}
