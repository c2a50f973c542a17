use serde::{Deserialize, Serialize};

/// Roles recognized by the fetch policy. Anything else deserializes to
/// `Unknown` and yields an empty schedule rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "RUP")]
    Rup,
    #[serde(rename = "PROFESSEUR")]
    Professeur,
    #[serde(rename = "ETUDIANT")]
    Etudiant,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRef {
    pub nom: Role,
}

/// Teacher profile linked to a user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherProfile {
    pub id: i64,
}

/// Student profile linked to a user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: i64,
    #[serde(default)]
    pub classe_id: Option<i64>,
}

/// Authenticated user as returned by `GET /auth/me`. Established at login,
/// held for the session's lifetime, dropped on logout or token rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub role: RoleRef,
    #[serde(default)]
    pub professeur: Option<TeacherProfile>,
    #[serde(default)]
    pub etudiant: Option<StudentProfile>,
}

impl SessionUser {
    pub fn role(&self) -> Role {
        self.role.nom
    }
}
