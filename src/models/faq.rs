use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a frequently asked question entry
#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::faqs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Faq {
    /// Unique identifier for the entry (UUID v4 as string)
    id: String,

    /// The question text
    question: String,

    /// The answer text
    answer: String,

    /// Position within the FAQ listing
    sort_order: i32,

    /// Whether the entry is visible on the public site
    is_active: bool,

    /// When this entry was created
    created_at: NaiveDateTime,

    /// When this entry was last updated
    updated_at: NaiveDateTime,
}

impl Faq {
    /// Creates a new, active FAQ entry at the given position
    pub fn new(question: String, answer: String, sort_order: i32) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            question,
            answer,
            sort_order,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Gets the entry's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the question text
    pub fn get_question(&self) -> String {
        self.question.clone()
    }

    /// Sets the question text
    pub fn set_question(&mut self, question: String) {
        self.question = question;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the answer text
    pub fn get_answer(&self) -> String {
        self.answer.clone()
    }

    /// Sets the answer text
    pub fn set_answer(&mut self, answer: String) {
        self.answer = answer;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the entry's position in the listing
    pub fn get_sort_order(&self) -> i32 {
        self.sort_order
    }

    /// Gets whether the entry is visible
    pub fn get_is_active(&self) -> bool {
        self.is_active
    }

    /// Sets whether the entry is visible
    pub fn set_is_active(&mut self, is_active: bool) {
        self.is_active = is_active;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the entry's creation timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}
