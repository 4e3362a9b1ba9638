use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents a site-wide key/value setting (phone number, office hours,
/// social links and so on)
#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::site_settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SiteSetting {
    /// Setting key, unique across the table
    key: String,

    /// Setting value, stored as plain text
    value: String,

    /// When this setting was last written
    updated_at: NaiveDateTime,
}

impl SiteSetting {
    /// Creates a new setting with the current timestamp
    pub fn new(key: String, value: String) -> Self {
        Self {
            key,
            value,
            updated_at: Utc::now().naive_utc(),
        }
    }

    /// Gets the setting's key
    pub fn get_key(&self) -> String {
        self.key.clone()
    }

    /// Gets the setting's value
    pub fn get_value(&self) -> String {
        self.value.clone()
    }

    /// Sets the setting's value
    pub fn set_value(&mut self, value: String) {
        self.value = value;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the setting's last write timestamp as a DateTime<Utc>
    pub fn get_updated_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.updated_at, Utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_new() {
        let setting = SiteSetting::new("phone".to_string(), "+1 503 555 0100".to_string());

        assert_eq!(setting.get_key(), "phone");
        assert_eq!(setting.get_value(), "+1 503 555 0100");
    }
}
