//! User record types
//!
//! The user is the entity tracked by the Record Service. Every field is
//! optional on the wire: zero values are omitted when serializing and absent
//! keys decode to zero values.

use serde::{Deserialize, Serialize};

use super::{is_false, is_zero};

/// A user record as stored by the Record Service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned by the Record Service; never changed by the client
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub age: i64,
    /// Carried items; may be entirely absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bag: Option<Backpack>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_adult: bool,
}

impl User {
    /// Create a user with an identifier and name
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the age
    pub fn with_age(mut self, age: i64) -> Self {
        self.age = age;
        self
    }

    /// Attach a backpack
    pub fn with_bag(mut self, bag: Backpack) -> Self {
        self.bag = Some(bag);
        self
    }

    /// Mark the user as adult (or not)
    pub fn with_adult(mut self, is_adult: bool) -> Self {
        self.is_adult = is_adult;
        self
    }

    /// Get the backpack, creating an empty one if the user carries none
    pub fn bag_mut(&mut self) -> &mut Backpack {
        self.bag.get_or_insert_with(Backpack::default)
    }

    /// Food carried, or an empty string when there is no bag
    pub fn food(&self) -> &str {
        self.bag.as_ref().map(|b| b.food.as_str()).unwrap_or_default()
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User {{ id: {}, name: {:?}, age: {}, adult: {}",
            self.id, self.name, self.age, self.is_adult
        )?;
        match &self.bag {
            Some(bag) => write!(
                f,
                ", bag: {{ phone: {:?}, food: {:?}, gun: {:?} }} }}",
                bag.phone, bag.food, bag.gun
            ),
            None => write!(f, " }}"),
        }
    }
}

/// Items carried by a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backpack {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub food: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gun: String,
}

impl Backpack {
    /// True when no item is carried
    pub fn is_empty(&self) -> bool {
        self.phone.is_empty() && self.food.is_empty() && self.gun.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_fields_are_omitted() {
        let user = User::new(1, "Old");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Old"}"#);
    }

    #[test]
    fn test_absent_fields_decode_to_zero() {
        let user: User = serde_json::from_str("{}").unwrap();
        assert_eq!(user, User::default());

        let user: User = serde_json::from_str(r#"{"id":7,"bag":{"food":"Cola"}}"#).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.name.is_empty());
        assert_eq!(user.food(), "Cola");
        assert!(user.bag.as_ref().unwrap().phone.is_empty());
    }

    #[test]
    fn test_full_user_serialization() {
        let user = User::new(3, "Sam")
            .with_age(30)
            .with_adult(true)
            .with_bag(Backpack {
                phone: "Nokia".to_string(),
                food: String::new(),
                gun: "Colt".to_string(),
            });

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"age\":30"));
        assert!(json.contains("\"is_adult\":true"));
        assert!(json.contains("\"bag\":{\"phone\":\"Nokia\",\"gun\":\"Colt\"}"));

        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }

    #[test]
    fn test_bag_mut_creates_missing_bag() {
        let mut user = User::new(1, "Old");
        assert_eq!(user.food(), "");

        user.bag_mut().food = "Bread".to_string();
        assert_eq!(user.food(), "Bread");
        assert!(!user.bag.as_ref().unwrap().is_empty());
    }

    #[test]
    fn test_display() {
        let user = User::new(1, "Old").with_age(30);
        assert_eq!(
            user.to_string(),
            "User { id: 1, name: \"Old\", age: 30, adult: false }"
        );
    }
}
