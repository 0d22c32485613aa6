//! Record types held by the store.

use super::Record;

/// A directory entry.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub location: String,
}

/// Extended details for a user. `id` is the owning user's id.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i32,
    pub bio: String,
    pub website: String,
    pub company: String,
    pub role: String,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
}

impl Record for User {
    const KIND: &'static str = "user";

    fn id(&self) -> i32 {
        self.id
    }
}

impl Record for Profile {
    const KIND: &'static str = "profile";

    fn id(&self) -> i32 {
        self.id
    }
}

impl Record for Product {
    const KIND: &'static str = "product";

    fn id(&self) -> i32 {
        self.id
    }
}
