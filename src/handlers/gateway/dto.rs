//! JSON bodies returned by the translator.
//!
//! Field names and values mirror the protobuf records one to one.

use serde::{Deserialize, Serialize};

use crate::proto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBody {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileBody {
    pub id: i32,
    pub bio: String,
    pub website: String,
    pub company: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductBody {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
}

impl From<proto::User> for UserBody {
    fn from(user: proto::User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            location: user.location,
        }
    }
}

impl From<proto::Profile> for ProfileBody {
    fn from(profile: proto::Profile) -> Self {
        Self {
            id: profile.id,
            bio: profile.bio,
            website: profile.website,
            company: profile.company,
            role: profile.role,
        }
    }
}

impl From<proto::Product> for ProductBody {
    fn from(product: proto::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
        }
    }
}
