//! Built-in record tables.

use super::{Product, Profile, User};

pub(super) fn users() -> Vec<User> {
    vec![
        user(1, "John Doe", "john@example.com", "New York"),
        user(2, "Jane Smith", "jane@example.com", "San Francisco"),
        user(3, "Bob Johnson", "bob@example.com", "Chicago"),
    ]
}

pub(super) fn profiles() -> Vec<Profile> {
    vec![
        profile(
            1,
            "Software Engineer with 10 years of experience building distributed systems",
            "https://johndoe.dev",
            "Tech Corp",
            "Senior Engineer",
        ),
        profile(
            2,
            "Product Designer focused on accessible, human-centered interfaces",
            "https://janesmith.design",
            "Design Studio",
            "Lead Designer",
        ),
        profile(
            3,
            "Data Scientist working on recommendation and ranking models",
            "https://bobjohnson.io",
            "Data Insights Inc",
            "Data Scientist",
        ),
    ]
}

pub(super) fn products() -> Vec<Product> {
    vec![
        product(1, "Laptop", "High-performance laptop", 999.99, 10),
        product(2, "Smartphone", "Latest smartphone model", 699.99, 20),
        product(3, "Headphones", "Noise-cancelling headphones", 199.99, 15),
    ]
}

fn user(id: i32, name: &str, email: &str, location: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        location: location.to_string(),
    }
}

fn profile(id: i32, bio: &str, website: &str, company: &str, role: &str) -> Profile {
    Profile {
        id,
        bio: bio.to_string(),
        website: website.to_string(),
        company: company.to_string(),
        role: role.to_string(),
    }
}

fn product(id: i32, name: &str, description: &str, price: f64, stock: i32) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        stock,
    }
}
