//! Common test fixtures shared by the service and storage tests

#![allow(dead_code)]

use chrono::NaiveDate;
use pokemon_reviews::{NewPokemon, NewReview, NewReviewer};

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

pub fn birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1903, 1, 1).unwrap()
}

fn review(text: &str, rating: i32, first: &str, last: &str) -> NewReview {
    NewReview {
        title: "Pikachu".to_string(),
        text: text.to_string(),
        rating,
        reviewer: NewReviewer::new(first, last),
    }
}

/// Pikachu with the three reviews rated 5, 5 and 1
pub fn pikachu() -> NewPokemon {
    NewPokemon {
        name: "Pikachu".to_string(),
        birth_date: birth_date(),
        categories: vec!["Electric".to_string()],
        reviews: vec![
            review("Pickahu is the best pokemon, because it is electric", 5, "Teddy", "Smith"),
            review("Pickachu is the best a killing rocks", 5, "Taylor", "Jones"),
            review("Pickachu, pikachu, pikachu", 1, "Jessica", "McGregor"),
        ],
    }
}

/// A Pokemon without reviews
pub fn unreviewed(name: &str, categories: &[&str]) -> NewPokemon {
    NewPokemon {
        name: name.to_string(),
        birth_date: birth_date(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        reviews: Vec::new(),
    }
}
