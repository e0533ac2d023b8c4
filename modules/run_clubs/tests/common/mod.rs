//! Common test fixtures shared by the service and storage tests

#![allow(dead_code)]

use run_clubs::{ClubCategory, NewAddress, NewClub};

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

pub fn club(title: &str, category: ClubCategory, city: &str, state: &str) -> NewClub {
    NewClub {
        title: title.to_string(),
        description: format!("This is the description of {}", title),
        image: Some("https://www.eatthis.com/wp-content/uploads/sites/4/2020/05/running.jpg".to_string()),
        category,
        address: NewAddress {
            street: "123 Main St".to_string(),
            city: city.to_string(),
            state: state.to_string(),
        },
    }
}

/// The club the state filter is expected to find
pub fn charlotte_club() -> NewClub {
    club("Running Club 1", ClubCategory::City, "Charlotte", "NC")
}

/// Four clubs across three states, two of them in NC
pub fn sample_clubs() -> Vec<NewClub> {
    vec![
        charlotte_club(),
        club("Running Club 2", ClubCategory::Womens, "Michigan", "MI"),
        club("Running Club 3", ClubCategory::RoadRunner, "Raleigh", "NC"),
        club("Running Club 4", ClubCategory::City, "Chicago", "IL"),
    ]
}
