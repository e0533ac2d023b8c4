//! Rendering of command results as text or JSON

use crate::dto::{ClubDto, PokemonDto};
use anyhow::Result;
use pokemon_reviews::Pokemon;
use run_clubs::Club;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn pokemon_list(&self, items: &[Pokemon]) -> Result<()> {
        if self.json {
            let dtos: Vec<PokemonDto> = items.iter().map(Into::into).collect();
            return print_json(&dtos);
        }
        items.iter().for_each(pokemon_line);
        Ok(())
    }

    pub fn pokemon(&self, pokemon: &Pokemon) -> Result<()> {
        if self.json {
            return print_json(&PokemonDto::from(pokemon));
        }
        pokemon_line(pokemon);
        let categories: Vec<&str> = pokemon.categories.iter().map(|c| c.name.as_str()).collect();
        println!("      categories: {}", categories.join(", "));
        for review in &pokemon.reviews {
            println!(
                "      [{}] {} - {}",
                review.rating,
                review.reviewer.full_name(),
                review.text
            );
        }
        Ok(())
    }

    pub fn club_list(&self, items: &[Club]) -> Result<()> {
        if self.json {
            let dtos: Vec<ClubDto> = items.iter().map(Into::into).collect();
            return print_json(&dtos);
        }
        items.iter().for_each(club_line);
        Ok(())
    }

    pub fn club(&self, club: &Club) -> Result<()> {
        if self.json {
            return print_json(&ClubDto::from(club));
        }
        club_line(club);
        println!("      {}", club.description);
        println!("      {}", club.address.street);
        if let Some(image) = &club.image {
            println!("      image: {}", image);
        }
        println!("      created: {}", club.created_at.to_rfc3339());
        Ok(())
    }

    /// One value per line, or a JSON array
    pub fn values<T: Display + Serialize>(&self, items: &[T]) -> Result<()> {
        if self.json {
            return print_json(&items);
        }
        items.iter().for_each(|item| println!("{}", item));
        Ok(())
    }

    pub fn scalar<T: Display + Serialize>(&self, value: T) -> Result<()> {
        if self.json {
            return print_json(&value);
        }
        println!("{}", value);
        Ok(())
    }

    pub fn message(&self, text: &str) -> Result<()> {
        if self.json {
            return print_json(&serde_json::json!({ "message": text }));
        }
        println!("{}", text);
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn pokemon_line(p: &Pokemon) {
    println!("{:>4}  {:<20} {}", p.id, p.name, p.birth_date);
}

fn club_line(c: &Club) {
    println!(
        "{:>4}  {:<24} {:<12} {}, {}",
        c.id, c.title, c.category, c.address.city, c.address.state
    );
}
