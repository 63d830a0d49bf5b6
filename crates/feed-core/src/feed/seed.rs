//! Built-in demo feed

use crate::error::{FeedError, Result};
use crate::post::{Author, Post, PostBuilder};
use chrono::{DateTime, TimeZone, Utc};

fn at(year: i32, month: u32, day: u32, hour: u32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .ok_or_else(|| FeedError::Validation(format!("Invalid date {}-{}-{}", year, month, day)))
}

/// The two posts shown when no feed file is given
pub fn demo_posts() -> Result<Vec<Post>> {
    let body = [
        "Fala galeraa 👋",
        "Acabei de subir mais um projeto no meu portifa. É um projeto que fiz no NLW Return, evento da Rocketseat. O nome do projeto é DoctorCare 🚀",
    ];

    Ok(vec![
        PostBuilder::new(1)
            .author(Author::new(
                "Diego Fernandes",
                "CTO @Rocketseat",
                "https://github.com/diego3g.png",
            ))
            .published_at(at(2022, 5, 3, 20)?)
            .paragraph(body[0])
            .paragraph(body[1])
            .link("jane.design/doctorcare")
            .build()?,
        PostBuilder::new(2)
            .author(Author::new(
                "Mayk Brito",
                "Educator @Rocketseat",
                "https://github.com/maykbrito.png",
            ))
            .published_at(at(2022, 5, 10, 20)?)
            .paragraph(body[0])
            .paragraph(body[1])
            .link("jane.design/doctorcare")
            .build()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_posts() {
        let posts = demo_posts().unwrap();
        assert_eq!(posts.len(), 2);
        assert_ne!(posts[0].id, posts[1].id);
        assert!(posts.iter().all(|p| p.links().count() == 1));
    }
}
