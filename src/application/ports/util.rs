// src/application/ports/util.rs

/// Turns an article title into the URL-safe part of its slug. May return an
/// empty string when the title has nothing sluggable.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
