//! Library-level tests over real corpus directories, grouped by language family

pub mod all_languages;
