use voca_rs::case::lower_case;
use voca_rs::manipulate::latinise;

/// Folds a string into the case- and diacritic-insensitive form every
/// search and tag comparison runs on ("Educação" and "educacao" collide).
pub fn normalize(subject: &str) -> String {
    lower_case(&latinise(subject))
}
