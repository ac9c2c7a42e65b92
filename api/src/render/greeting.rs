//! Greeting renderer

use crate::domain::entities::Age;

/// Render the greeting returned by the age endpoint.
///
/// Names are inserted verbatim, with no escaping.
pub fn render_greeting(name: &str, surname: &str, age: Age) -> String {
    format!("Hola {} {}, su edad es {} años.", name, surname, age)
}
