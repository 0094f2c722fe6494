//! Small random pickers: motivational quotes and snack ideas.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteAudience {
    Student,
    Teacher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnackSource {
    /// Something to bring from home.
    Lunchbox,
    /// Something to order at the school bar.
    Bar,
}

const STUDENT_QUOTES: &[&str] = &[
    "Success is not final, failure is not fatal: it is the courage to continue that counts. - Winston Churchill",
    "Believe in yourself and all that you are. - Christian D. Larson",
    "Don't wait. The time will never be just right. - Napoleon Hill",
    "The only way to do great work is to love what you do. - Steve Jobs",
    "The difference between ordinary and extraordinary is that little extra. - Jimmy Johnson",
    "The beautiful thing about learning is that nobody can take it away from you. - B.B. King",
    "I have not failed. I've just found 10,000 ways that won't work. - Thomas A. Edison",
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
    "Study not to know more, but to know better. - Seneca",
    "Every achievement starts with the decision to try.",
];

const TEACHER_QUOTES: &[&str] = &[
    "The art of teaching is the art of assisting discovery. - Mark Van Doren",
    "A good teacher can inspire hope, ignite the imagination, and instill a love of learning. - Brad Henry",
    "Those who know, do. Those who understand, teach. - Aristotle",
    "The task of the excellent teacher is to stimulate apparently ordinary people to unusual effort. - K. Patricia Cross",
    "To teach is to touch a life forever.",
    "Education is the most powerful weapon which you can use to change the world. - Nelson Mandela",
    "A teacher who loves learning earns the right and the ability to help others learn.",
    "Teaching is the one profession that creates all other professions.",
];

const LUNCHBOX_SNACKS: &[&str] = &[
    "Wholegrain bar",
    "Chocolate bar",
    "Nutella sandwich",
    "Ham sandwich",
    "Fresh seasonal fruit",
    "Dried fruit and nuts",
    "Crisps",
    "Rice cakes",
    "Crackers",
    "Taralli",
    "Biscuits",
    "Brioche",
    "Jam tart",
    "Breadsticks",
    "Fruit juice",
    "Salami sandwich",
    "Jam sandwich",
];

const BAR_SNACKS: &[&str] = &[
    "Piadina with ham and fontina",
    "Kebab",
    "Ham and cheese sandwich",
    "Espresso",
    "Cappuccino",
    "Chocolate croissant",
    "Jam croissant",
    "Custard croissant",
    "Salami sandwich",
    "Cutlet sandwich with ketchup",
    "Cutlet sandwich with mayonnaise",
    "Sweets",
    "Tea",
    "Pizza slice",
    "Fruit juice",
];

pub fn quotes(audience: QuoteAudience) -> &'static [&'static str] {
    match audience {
        QuoteAudience::Student => STUDENT_QUOTES,
        QuoteAudience::Teacher => TEACHER_QUOTES,
    }
}

pub fn snacks(source: SnackSource) -> &'static [&'static str] {
    match source {
        SnackSource::Lunchbox => LUNCHBOX_SNACKS,
        SnackSource::Bar => BAR_SNACKS,
    }
}

/// Uniformly random quote for `audience`.
pub fn random_quote<R: Rng + ?Sized>(audience: QuoteAudience, rng: &mut R) -> &'static str {
    quotes(audience).choose(rng).copied().unwrap_or_default()
}

/// Uniformly random snack idea from `source`.
pub fn random_snack<R: Rng + ?Sized>(source: SnackSource, rng: &mut R) -> &'static str {
    snacks(source).choose(rng).copied().unwrap_or_default()
}
