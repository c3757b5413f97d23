pub mod health;
pub mod poem;
