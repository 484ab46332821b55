pub mod health;
pub mod nicol;
