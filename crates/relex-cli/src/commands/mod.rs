pub mod dot;
pub mod input;
pub mod post;
pub mod table;
