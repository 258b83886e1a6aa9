pub mod director;
pub mod genre;
pub mod movie;
