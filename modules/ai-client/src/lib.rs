pub mod crew;
pub mod openai;

pub use crew::{Agent, Crew, Task};
pub use openai::OpenAi;
