pub mod dataset;
mod problem_type;

pub use problem_type::ProblemType;
