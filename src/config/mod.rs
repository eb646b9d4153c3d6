mod config_choice;
mod evaluation_choice;
mod evaluator_config;
mod tree_parameters;

pub use config_choice::ConfigChoice;
pub use evaluation_choice::*;
pub use evaluator_config::*;
pub use tree_parameters::TreeParameters;
