pub mod decision_tree;
mod learner;
mod probabilities;

pub use decision_tree::{DecisionTreeClassifier, DecisionTreeRegressor};
pub use learner::{Learner, LearnerError};
pub use probabilities::ProbabilityMatrix;
