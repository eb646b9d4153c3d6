mod builder;
mod decision_tree_classifier;
mod decision_tree_regressor;
mod node;
pub mod split_criteria;

pub use decision_tree_classifier::DecisionTreeClassifier;
pub use decision_tree_regressor::DecisionTreeRegressor;
