pub mod constant_classifier;
pub mod spy_learner;

pub use constant_classifier::ConstantClassifier;
pub use spy_learner::{SpyHandle, SpyLearner};
