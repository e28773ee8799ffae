mod checker;

pub use checker::ReachabilityChecker;
