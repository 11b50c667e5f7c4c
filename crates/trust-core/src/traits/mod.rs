pub mod decay_calculator;

pub use decay_calculator::IDecayCalculator;
