// Activity scoring: min-max normalization and composite scores.

pub mod normalize;
pub mod score;
