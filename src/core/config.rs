/// Default tolerance for zero and near-equality checks on [`Vec2`](crate::util::linalg::Vec2).
pub const EPSILON: f32 = 1e-5;
pub const ONE_OVER_EPSILON: f32 = 1. / EPSILON;
