use octopoint_common::item_with;

/// Trait for floating-point types, so that other things can be generic over {f32, f64} without
/// having to use [weird macros](octopoint_common::item_with).
pub trait Float:
    num_traits::Float
    + nalgebra::Scalar
    + std::fmt::Display
    + Copy
    + Send
    + Sync
{
    const ONE: Self;
    const HALF: Self;
}

// this macro lets us impl Float for both f32 and f64 without having to copy/paste,
// but it feels very goofy
item_with! {Real: f32, f64 => impl Float for Real {
    const ONE: Self = 1.0;
    const HALF: Self = 0.5;
}}
