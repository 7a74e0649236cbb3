//! The types under test and the searches run on each.
//!
//! The order of rows is fixed and matches the printed report.

use half::f16;
use macheps_core::vector::{Vec2, Vec3, ulps_same};
use macheps_search::{Config, additive, multiplicative};
use nalgebra::{Vector2, Vector3};
use rust_decimal::Decimal;

use crate::report::{Row, Table};

/// Title of the multiplicative table.
pub const MULTIPLICATIVE_TITLE: &str = "min x s.t. one != x; eps = x-one: Binary Search";

/// Title of the additive table.
pub const ADDITIVE_TITLE: &str = "min eps s.t. one != eps + one: Binary Search";

/// Runs the multiplicative search on every type.
///
/// The `nalgebra::Vector2` type runs twice: once with exact equality and once
/// with its default `ulps_eq` comparison steering the bounds.
#[must_use]
pub fn multiplicative(config: &Config) -> Table {
    let f32_eps = Some(f64::from(f32::EPSILON));

    let rows = vec![
        Row::new(
            "`nalgebra::Vector2`",
            multiplicative::search_unobserved::<Vector2<f32>>(config),
            None,
        ),
        Row::new(
            "`nalgebra::Vector3`",
            multiplicative::search_unobserved::<Vector3<f32>>(config),
            None,
        ),
        Row::new(
            "`nalgebra::Vector2` ulps",
            multiplicative::search_by::<Vector2<f32>, _>(config, ulps_same),
            None,
        ),
        Row::new(
            "`Vec2`",
            multiplicative::search_unobserved::<Vec2>(config),
            None,
        ),
        Row::new(
            "`Vec3`",
            multiplicative::search_unobserved::<Vec3>(config),
            None,
        ),
        Row::new(
            "`f32`",
            multiplicative::search_unobserved::<f32>(config),
            f32_eps,
        ),
        Row::new(
            "`f32` halving",
            multiplicative::search_halving_unobserved::<f32>(config),
            f32_eps,
        ),
        Row::new(
            "`f64`",
            multiplicative::search_unobserved::<f64>(config),
            Some(f64::EPSILON),
        ),
        Row::new(
            "`f16`",
            multiplicative::search_unobserved::<f16>(config),
            Some(f16::EPSILON.to_f64()),
        ),
        Row::new(
            "`Decimal`",
            multiplicative::search_unobserved::<Decimal>(config),
            None,
        ),
    ];

    Table::new(MULTIPLICATIVE_TITLE, rows)
}

/// Runs the additive search on the scalar floating-point types.
#[must_use]
pub fn additive(config: &Config) -> Table {
    let rows = vec![
        Row::new(
            "`f32`",
            additive::search_unobserved::<f32>(config),
            Some(f64::from(f32::EPSILON)),
        ),
        Row::new(
            "`f64`",
            additive::search_unobserved::<f64>(config),
            Some(f64::EPSILON),
        ),
        Row::new(
            "`f16`",
            additive::search_unobserved::<f16>(config),
            Some(f16::EPSILON.to_f64()),
        ),
    ];

    Table::new(ADDITIVE_TITLE, rows)
}
