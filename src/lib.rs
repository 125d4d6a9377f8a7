#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Procedural swim animation for rigid meshes.
//!
//! Tracks a moving follow target with exponential smoothing, drags a short
//! chain of spine control points after it, and displaces every mesh vertex
//! from its depth position along that spine — no bones, no physics. One
//! [`Creature::update`] call per display refresh runs the whole pipeline.

pub mod config;
pub mod creature;
pub mod deform;
pub mod errors;
pub mod follow;
pub mod mesh;
pub mod range;
pub mod spine;

pub use config::{CurveType, DepthNormalization, SwimConfig};
pub use creature::Creature;
pub use deform::DeformationEngine;
pub use errors::{Result, SwimmerError};
pub use follow::{BodyPose, FollowController};
pub use mesh::{DeformableMesh, MeshBuffers};
pub use range::Range;
pub use spine::{JOINT_COUNT, SpineCurve};
