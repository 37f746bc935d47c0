#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{debug, error, info, warn};

#[allow(unused_imports)]
pub use crate::{check, check_almost_eq, check_eq, check_lt, current_location};

#[allow(unused_imports)]
pub use crate::{
    core::config::*,
    util::{
        assert::*,
        linalg,
        linalg::{
            look_at, perspective, perspective_with_planes, triangle_area, Matrix3, Matrix4,
            Quaternion, Vec2, Vec3,
        },
        re_float::ReFloat,
        scalar,
        scalar::{high_nibble, low_nibble, max_power_of_two, to_degrees, to_radians},
    },
};
