use anyhow::Result;
use tracing_subscriber::fmt::time::OffsetTime;

pub mod assert;
pub mod linalg;
pub mod scalar;

pub mod re_float {
    use crate::util::linalg::{Matrix3, Matrix4, Quaternion, Vec2, Vec3};
    use num_traits::Zero;

    /// Finiteness over every component of a value type.
    pub trait ReFloat {
        fn is_finite(&self) -> bool;
    }

    impl ReFloat for f32 {
        fn is_finite(&self) -> bool {
            f32::is_finite(*self)
        }
    }

    impl ReFloat for Vec2 {
        fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite()
        }
    }

    impl ReFloat for Vec3 {
        fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
        }
    }

    impl ReFloat for Quaternion {
        fn is_finite(&self) -> bool {
            self.as_array().iter().all(|c| c.is_finite())
        }
    }

    impl ReFloat for Matrix3 {
        fn is_finite(&self) -> bool {
            self.as_slice().iter().all(|c| c.is_finite())
        }
    }

    impl ReFloat for Matrix4 {
        fn is_finite(&self) -> bool {
            self.as_slice().iter().all(|c| c.is_finite())
        }
    }

    pub fn force_positive_zero(x: f32) -> f32 {
        if x.is_zero() { 0.0 } else { x }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn force_positive_zero_flips_negative_zero() {
            assert!(force_positive_zero(-0.0).is_sign_positive());
            assert_eq!(force_positive_zero(-2.5), -2.5);
        }

        #[test]
        fn re_float_is_finite() {
            assert!(Vec3::new(1.0, 2.0, 3.0).is_finite());
            assert!(!Vec2::new(f32::NAN, 0.0).is_finite());
            assert!(Matrix4::identity().is_finite());
            let mut m = Matrix3::identity();
            m[4] = f32::INFINITY;
            assert!(!m.is_finite());
            assert!(!Quaternion::new(0.0, 0.0, 0.0, f32::NAN).is_finite());
        }
    }
}

/// Installs a `tracing` subscriber printing UTC timestamps and source locations to stderr.
pub fn setup_log() -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;
    Ok(())
}
