//! Closed circular paths from power-of-two roots of unity.

use holonomic_ball::{ComplexBall, RealBall};

/// The `steps + 1` vertices of a closed loop of the given radius around
/// the origin, counterclockwise from the positive real axis; the last
/// vertex is the first one, exactly. The primitive root of unity is
/// built by repeated principal square roots of −1, so `steps` must be a
/// power of two, at least 4.
///
/// # Panics
///
/// Panics when `steps` is not a power of two or is smaller than 4.
#[must_use]
pub fn circle_path(
    radius: &RealBall,
    steps: usize,
    prec: usize,
) -> Vec<ComplexBall> {
    assert!(
        steps.is_power_of_two() && steps >= 4,
        "steps must be a power of two, at least 4"
    );
    let mut w = ComplexBall::from_i64(-1);
    let mut k = steps;
    while k > 2 {
        w = w.sqrt(prec);
        k /= 2;
    }
    let mut points = Vec::with_capacity(steps + 1);
    let mut cur = ComplexBall::one();
    for _ in 0..steps {
        points.push(cur.mul_real(radius, prec));
        cur = cur.mul(&w, prec);
    }
    points.push(points[0].clone());
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: usize = 64;

    #[test]
    fn test_quarter_turns() {
        let path = circle_path(&RealBall::one(), 4, P);
        assert_eq!(path.len(), 5);
        assert!(path[0].contains_i64(1));
        assert!(path[1].contains_f64s(0.0, 1.0));
        assert!(path[2].contains_i64(-1));
        assert!(path[3].contains_f64s(0.0, -1.0));
        assert_eq!(path[4], path[0]);
    }

    #[test]
    fn test_vertices_lie_on_the_circle() {
        let path = circle_path(&RealBall::from_i64(3), 32, P);
        assert_eq!(path.len(), 33);
        for p in &path {
            assert!(p.abs(P).contains_i64(3));
        }
    }

    #[test]
    fn test_eighth_root_matches_cosine() {
        let path = circle_path(&RealBall::one(), 8, P);
        let c = std::f64::consts::FRAC_1_SQRT_2;
        // f64 constants are not exact; compare against a fattened ball.
        let mut want = RealBall::from_f64(c);
        want.add_error(&holonomic_ball::pow2(-50));
        assert!(path[1].re().overlaps(&want));
        assert!(path[1].im().overlaps(&want));
    }
}
