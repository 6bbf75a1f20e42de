//! Closed-form projectile motion under constant gravity, no drag.

use super::params::SimulationParameters;

/// Position in meters, origin at the cannon mount, +y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhysicalPoint {
    pub x: f64,
    pub y: f64,
}

pub fn velocity_components(params: &SimulationParameters) -> (f64, f64) {
    let (sin_a, cos_a) = params.angle_rad().sin_cos();
    (params.initial_velocity * cos_a, params.initial_velocity * sin_a)
}

pub fn position_at(t: f64, params: &SimulationParameters) -> PhysicalPoint {
    let (vx, vy) = velocity_components(params);
    PhysicalPoint {
        x: vx * t,
        y: vy * t - 0.5 * params.gravity * t * t + params.launch_height,
    }
}

/// Positive root of y(t) = 0. `None` without gravity or when the shot never
/// comes down to the ground plane.
pub fn time_of_flight(params: &SimulationParameters) -> Option<f64> {
    let g = params.gravity;
    if g <= 0.0 {
        return None;
    }
    let (_, vy) = velocity_components(params);
    let disc = vy * vy + 2.0 * g * params.launch_height;
    if disc < 0.0 {
        return None;
    }
    let t = (vy + disc.sqrt()) / g;
    (t > 0.0).then_some(t)
}

pub fn predicted_range(params: &SimulationParameters) -> Option<f64> {
    time_of_flight(params).map(|t| position_at(t, params).x)
}

/// Highest y reached for t >= 0.
pub fn apex_height(params: &SimulationParameters) -> f64 {
    let (_, vy) = velocity_components(params);
    if vy <= 0.0 {
        return params.launch_height;
    }
    if params.gravity <= 0.0 {
        return f64::INFINITY;
    }
    params.launch_height + vy * vy / (2.0 * params.gravity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> SimulationParameters {
        SimulationParameters {
            initial_velocity: 18.0,
            angle_deg: 20.0,
            gravity: 9.81,
            launch_height: 1.75,
            ..Default::default()
        }
    }

    #[test]
    fn starts_at_launch_height() {
        let p = reference();
        let p0 = position_at(0.0, &p);
        assert_eq!(p0.x, 0.0);
        assert_eq!(p0.y, 1.75);
    }

    #[test]
    fn pure_and_order_independent() {
        let p = reference();
        let a = position_at(0.73, &p);
        let _ = position_at(1.2, &p);
        let b = position_at(0.73, &p);
        assert_eq!(a, b);
    }

    #[test]
    fn continuous_in_time() {
        let p = reference();
        let mut t = 0.0;
        while t < 1.5 {
            let a = position_at(t, &p);
            let b = position_at(t + 1e-7, &p);
            assert!((a.x - b.x).abs() < 1e-5);
            assert!((a.y - b.y).abs() < 1e-5);
            t += 0.05;
        }
    }

    #[test]
    fn reference_shot_root() {
        let p = reference();
        let t = time_of_flight(&p).unwrap();
        assert!((t - 1.49395).abs() < 1e-4, "t = {}", t);
        assert!(position_at(t, &p).y.abs() < 1e-9);
        let range = predicted_range(&p).unwrap();
        let (vx, _) = velocity_components(&p);
        assert!((range - vx * t).abs() < 1e-12);
    }

    #[test]
    fn zero_gravity_rises_forever() {
        let p = SimulationParameters { gravity: 0.0, ..reference() };
        assert!(time_of_flight(&p).is_none());
        assert!(position_at(100.0, &p).y > position_at(10.0, &p).y);
        assert!(apex_height(&p).is_infinite());
    }

    #[test]
    fn degenerate_speed_is_computed_not_rejected() {
        let still = SimulationParameters { initial_velocity: 0.0, ..reference() };
        assert_eq!(position_at(0.5, &still).x, 0.0);
        let backward = SimulationParameters { initial_velocity: -5.0, ..reference() };
        assert!(position_at(0.5, &backward).x < 0.0);
    }

    #[test]
    fn apex_of_reference_shot() {
        let p = reference();
        let (_, vy) = velocity_components(&p);
        let t_peak = vy / p.gravity;
        let peak = position_at(t_peak, &p).y;
        assert!((apex_height(&p) - peak).abs() < 1e-9);
    }
}
