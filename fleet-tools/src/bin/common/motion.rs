/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Rough vehicle motion model used to generate plausible position reports.
//!
//! Headings are radians measured anticlockwise from due east.

#![allow(dead_code)]

use rand::Rng;

/// Front gate of Trinity College, Dublin.
pub(crate) const START_LATITUDE: f64 = 53.344496;
pub(crate) const START_LONGITUDE: f64 = -6.259427;

/// About 100 km/h.
pub(crate) const MAX_SPEED_MPS: f64 = 28.0;
/// Largest speed change per tick, in m/s.
pub(crate) const MAX_SPEED_DELTA: f64 = 5.0;

const DEGREES_LATITUDE_PER_METER: f64 = 0.000009;
const METERS_PER_DEGREE_LONGITUDE_AT_EQUATOR: f64 = 111_319.5;

const VIN_PREFIX: &str = "1HGBH41JXMN";

pub(crate) fn make_vin(serial: usize) -> String {
    format!("{VIN_PREFIX}{serial:06}")
}

pub(crate) fn initial_speed<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..MAX_SPEED_MPS)
}

pub(crate) fn initial_heading<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..std::f64::consts::TAU)
}

/// Applies a random change in `[-5, 5)` and clamps the result to `[0, 28]`.
pub(crate) fn next_speed<R: Rng + ?Sized>(speed: f64, rng: &mut R) -> f64 {
    apply_speed_delta(speed, rng.gen_range(-MAX_SPEED_DELTA..MAX_SPEED_DELTA))
}

pub(crate) fn apply_speed_delta(speed: f64, delta: f64) -> f64 {
    (speed + delta).clamp(0.0, MAX_SPEED_MPS)
}

/// Advances `(latitude, longitude)` by `speed * duration_secs` meters along `heading`.
///
/// Flat-earth approximation; fine for sample data, not for navigation.
pub(crate) fn advance(
    latitude: f64,
    longitude: f64,
    speed: f64,
    heading: f64,
    duration_secs: f64,
) -> (f64, f64) {
    let distance = speed * duration_secs;
    let delta_x = distance * heading.cos();
    let delta_y = distance * heading.sin();

    let next_latitude = latitude + delta_y * DEGREES_LATITUDE_PER_METER;
    let degrees_longitude_per_meter =
        1.0 / (METERS_PER_DEGREE_LONGITUDE_AT_EQUATOR * latitude.to_radians().cos());
    let next_longitude = longitude + delta_x * degrees_longitude_per_meter;

    (next_latitude, next_longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn vin_is_zero_padded() {
        assert_eq!(make_vin(0), "1HGBH41JXMN000000");
        assert_eq!(make_vin(42), "1HGBH41JXMN000042");
        assert_eq!(make_vin(123_456), "1HGBH41JXMN123456");
    }

    #[test]
    fn speed_is_clamped() {
        assert_eq!(apply_speed_delta(2.0, -5.0), 0.0);
        assert_eq!(apply_speed_delta(26.0, 4.9), MAX_SPEED_MPS);
        assert_eq!(apply_speed_delta(10.0, 2.5), 12.5);
    }

    #[test]
    fn random_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut speed = initial_speed(&mut rng);
        assert!((0.0..MAX_SPEED_MPS).contains(&speed));

        for _ in 0..1_000 {
            let previous = speed;
            speed = next_speed(speed, &mut rng);
            assert!((0.0..=MAX_SPEED_MPS).contains(&speed));
            assert!((speed - previous).abs() <= MAX_SPEED_DELTA);
        }

        let heading = initial_heading(&mut rng);
        assert!((0.0..std::f64::consts::TAU).contains(&heading));
    }

    #[test]
    fn heading_north_moves_latitude_only() {
        let (latitude, longitude) = advance(START_LATITUDE, START_LONGITUDE, 10.0, FRAC_PI_2, 1.0);

        assert!((latitude - (START_LATITUDE + 0.00009)).abs() < 1e-12);
        assert!((longitude - START_LONGITUDE).abs() < 1e-12);
    }

    #[test]
    fn heading_west_scales_longitude_by_latitude() {
        let (latitude, longitude) = advance(0.0, 0.0, 111_319.5, PI, 1.0);

        assert!(latitude.abs() < 1e-9);
        assert!((longitude + 1.0).abs() < 1e-9);
    }

    #[test]
    fn stationary_vehicle_does_not_move() {
        assert_eq!(
            advance(START_LATITUDE, START_LONGITUDE, 0.0, 1.0, 1.0),
            (START_LATITUDE, START_LONGITUDE)
        );
    }
}
