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

//! Great-circle distance and windowed speed estimation.

use crate::model::PositionSample;

/// Mean radius of the earth in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_009.0;

/// Reported speed when it cannot be derived from the history.
pub const UNKNOWN_SPEED: f64 = -1.0;

/// Maximum gap, in seconds and exclusive, between the last two samples for a speed estimate.
pub const SPEED_WINDOW_SECS: f64 = 2.0;

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Great-circle distance in meters between two `(latitude, longitude)` points in degrees.
///
/// Uses the haversine formula, which stays well-conditioned for short distances
/// (error up to roughly 0.5%).
///
/// ```
/// use fleet_relay::kinematics::distance_m;
///
/// let d = distance_m((0.0, 0.0), (0.0, 0.0001));
/// assert!((d - 11.1195).abs() < 1e-3);
/// ```
pub fn distance_m(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = phi2 - phi1;
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Distance in meters between two samples.
pub fn sample_distance_m(from: &PositionSample, to: &PositionSample) -> f64 {
    distance_m(
        (from.latitude, from.longitude),
        (to.latitude, to.longitude),
    )
}

/// Speed in meters per second derived from the last two samples of `history`.
///
/// Returns [`UNKNOWN_SPEED`] when there are fewer than two samples, when the last two
/// timestamps are equal, or when the gap between them is at least `SPEED_WINDOW_SECS`.
///
/// History is taken in arrival order. A reordered pair has a negative gap and therefore
/// yields a negative speed.
pub fn speed(history: &[PositionSample]) -> f64 {
    let [.., previous, latest] = history else {
        return UNKNOWN_SPEED;
    };

    let Some(gap_nanos) = latest
        .timestamp
        .signed_duration_since(previous.timestamp)
        .num_nanoseconds()
    else {
        return UNKNOWN_SPEED;
    };
    let gap_secs = gap_nanos as f64 / NANOS_PER_SEC;

    if gap_nanos == 0 || gap_secs >= SPEED_WINDOW_SECS {
        return UNKNOWN_SPEED;
    }

    sample_distance_m(previous, latest) / gap_secs
}
