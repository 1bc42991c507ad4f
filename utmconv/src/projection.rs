// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The geofmt Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Karney's Krüger-series transverse Mercator projection.
//!
//! See Karney, "Transverse Mercator with an accuracy of a few nanometers",
//! J. Geodesy 85(8), 2011. The series are truncated at 6th order in the
//! third flattening n.

use crate::coordinate::{central_meridian, zone_for, Hemisphere, UtmCoordinate};
use crate::datum::Datum;

/// UTM scale factor on the central meridian.
const K0: f64 = 0.9996;

/// Offset added to x so that eastings stay positive within a zone.
const FALSE_EASTING: f64 = 500_000.0;

/// Offset added to southern-hemisphere northings.
const FALSE_NORTHING: f64 = 10_000_000.0;

/// Projects a geodetic coordinate onto the UTM grid.
///
/// The zone is derived from the longitude; no Norway/Svalbard zone
/// exceptions are applied.
pub fn to_utm(latitude: f64, longitude: f64, datum: &Datum) -> UtmCoordinate {
    let zone = zone_for(longitude);
    let lambda0 = central_meridian(zone).to_radians();

    let phi = latitude.to_radians();
    let lambda = longitude.to_radians() - lambda0;

    let f = datum.flattening;
    let n = f / (2.0 - f);
    let e = (f * (2.0 - f)).sqrt();

    let cos_lambda = lambda.cos();
    let sin_lambda = lambda.sin();

    // Conformal latitude, expressed through its tangent.
    let tau = phi.tan();
    let sigma = (e * (e * tau / tau.hypot(1.0)).atanh()).sinh();
    let tau_c = tau * sigma.hypot(1.0) - sigma * tau.hypot(1.0);

    let xi_c = tau_c.atan2(cos_lambda);
    let eta_c = (sin_lambda / tau_c.hypot(cos_lambda)).asinh();

    let radius = rectifying_radius(datum.equatorial_radius, n);
    let alpha = alpha_series(n);

    let mut xi = xi_c;
    let mut eta = eta_c;
    for (j, coefficient) in alpha.iter().enumerate() {
        let k = 2.0 * (j as f64 + 1.0);
        xi += coefficient * (k * xi_c).sin() * (k * eta_c).cosh();
        eta += coefficient * (k * xi_c).cos() * (k * eta_c).sinh();
    }

    let x = K0 * radius * eta;
    let y = K0 * radius * xi;

    let hemisphere = if latitude >= 0.0 {
        Hemisphere::Northern
    } else {
        Hemisphere::Southern
    };

    UtmCoordinate {
        zone,
        hemisphere,
        easting: x + FALSE_EASTING,
        northing: match hemisphere {
            Hemisphere::Northern => y,
            Hemisphere::Southern => y + FALSE_NORTHING,
        },
    }
}

/// Inverse projection from the UTM grid to latitude and longitude in
/// degrees.
pub fn to_lat_lon(utm: &UtmCoordinate, datum: &Datum) -> (f64, f64) {
    let lambda0 = central_meridian(utm.zone).to_radians();

    let x = utm.easting - FALSE_EASTING;
    let y = match utm.hemisphere {
        Hemisphere::Northern => utm.northing,
        Hemisphere::Southern => utm.northing - FALSE_NORTHING,
    };

    let f = datum.flattening;
    let n = f / (2.0 - f);
    let e = (f * (2.0 - f)).sqrt();
    let e2 = e * e;

    let radius = rectifying_radius(datum.equatorial_radius, n);
    let xi = y / (K0 * radius);
    let eta = x / (K0 * radius);

    let beta = beta_series(n);

    let mut xi_c = xi;
    let mut eta_c = eta;
    for (j, coefficient) in beta.iter().enumerate() {
        let k = 2.0 * (j as f64 + 1.0);
        xi_c -= coefficient * (k * xi).sin() * (k * eta).cosh();
        eta_c -= coefficient * (k * xi).cos() * (k * eta).sinh();
    }

    let sinh_eta_c = eta_c.sinh();
    let sin_xi_c = xi_c.sin();
    let cos_xi_c = xi_c.cos();

    let tau_c = sin_xi_c / sinh_eta_c.hypot(cos_xi_c);

    // Invert the conformal latitude by Newton iteration on tau. The
    // iteration converges in a handful of steps for any on-grid input;
    // off-grid eastings and northings push the series past floating-point
    // range and the step degenerates to NaN, so both bounds are needed.
    let mut tau = tau_c;
    for _ in 0..10 {
        let sigma = (e * (e * tau / tau.hypot(1.0)).atanh()).sinh();
        let tau_i = tau * sigma.hypot(1.0) - sigma * tau.hypot(1.0);
        let delta = (tau_c - tau_i) / tau_i.hypot(1.0) * (1.0 + (1.0 - e2) * tau * tau)
            / ((1.0 - e2) * tau.hypot(1.0));
        if !delta.is_finite() {
            break;
        }
        tau += delta;

        if delta.abs() < 1e-12 {
            break;
        }
    }

    let phi = tau.atan();
    let lambda = sinh_eta_c.atan2(cos_xi_c);

    (phi.to_degrees(), (lambda + lambda0).to_degrees())
}

/// Rectifying radius A of the ellipsoid.
fn rectifying_radius(equatorial_radius: f64, n: f64) -> f64 {
    let n2 = n * n;
    equatorial_radius / (1.0 + n) * (1.0 + n2 / 4.0 + n2 * n2 / 64.0 + n2 * n2 * n2 / 256.0)
}

/// Series coefficients for the forward projection.
fn alpha_series(n: f64) -> [f64; 6] {
    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n3 * n;
    let n5 = n4 * n;
    let n6 = n5 * n;

    [
        n / 2.0 - 2.0 / 3.0 * n2 + 5.0 / 16.0 * n3 + 41.0 / 180.0 * n4 - 127.0 / 288.0 * n5
            + 7891.0 / 37800.0 * n6,
        13.0 / 48.0 * n2 - 3.0 / 5.0 * n3 + 557.0 / 1440.0 * n4 + 281.0 / 630.0 * n5
            - 1_983_433.0 / 1_935_360.0 * n6,
        61.0 / 240.0 * n3 - 103.0 / 140.0 * n4 + 15061.0 / 26880.0 * n5
            + 167_603.0 / 181_440.0 * n6,
        49561.0 / 161_280.0 * n4 - 179.0 / 168.0 * n5 + 6_601_661.0 / 7_257_600.0 * n6,
        34729.0 / 80640.0 * n5 - 3_418_889.0 / 1_995_840.0 * n6,
        212_378_941.0 / 319_334_400.0 * n6,
    ]
}

/// Series coefficients for the inverse projection.
fn beta_series(n: f64) -> [f64; 6] {
    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n3 * n;
    let n5 = n4 * n;
    let n6 = n5 * n;

    [
        n / 2.0 - 2.0 / 3.0 * n2 + 37.0 / 96.0 * n3 - 1.0 / 360.0 * n4 - 81.0 / 512.0 * n5
            + 96199.0 / 604_800.0 * n6,
        1.0 / 48.0 * n2 + 1.0 / 15.0 * n3 - 437.0 / 1440.0 * n4 + 46.0 / 105.0 * n5
            - 1_118_711.0 / 3_870_720.0 * n6,
        17.0 / 480.0 * n3 - 37.0 / 840.0 * n4 - 209.0 / 4480.0 * n5 + 5569.0 / 90720.0 * n6,
        4397.0 / 161_280.0 * n4 - 11.0 / 504.0 * n5 - 830_251.0 / 7_257_600.0 * n6,
        4583.0 / 161_280.0 * n5 - 108_847.0 / 3_991_680.0 * n6,
        20_648_693.0 / 638_668_800.0 * n6,
    ]
}
