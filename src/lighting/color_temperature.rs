//! Blackbody color temperature to linear RGB, as a fitted piecewise approximation
//! over six temperature bands.

use glam::DVec3;

/// Color for temperatures at or above [`MAX_TEMPERATURE`].
pub const HOT_LIMIT_COLOR: DVec3 = DVec3::new(0.826270103, 0.994478524, 1.56626022);
/// Color for temperatures below [`MIN_TEMPERATURE`].
pub const COLD_LIMIT_COLOR: DVec3 = DVec3::new(4.70366907, 0.0, 0.0);

pub const MIN_TEMPERATURE: f64 = 965.0;
pub const MAX_TEMPERATURE: f64 = 12000.0;

/// Lower bound of every band but the first, in ascending order.
const BAND_THRESHOLDS: [f64; 5] = [1167.0, 1449.0, 1902.0, 3315.0, 6365.0];

// r = c0 / T + c1 * T + c2
const RED: [[f64; 3]; 6] = [
    [2.52432244e+03, -1.06185848e-03, 3.11067539e+00],
    [3.37763626e+03, -4.34581697e-04, 1.64843306e+00],
    [4.10671449e+03, -8.61949938e-05, 6.41423749e-01],
    [4.66849800e+03, 2.85655028e-05, 1.29075375e-01],
    [4.60124770e+03, 2.89727618e-05, 1.48001316e-01],
    [3.78765709e+03, 9.36026367e-06, 3.98995841e-01],
];

// g = c0 / T + c1 * T + c2
const GREEN: [[f64; 3]; 6] = [
    [-7.50343014e+02, 3.15679613e-04, 4.73464526e-01],
    [-1.00402363e+03, 1.29189794e-04, 9.08181524e-01],
    [-1.22075471e+03, 2.56245413e-05, 1.20753416e+00],
    [-1.42546105e+03, -4.01730887e-05, 1.44002695e+00],
    [-1.18134453e+03, -2.18913373e-05, 1.30656109e+00],
    [-5.00279505e+02, -4.59745390e-06, 1.09090465e+00],
];

// b = ((c0 * T + c1) * T + c2) * T + c3
const BLUE: [[f64; 4]; 6] = [
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0],
    [-2.02524603e-11, 1.79435860e-07, -2.60561875e-04, -1.41761141e-02],
    [-2.22463426e-13, -1.55078698e-08, 3.81675160e-04, -7.30646033e-01],
    [6.72595954e-13, -2.73059993e-08, 4.24068546e-04, -7.52204323e-01],
];

fn band(kelvin: f64) -> usize {
    BAND_THRESHOLDS
        .iter()
        .take_while(|&&threshold| kelvin >= threshold)
        .count()
}

/// Converts a color temperature in Kelvin to an RGB light color.
///
/// Values outside `[965, 12000)` saturate to [`COLD_LIMIT_COLOR`] and
/// [`HOT_LIMIT_COLOR`]. Components are not clamped to `[0, 1]`.
pub fn temperature_to_rgb(kelvin: f64) -> DVec3 {
    if kelvin >= MAX_TEMPERATURE {
        return HOT_LIMIT_COLOR;
    }

    if kelvin.is_nan() || kelvin < MIN_TEMPERATURE {
        return COLD_LIMIT_COLOR;
    }

    let i = band(kelvin);
    let (r, g, b) = (RED[i], GREEN[i], BLUE[i]);

    let inverse = 1.0 / kelvin;
    DVec3::new(
        r[0] * inverse + r[1] * kelvin + r[2],
        g[0] * inverse + g[1] * kelvin + g[2],
        ((b[0] * kelvin + b[1]) * kelvin + b[2]) * kelvin + b[3],
    )
}
