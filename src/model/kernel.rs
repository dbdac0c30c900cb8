/*
MIT License

Copyright (c) 2025 The morse-delta contributors
*/

//! Pure pairwise Morse energy/force math
//!
//! The potential is evaluated in dimensionless form: with `r* = r/sig` and
//! `re* = re/sig`, the decay constant is derived from the equilibrium
//! distance as `C = ln(2)/(re* - 1)` rather than taken as an independent
//! input. Forces are the analytic derivative, `f = -dE/dr` along the
//! displacement direction.

use crate::atoms::Vector3D;
use crate::params::PairParams;
use std::f64::consts::LN_2;

/// Energy of one interacting pair at separation `r`
#[inline]
pub fn pair_energy(r: f64, pair: &PairParams) -> f64 {
    let r_star = r / pair.sig;
    let re_star = pair.re / pair.sig;
    let c = LN_2 / (re_star - 1.0);
    let x = r_star - re_star;
    pair.d * ((-2.0 * c * x).exp() - 2.0 * (-c * x).exp())
}

/// Energy and force contribution of one directed pair.
///
/// `d` is the displacement from the reference atom to the neighbor and `r`
/// its length. The returned vector is the derivative term oriented along
/// `d`; the caller subtracts it from the reference atom's accumulator and
/// adds it to the neighbor's (third-law symmetry).
#[inline]
pub fn pair_energy_force(r: f64, d: Vector3D, pair: &PairParams) -> (f64, Vector3D) {
    let r_star = r / pair.sig;
    let re_star = pair.re / pair.sig;
    let c = LN_2 / (re_star - 1.0);
    let x = r_star - re_star;

    let repulsive = (-2.0 * c * x).exp();
    let attractive = (-c * x).exp();

    let energy = pair.d * (repulsive - 2.0 * attractive);
    let force = d * ((2.0 * pair.d * c / pair.sig) * (repulsive - attractive) / r);

    (energy, force)
}
