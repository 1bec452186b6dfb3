//! Standard normal distribution primitives used by the analytic kernels.
//!
//! The CDF uses the Hart / Abramowitz & Stegun 7.1.26 polynomial with an FMA
//! Horner chain. This form is bounded-error (max absolute error ~ 7.8e-8),
//! unlike a truncated series whose error grows in the tails.

/// Standard normal probability density.
#[inline]
pub fn normal_pdf(x: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal cumulative distribution.
///
/// Abramowitz & Stegun 7.1.26 polynomial; max absolute error is about
/// 7.8e-8 over the whole real line, well below the premium tolerances this
/// library is quoted at.
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    const P: f64 = 0.231_641_9;
    const A1: f64 = 0.319_381_530;
    const A2: f64 = -0.356_563_782;
    const A3: f64 = 1.781_477_937;
    const A4: f64 = -1.821_255_978;
    const A5: f64 = 1.330_274_429;

    let z = x.abs();
    let t = 1.0 / P.mul_add(z, 1.0);
    let poly = A5
        .mul_add(t, A4)
        .mul_add(t, A3)
        .mul_add(t, A2)
        .mul_add(t, A1)
        * t;
    let cdf_pos = normal_pdf(z).mul_add(-poly, 1.0);

    if x >= 0.0 { cdf_pos } else { 1.0 - cdf_pos }
}
