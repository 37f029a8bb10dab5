use crate::complex::Complex;

/// Bailout modulus: an orbit with `|z| > ESCAPE_RADIUS` has diverged.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Count the steps of `z ← z² + c`, starting from `z0`, until the orbit escapes.
///
/// Each step checks the cap first and the modulus second, so an orbit that
/// would escape exactly when the counter reaches `cap` still reports `cap`.
/// The result is always in `0..=cap`; `cap` means the point never escaped.
///
/// The modulus is compared with a real square root (not `|z|² > 4`) so
/// boundary points classify the same way as the reference renderer.
#[inline]
pub fn escape_iterations(z0: Complex, c: Complex, cap: u32) -> u32 {
    let mut z = z0;
    let mut n = 0;
    loop {
        if n == cap || z.norm() > ESCAPE_RADIUS {
            return n;
        }
        z = z.square() + c;
        n += 1;
    }
}
