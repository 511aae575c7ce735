//! `f64` math that works with and without `std`.
//!
//! With the `std` feature the inherent `f64` methods are used; otherwise the calls go to `libm`.

macro_rules! unary {
    ($($name:ident => $libm:ident;)+) => {
        $(
            #[inline]
            pub(crate) fn $name(x: f64) -> f64 {
                #[cfg(feature = "std")]
                {
                    x.$name()
                }
                #[cfg(not(feature = "std"))]
                {
                    libm::$libm(x)
                }
            }
        )+
    };
}

macro_rules! binary {
    ($($name:ident => $std:ident, $libm:ident;)+) => {
        $(
            #[inline]
            pub(crate) fn $name(x: f64, y: f64) -> f64 {
                #[cfg(feature = "std")]
                {
                    x.$std(y)
                }
                #[cfg(not(feature = "std"))]
                {
                    libm::$libm(x, y)
                }
            }
        )+
    };
}

unary! {
    abs => fabs;
    sqrt => sqrt;
    cbrt => cbrt;
    ceil => ceil;
    floor => floor;
    trunc => trunc;
    round => round;
    sin => sin;
    cos => cos;
    tan => tan;
    acos => acos;
    asin => asin;
    atan => atan;
}

binary! {
    powf => powf, pow;
    hypot => hypot, hypot;
    copysign => copysign, copysign;
    atan2 => atan2, atan2;
}

#[inline]
pub(crate) fn powi(x: f64, n: i32) -> f64 {
    #[cfg(feature = "std")]
    {
        x.powi(n)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::pow(x, f64::from(n))
    }
}

/// Truncated remainder, same sign as `x` (C `fmod`).
#[inline]
pub(crate) fn fmod(x: f64, y: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x % y
    }
    #[cfg(not(feature = "std"))]
    {
        libm::fmod(x, y)
    }
}

#[inline]
pub(crate) fn rem_euclid(x: f64, modulus: f64) -> f64 {
    let r = fmod(x, modulus);
    if r < 0.0 {
        r + abs(modulus)
    } else {
        r
    }
}
