/// A trait to round floating point values to a fixed number of decimal places.
pub trait RoundTo {
    /// Returns `self` rounded half away from zero to `decimals` decimal places.
    fn round_to(self, decimals: i32) -> Self;
}

macro_rules! impl_round_to {
    ($($t:ty)*) => ($(
        impl RoundTo for $t {
            fn round_to(self, decimals: i32) -> $t {
                let factor = (10 as $t).powi(decimals);
                (self * factor).round() / factor
            }
        }
    )*)
}

impl_round_to! { f64 }
