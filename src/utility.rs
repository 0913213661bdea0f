pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
}

pub(crate) trait GeoMath {
    fn is_valid_latitude(&self) -> bool;
    fn is_valid_longitude(&self) -> bool;
}

impl GeoMath for f64 {
    // Range checks are false for NaN, and infinities fall outside both ranges
    fn is_valid_latitude(&self) -> bool {
        let qd = f64::from(dms::QD);
        (-qd..=qd).contains(self)
    }

    fn is_valid_longitude(&self) -> bool {
        let hd = f64::from(dms::HD);
        (-hd..hd).contains(self)
    }
}
