// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-count scale markers.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Date | 0.0 |
//! | [`MJD`] | Modified Julian Date | 2 400 000.5 |

use super::instant::TimeScale;
use qtty::Days;

/// Julian Date — the identity scale.
///
/// `to_jd(v) = v`, i.e. the quantity *is* a Julian Day number.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Modified Julian Date — JD minus 2 400 000.5, so that MJD 0 is
/// 1858-11-17 00:00.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

/// The constant offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
const MJD_EPOCH: Days = Days::new(2_400_000.5);

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + MJD_EPOCH
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - MJD_EPOCH
    }
}

impl From<super::instant::Time<JD>> for super::instant::Time<MJD> {
    #[inline]
    fn from(t: super::instant::Time<JD>) -> Self {
        t.to::<MJD>()
    }
}

impl From<super::instant::Time<MJD>> for super::instant::Time<JD> {
    #[inline]
    fn from(t: super::instant::Time<MJD>) -> Self {
        t.to::<JD>()
    }
}

#[cfg(test)]
mod tests {
    use super::super::instant::Time;
    use super::*;

    #[test]
    fn jd_mjd_roundtrip() {
        let jd = Time::<JD>::new(2_451_545.0);
        let mjd: Time<MJD> = jd.to::<MJD>();
        assert!((mjd.quantity() - Days::new(51_544.5)).abs() < Days::new(1e-10));
        let back: Time<JD> = mjd.to::<JD>();
        assert!((back.quantity() - Days::new(2_451_545.0)).abs() < Days::new(1e-10));
    }

    #[test]
    fn jd_mjd_from_into() {
        let jd = Time::<JD>::new(2_451_545.0);
        let mjd: Time<MJD> = jd.into();
        assert!((mjd.quantity() - Days::new(51_544.5)).abs() < Days::new(1e-10));
        let back: Time<JD> = Time::from(mjd);
        assert!((back.quantity() - Days::new(2_451_545.0)).abs() < Days::new(1e-10));
    }

    #[test]
    fn mjd_epoch() {
        let zero = Time::<MJD>::new(0.0);
        assert_eq!(zero.to::<JD>().value(), 2_400_000.5);
    }
}
