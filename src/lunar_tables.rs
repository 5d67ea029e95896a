//! Periodic-term tables of the truncated lunar theory (Meeus chap. 47,
//! tables 47.A and 47.B).
//!
//! Each row carries the integer multipliers of the four fundamental
//! arguments — mean elongation D, Sun mean anomaly M, Moon mean anomaly M′
//! and argument of latitude F — plus fixed-point amplitude coefficients.
//! Longitude and latitude amplitudes are in units of 1e-6 degree, distance
//! amplitudes in units of 1e-3 km. The tables are immutable lookup data,
//! shared read-only across calls.

/// One row of the longitude/distance table: the sine amplitude feeds the
/// longitude sum, the cosine amplitude the distance sum, both evaluated on
/// the same argument `d·D + m·M + mp·M′ + f·F`.
pub(crate) struct LongitudeTerm {
    pub d: i8,
    pub m: i8,
    pub mp: i8,
    pub f: i8,
    /// Sine amplitude, 1e-6 degree
    pub sin_coeff: f64,
    /// Cosine amplitude, 1e-3 km
    pub cos_coeff: f64,
}

/// One row of the latitude table (sine amplitude only, 1e-6 degree).
pub(crate) struct LatitudeTerm {
    pub d: i8,
    pub m: i8,
    pub mp: i8,
    pub f: i8,
    pub sin_coeff: f64,
}

macro_rules! lon_term {
    ($d:expr, $m:expr, $mp:expr, $f:expr, $sl:expr, $cr:expr) => {
        LongitudeTerm {
            d: $d,
            m: $m,
            mp: $mp,
            f: $f,
            sin_coeff: $sl as f64,
            cos_coeff: $cr as f64,
        }
    };
}

macro_rules! lat_term {
    ($d:expr, $m:expr, $mp:expr, $f:expr, $sb:expr) => {
        LatitudeTerm {
            d: $d,
            m: $m,
            mp: $mp,
            f: $f,
            sin_coeff: $sb as f64,
        }
    };
}

/// Table 47.A: perturbations of the Moon's longitude and distance.
pub(crate) const LONGITUDE_DISTANCE_TERMS: [LongitudeTerm; 60] = [
    lon_term!(0, 0, 1, 0, 6_288_774, -20_905_355),
    lon_term!(2, 0, -1, 0, 1_274_027, -3_699_111),
    lon_term!(2, 0, 0, 0, 658_314, -2_955_968),
    lon_term!(0, 0, 2, 0, 213_618, -569_925),
    lon_term!(0, 1, 0, 0, -185_116, 48_888),
    lon_term!(0, 0, 0, 2, -114_332, -3_149),
    lon_term!(2, 0, -2, 0, 58_793, 246_158),
    lon_term!(2, -1, -1, 0, 57_066, -152_138),
    lon_term!(2, 0, 1, 0, 53_322, -170_733),
    lon_term!(2, -1, 0, 0, 45_758, -204_586),
    lon_term!(0, 1, -1, 0, -40_923, -129_620),
    lon_term!(1, 0, 0, 0, -34_720, 108_743),
    lon_term!(0, 1, 1, 0, -30_383, 104_755),
    lon_term!(2, 0, 0, -2, 15_327, 10_321),
    lon_term!(0, 0, 1, 2, -12_528, 0),
    lon_term!(0, 0, 1, -2, 10_980, 79_661),
    lon_term!(4, 0, -1, 0, 10_675, -34_782),
    lon_term!(0, 0, 3, 0, 10_034, -23_210),
    lon_term!(4, 0, -2, 0, 8_548, -21_636),
    lon_term!(2, 1, -1, 0, -7_888, 24_208),
    lon_term!(2, 1, 0, 0, -6_766, 30_824),
    lon_term!(1, 0, -1, 0, -5_163, -8_379),
    lon_term!(1, 1, 0, 0, 4_987, -16_675),
    lon_term!(2, -1, 1, 0, 4_036, -12_831),
    lon_term!(2, 0, 2, 0, 3_994, -10_445),
    lon_term!(4, 0, 0, 0, 3_861, -11_650),
    lon_term!(2, 0, -3, 0, 3_665, 14_403),
    lon_term!(0, 1, -2, 0, -2_689, -7_003),
    lon_term!(2, 0, -1, 2, -2_602, 0),
    lon_term!(2, -1, -2, 0, 2_390, 10_056),
    lon_term!(1, 0, 1, 0, -2_348, 6_322),
    lon_term!(2, -2, 0, 0, 2_236, -9_884),
    lon_term!(0, 1, 2, 0, -2_120, 5_751),
    lon_term!(0, 2, 0, 0, -2_069, 0),
    lon_term!(2, -2, -1, 0, 2_048, -4_950),
    lon_term!(2, 0, 1, -2, -1_773, 4_130),
    lon_term!(2, 0, 0, 2, -1_595, 0),
    lon_term!(4, -1, -1, 0, 1_215, -3_958),
    lon_term!(0, 0, 2, 2, -1_110, 0),
    lon_term!(3, 0, -1, 0, -892, 3_258),
    lon_term!(2, 1, 1, 0, -810, 2_616),
    lon_term!(4, -1, -2, 0, 759, -1_897),
    lon_term!(0, 2, -1, 0, -713, -2_117),
    lon_term!(2, 2, -1, 0, -700, 2_354),
    lon_term!(2, 1, -2, 0, 691, 0),
    lon_term!(2, -1, 0, -2, 596, 0),
    lon_term!(4, 0, 1, 0, 549, -1_423),
    lon_term!(0, 0, 4, 0, 537, -1_117),
    lon_term!(4, -1, 0, 0, 520, -1_571),
    lon_term!(1, 0, -2, 0, -487, -1_739),
    lon_term!(2, 1, 0, -2, -399, 0),
    lon_term!(0, 0, 2, -2, -381, -4_421),
    lon_term!(1, 1, 1, 0, 351, 0),
    lon_term!(3, 0, -2, 0, -340, 0),
    lon_term!(4, 0, -3, 0, 330, 0),
    lon_term!(2, -1, 2, 0, 327, 0),
    lon_term!(0, 2, 1, 0, -323, 1_165),
    lon_term!(1, 1, -1, 0, 299, 0),
    lon_term!(2, 0, 3, 0, 294, 0),
    lon_term!(2, 0, -1, -2, 0, 8_752),
];

/// Table 47.B: perturbations of the Moon's latitude.
pub(crate) const LATITUDE_TERMS: [LatitudeTerm; 60] = [
    lat_term!(0, 0, 0, 1, 5_128_122),
    lat_term!(0, 0, 1, 1, 280_602),
    lat_term!(0, 0, 1, -1, 277_693),
    lat_term!(2, 0, 0, -1, 173_237),
    lat_term!(2, 0, -1, 1, 55_413),
    lat_term!(2, 0, -1, -1, 46_271),
    lat_term!(2, 0, 0, 1, 32_573),
    lat_term!(0, 0, 2, 1, 17_198),
    lat_term!(2, 0, 1, -1, 9_266),
    lat_term!(0, 0, 2, -1, 8_822),
    lat_term!(2, -1, 0, -1, 8_216),
    lat_term!(2, 0, -2, -1, 4_324),
    lat_term!(2, 0, 1, 1, 4_200),
    lat_term!(2, 1, 0, -1, -3_359),
    lat_term!(2, -1, -1, 1, 2_463),
    lat_term!(2, -1, 0, 1, 2_211),
    lat_term!(2, -1, -1, -1, 2_065),
    lat_term!(0, 1, -1, -1, -1_870),
    lat_term!(4, 0, -1, -1, 1_828),
    lat_term!(0, 1, 0, 1, -1_794),
    lat_term!(0, 0, 0, 3, -1_749),
    lat_term!(0, 1, -1, 1, -1_565),
    lat_term!(1, 0, 0, 1, -1_491),
    lat_term!(0, 1, 1, 1, -1_475),
    lat_term!(0, 1, 1, -1, -1_410),
    lat_term!(0, 1, 0, -1, -1_344),
    lat_term!(1, 0, 0, -1, -1_335),
    lat_term!(0, 0, 3, 1, 1_107),
    lat_term!(4, 0, 0, -1, 1_021),
    lat_term!(4, 0, -1, 1, 833),
    lat_term!(0, 0, 1, -3, 777),
    lat_term!(4, 0, -2, 1, 671),
    lat_term!(2, 0, 0, -3, 607),
    lat_term!(2, 0, 2, -1, 596),
    lat_term!(2, -1, 1, -1, 491),
    lat_term!(2, 0, -2, 1, -451),
    lat_term!(0, 0, 3, -1, 439),
    lat_term!(2, 0, 2, 1, 422),
    lat_term!(2, 0, -3, -1, 421),
    lat_term!(2, 1, -1, 1, -366),
    lat_term!(2, 1, 0, 1, -351),
    lat_term!(4, 0, 0, 1, 331),
    lat_term!(2, -1, 1, 1, 315),
    lat_term!(2, -2, 0, -1, 302),
    lat_term!(0, 0, 1, 3, -283),
    lat_term!(2, 1, 1, -1, -229),
    lat_term!(1, 1, 0, -1, 223),
    lat_term!(1, 1, 0, 1, 223),
    lat_term!(0, 1, -2, -1, -220),
    lat_term!(2, 1, -1, -1, -220),
    lat_term!(1, 0, 1, 1, -185),
    lat_term!(2, -1, -2, -1, 181),
    lat_term!(0, 1, 2, 1, -177),
    lat_term!(4, 0, -2, -1, 176),
    lat_term!(4, -1, -1, -1, 166),
    lat_term!(1, 0, 1, -1, -164),
    lat_term!(4, 0, 1, -1, 132),
    lat_term!(1, 0, -1, -1, -119),
    lat_term!(4, -1, 0, -1, 115),
    lat_term!(2, -2, 0, 1, 107),
];
