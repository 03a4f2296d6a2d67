pub const SECONDS_PER_DAY: f64 = 86_400.0; // Length of one day [s]
pub const LIGHT_YEAR: f64 = 9.46e15; // One light year [m]
pub const WATTS_PER_PETAWATT: f64 = 1e15;

// Length units of the trajectory table position columns
pub const AU: f64 = 1.495978707e11; // Astronomical unit [m]
pub const R_JUPITER: f64 = 7.1492e7; // Jupiter equatorial radius [m]

// Math
pub const PI: f64 = std::f64::consts::PI;
