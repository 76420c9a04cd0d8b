// wp-core/src/units.rs
//
// Inputs arrive in one fixed oilfield unit system (psia, °F, ft, in, cp).
// The helpers below build uom quantities from those values and read them
// back in SI where an algorithm integrates in consistent units.

use uom::si::f64::{
    Acceleration as UomAcceleration, DynamicViscosity as UomDynamicViscosity,
    Length as UomLength, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI storage, f64)
pub type Accel = UomAcceleration;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn psia(v: f64) -> Pressure {
    use uom::si::pressure::pound_force_per_square_inch;
    Pressure::new::<pound_force_per_square_inch>(v)
}

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn ft(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

#[inline]
pub fn inch(v: f64) -> Length {
    use uom::si::length::inch;
    Length::new::<inch>(v)
}

#[inline]
pub fn deg_f(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_fahrenheit;
    Temperature::new::<degree_fahrenheit>(v)
}

#[inline]
pub fn cp(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::centipoise;
    DynVisc::new::<centipoise>(v)
}

/// Pressure in pascal.
#[inline]
pub fn to_pa(p: Pressure) -> f64 {
    use uom::si::pressure::pascal;
    p.get::<pascal>()
}

/// Pressure in psia.
#[inline]
pub fn to_psia(p: Pressure) -> f64 {
    use uom::si::pressure::pound_force_per_square_inch;
    p.get::<pound_force_per_square_inch>()
}

/// Length in metres.
#[inline]
pub fn to_m(l: Length) -> f64 {
    use uom::si::length::meter;
    l.get::<meter>()
}

/// Length in feet.
#[inline]
pub fn to_ft(l: Length) -> f64 {
    use uom::si::length::foot;
    l.get::<foot>()
}

/// Absolute temperature in kelvin.
#[inline]
pub fn to_kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

/// Absolute temperature in degrees Rankine.
#[inline]
pub fn to_rankine(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_rankine;
    t.get::<degree_rankine>()
}

/// Viscosity in Pa·s.
#[inline]
pub fn to_pa_s(mu: DynVisc) -> f64 {
    use uom::si::dynamic_viscosity::pascal_second;
    mu.get::<pascal_second>()
}

/// °F to °R without going through a quantity.
#[inline]
pub fn fahrenheit_to_rankine(t_f: f64) -> f64 {
    t_f + constants::RANKINE_OFFSET
}

pub mod constants {
    use super::*;

    pub const G0_MPS2: f64 = 9.806_65;

    /// Offset between °F and °R.
    pub const RANKINE_OFFSET: f64 = 459.67;

    /// Standard-condition pressure [psia].
    pub const P_SC_PSIA: f64 = 14.696;

    /// Standard-condition temperature [°F].
    pub const T_SC_F: f64 = 60.0;

    /// Molecular weight of air [lbm/lbmol].
    pub const MW_AIR: f64 = 28.967;

    /// Universal gas constant [psia·ft³/(lbmol·°R)].
    pub const R_FIELD: f64 = 10.7316;

    /// Universal gas constant [J/(mol·K)].
    pub const R_SI: f64 = 8.314_462_618;

    /// Newton's-law conversion factor [lbm·ft/(lbf·s²)].
    pub const GC: f64 = 32.174;

    /// Cubic feet per barrel.
    pub const FT3_PER_BBL: f64 = 5.614_583;

    /// Cubic metres per cubic foot.
    pub const M3_PER_FT3: f64 = 0.028_316_846_592;

    /// lbm/ft³ per g/cm³.
    pub const LBM_FT3_PER_G_CC: f64 = 62.428;

    pub const SECONDS_PER_DAY: f64 = 86_400.0;

    #[inline]
    pub fn g0() -> Accel {
        use uom::si::acceleration::meter_per_second_squared;
        Accel::new::<meter_per_second_squared>(G0_MPS2)
    }
}
