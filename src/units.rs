/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::HashMap;
use std::sync::OnceLock;

use super::dimension::{
    Dimensions, CURRENT, INFORMATION, LENGTH, LUMINOSITY, MASS, SUBSTANCE,
    TEMPERATURE, TIME,
};

/// A static entry in the unit table: how to reduce one unit to SI
/// base, its dimensions, and which prefix classes it accepts.
#[derive(Clone, Debug)]
pub struct UnitDescriptor {
    /// Multiply a magnitude in this unit by `scale` to get the SI
    /// base magnitude.
    pub scale: f64,
    /// Dimensions of the unit. Carries the same offset as `offset`
    /// when the unit is affine (degC, degF); zero otherwise.
    pub dims: Dimensions,
    /// Additive zero-shift in the unit's own scaled domain. Zero for
    /// every unit except degC and degF.
    pub offset: f64,
    /// Accepts a single-character metric prefix (`km`, `mg`, ...).
    pub prefixable: bool,
    /// Accepts a two-character binary prefix (`KiB`, `MiB`, ...).
    pub binary_prefixable: bool,
}

impl UnitDescriptor {
    fn plain(scale: f64, dims: Dimensions) -> Self {
        UnitDescriptor {
            scale,
            dims,
            offset: 0.0,
            prefixable: false,
            binary_prefixable: false,
        }
    }

    fn prefixable(mut self) -> Self {
        self.prefixable = true;
        self
    }

    fn binary_prefixable(mut self) -> Self {
        self.binary_prefixable = true;
        self
    }

    fn affine(scale: f64, dims: Dimensions, offset: f64) -> Self {
        UnitDescriptor {
            scale,
            dims: dims.with_offset(offset),
            offset,
            prefixable: false,
            binary_prefixable: false,
        }
    }
}

const SECONDS_PER_YEAR: f64 = 3.1536e7;

static UNIT_TABLE: OnceLock<HashMap<&'static str, UnitDescriptor>> =
    OnceLock::new();

/// The static unit table, built once on first access.
pub fn unit_table() -> &'static HashMap<&'static str, UnitDescriptor> {
    UNIT_TABLE.get_or_init(build_table)
}

/// Look up a single unit by its exact (unprefixed) name.
pub fn lookup(name: &str) -> Option<&'static UnitDescriptor> {
    unit_table().get(name)
}

fn build_table() -> HashMap<&'static str, UnitDescriptor> {
    let mass = Dimensions::basic_dim(MASS, 1);
    let length = Dimensions::basic_dim(LENGTH, 1);
    let time = Dimensions::basic_dim(TIME, 1);
    let temperature = Dimensions::basic_dim(TEMPERATURE, 1);
    let current = Dimensions::basic_dim(CURRENT, 1);
    let substance = Dimensions::basic_dim(SUBSTANCE, 1);
    let _luminosity = Dimensions::basic_dim(LUMINOSITY, 1);
    let information = Dimensions::basic_dim(INFORMATION, 1);

    let speed = length.combine(&time, -1);
    let pressure = mass.combine(&length, -1).combine(&time.scaled(2), -1);
    let force = mass.combine(&length, 1).combine(&time.scaled(2), -1);
    let energy = mass
        .combine(&length.scaled(2), 1)
        .combine(&time.scaled(2), -1);
    let power = mass
        .combine(&length.scaled(2), 1)
        .combine(&time.scaled(3), -1);
    let charge = current.combine(&time, 1);
    let potential = power.combine(&current, -1);
    let resistance = potential.combine(&current, -1);
    let capacitance = charge.combine(&potential, -1);
    let inductance = potential.combine(&time, 1).combine(&current, -1);
    let conductance = resistance.scaled(-1);
    let flux = potential.combine(&time, 1);
    let flux_density = flux.combine(&length.scaled(2), -1);
    let molarity = substance.combine(&length.scaled(3), -1);
    let frequency = time.scaled(-1);
    let pphpd_dims = frequency
        .combine(&Dimensions::custom_dim("dir", -1), 1)
        .combine(&Dimensions::custom_dim("pax", 1), 1);

    let mut table = HashMap::new();
    let mut put = |name: &'static str, desc: UnitDescriptor| {
        table.insert(name, desc);
    };

    put(
        "%",
        UnitDescriptor::plain(1e-2, Dimensions::dimensionless()),
    );
    put(
        "ppm",
        UnitDescriptor::plain(1e-6, Dimensions::dimensionless()),
    );

    put(
        "g",
        UnitDescriptor::plain(1e-3, mass.clone()).prefixable(),
    );
    put("lb", UnitDescriptor::plain(4.5359237e-1, mass.clone()));

    put("m", UnitDescriptor::plain(1.0, length.clone()).prefixable());
    put("in", UnitDescriptor::plain(2.54e-2, length.clone()));
    put("ft", UnitDescriptor::plain(3.048e-1, length.clone()));
    put("mi", UnitDescriptor::plain(1.609344e3, length.clone()));

    put("s", UnitDescriptor::plain(1.0, time.clone()).prefixable());
    put("min", UnitDescriptor::plain(60.0, time.clone()));
    put("h", UnitDescriptor::plain(3600.0, time.clone()));
    put("day", UnitDescriptor::plain(86400.0, time.clone()));
    put("week", UnitDescriptor::plain(604800.0, time.clone()));
    put("yr", UnitDescriptor::plain(SECONDS_PER_YEAR, time.clone()));
    put(
        "ka",
        UnitDescriptor::plain(SECONDS_PER_YEAR * 1e3, time.clone()),
    );
    put(
        "Ma",
        UnitDescriptor::plain(SECONDS_PER_YEAR * 1e6, time.clone()),
    );
    put(
        "Ga",
        UnitDescriptor::plain(SECONDS_PER_YEAR * 1e9, time.clone()),
    );

    put(
        "K",
        UnitDescriptor::plain(1.0, temperature.clone()).prefixable(),
    );
    put("deltaC", UnitDescriptor::plain(1.0, temperature.clone()));
    put("degC", UnitDescriptor::affine(1.0, temperature.clone(), 273.15));
    put(
        "degF",
        UnitDescriptor::affine(5.0 / 9.0, temperature.clone(), 459.67 * 5.0 / 9.0),
    );

    put("c", UnitDescriptor::plain(299792458.0, speed));

    put(
        "Pa",
        UnitDescriptor::plain(1.0, pressure.clone()).prefixable(),
    );
    put("psi", UnitDescriptor::plain(6894.75729316836, pressure.clone()));
    put("atm", UnitDescriptor::plain(101325.0, pressure));

    put("N", UnitDescriptor::plain(1.0, force).prefixable());

    put("J", UnitDescriptor::plain(1.0, energy.clone()).prefixable());
    put(
        "eV",
        UnitDescriptor::plain(1.602176634e-19, energy.clone()).prefixable(),
    );
    put("BTU", UnitDescriptor::plain(1055.05585, energy.clone()));
    put(
        "Wh",
        UnitDescriptor::plain(3600.0, energy).prefixable(),
    );

    put("W", UnitDescriptor::plain(1.0, power.clone()).prefixable());
    put("HP", UnitDescriptor::plain(745.69987158227, power));

    put(
        "L",
        UnitDescriptor::plain(1e-3, length.scaled(3)).prefixable(),
    );
    put("ha", UnitDescriptor::plain(1e4, length.scaled(2)));

    put(
        "b",
        UnitDescriptor::plain(1.0, information.clone())
            .prefixable()
            .binary_prefixable(),
    );
    put(
        "B",
        UnitDescriptor::plain(8.0, information)
            .prefixable()
            .binary_prefixable(),
    );

    put(
        "A",
        UnitDescriptor::plain(1.0, current.clone()).prefixable(),
    );
    put("C", UnitDescriptor::plain(1.0, charge.clone()).prefixable());
    put("Ah", UnitDescriptor::plain(3600.0, charge).prefixable());

    put(
        "V",
        UnitDescriptor::plain(1.0, potential).prefixable(),
    );
    put("ohm", UnitDescriptor::plain(1.0, resistance));
    put(
        "F",
        UnitDescriptor::plain(1.0, capacitance).prefixable(),
    );
    put("H", UnitDescriptor::plain(1.0, inductance).prefixable());
    put(
        "S",
        UnitDescriptor::plain(1.0, conductance).prefixable(),
    );
    put("Wb", UnitDescriptor::plain(1.0, flux).prefixable());
    put("T", UnitDescriptor::plain(1.0, flux_density).prefixable());

    put("mol", UnitDescriptor::plain(1.0, substance));
    put("M", UnitDescriptor::plain(1000.0, molarity));

    put(
        "Hz",
        UnitDescriptor::plain(1.0, frequency).prefixable(),
    );

    put("pphpd", UnitDescriptor::plain(1.0 / 3600.0, pphpd_dims));

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilogram_builds_from_gram() {
        let g = lookup("g").unwrap();
        assert_eq!(g.scale, 1e-3);
        assert!(g.prefixable);
    }

    #[test]
    fn b_and_upper_b_both_prefix_classes() {
        let bit = lookup("b").unwrap();
        let byte = lookup("B").unwrap();
        assert!(bit.prefixable && bit.binary_prefixable);
        assert!(byte.prefixable && byte.binary_prefixable);
        assert_eq!(byte.scale, 8.0);
    }

    #[test]
    fn degc_is_affine() {
        let c = lookup("degC").unwrap();
        assert_eq!(c.offset, 273.15);
        assert_eq!(c.dims.offset(), 273.15);
    }

    #[test]
    fn ohm_is_not_prefixable() {
        assert!(!lookup("ohm").unwrap().prefixable);
    }

    #[test]
    fn pphpd_carries_two_custom_dimensions() {
        let u = lookup("pphpd").unwrap();
        assert_eq!(u.dims.custom_exponents().len(), 2);
    }
}
