//! Static form declarations, one per endpoint.
//!
//! Slots and text fields are declared here, not derived at runtime; the
//! dashboard layout in [`crate::dashboard`] refers to forms by endpoint.

use crate::endpoint::Endpoint;

/// A declared file input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSpec {
    pub name: &'static str,
    pub label: &'static str,
}

/// A declared text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub placeholder: &'static str,
}

/// Single-file or dual-file form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Single,
    Dual,
}

/// Everything a frontend needs to render and submit one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSpec {
    pub endpoint: Endpoint,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub slots: &'static [SlotSpec],
    pub fields: &'static [FieldSpec],
    /// Button text while idle.
    pub submit_label: &'static str,
    /// Button text while a request is in flight.
    pub busy_label: &'static str,
}

impl FormSpec {
    pub fn kind(&self) -> FormKind {
        if self.slots.len() > 1 {
            FormKind::Dual
        } else {
            FormKind::Single
        }
    }
}

// =============================================================================
// Declarations
// =============================================================================

const DATAFILE: &[SlotSpec] = &[SlotSpec {
    name: "datafile",
    label: "Data File",
}];

const COOLING_WARMING: &[SlotSpec] = &[
    SlotSpec {
        name: "cooling",
        label: "Cooling Data",
    },
    SlotSpec {
        name: "warming",
        label: "Warming Data",
    },
];

const PRESSURE: &[FieldSpec] = &[FieldSpec {
    key: "pressure",
    placeholder: "Enter pressure (GPa)",
}];

const fn single(
    endpoint: Endpoint,
    title: &'static str,
    fields: &'static [FieldSpec],
) -> FormSpec {
    FormSpec {
        endpoint,
        title,
        subtitle: None,
        slots: DATAFILE,
        fields,
        submit_label: "Plot Data",
        busy_label: "Processing...",
    }
}

pub static DEWAR: FormSpec = FormSpec {
    endpoint: Endpoint::Dewar,
    title: "Dewar Resistance",
    subtitle: Some("Dual channel cooling & warming analysis"),
    slots: COOLING_WARMING,
    fields: &[FieldSpec {
        key: "pressure",
        placeholder: "Enter pressure in (GPa)",
    }],
    submit_label: "Plot Dual Data",
    busy_label: "Plotting...",
};

pub static DEWAR_STRIP: FormSpec = single(Endpoint::DewarStrip, "Dewar Merged Data", PRESSURE);

pub static CURRENT_EFFECT: FormSpec =
    single(Endpoint::CurrentEffect, "Current Effect Analysis", PRESSURE);

pub static PPMS: FormSpec = single(Endpoint::Ppms, "Resistance", PRESSURE);

pub static PPMS_MAGNETIC: FormSpec = single(Endpoint::PpmsMagnetic, "Magnetic Field", PRESSURE);

pub static PPMS_HEAT_CAPACITY: FormSpec = single(
    Endpoint::PpmsHeatCapacity,
    "Heat Capacity",
    &[FieldSpec {
        key: "mass_heat_cap",
        placeholder: "Enter mass (mg)",
    }],
);

pub static PPMS_HEAT_CAPACITY_CW: FormSpec = single(
    Endpoint::PpmsHeatCapacityCw,
    "Heat Capacity (Cooling/Warming)",
    &[FieldSpec {
        key: "mass",
        placeholder: "Enter mass (mg)",
    }],
);

pub static MPMS: FormSpec = single(
    Endpoint::Mpms,
    "Moment vs Temp",
    &[FieldSpec {
        key: "magnetic_moment",
        placeholder: "Enter magnetic moment (Oe)",
    }],
);

pub static MPMS_MAGNETIC: FormSpec = single(
    Endpoint::MpmsMagnetic,
    "Magnetic Field",
    &[FieldSpec {
        key: "mass",
        placeholder: "Enter Mass (mg)",
    }],
);

pub static MPMS_AC: FormSpec = single(
    Endpoint::MpmsAc,
    "AC Susceptibility",
    &[
        FieldSpec {
            key: "mass_ac",
            placeholder: "Enter Mass (mg)",
        },
        FieldSpec {
            key: "MF_dc",
            placeholder: "Enter DC Field (Oe)",
        },
        FieldSpec {
            key: "MF_ac",
            placeholder: "Enter AC Field (Oe)",
        },
    ],
);

/// Every declared form, in [`Endpoint::ALL`] order.
pub static FORMS: [&FormSpec; 10] = [
    &DEWAR,
    &DEWAR_STRIP,
    &CURRENT_EFFECT,
    &PPMS,
    &PPMS_MAGNETIC,
    &PPMS_HEAT_CAPACITY,
    &PPMS_HEAT_CAPACITY_CW,
    &MPMS,
    &MPMS_MAGNETIC,
    &MPMS_AC,
];

/// Declaration of the form bound to `endpoint`.
pub fn spec_for(endpoint: Endpoint) -> &'static FormSpec {
    match endpoint {
        Endpoint::Dewar => &DEWAR,
        Endpoint::DewarStrip => &DEWAR_STRIP,
        Endpoint::CurrentEffect => &CURRENT_EFFECT,
        Endpoint::Ppms => &PPMS,
        Endpoint::PpmsMagnetic => &PPMS_MAGNETIC,
        Endpoint::PpmsHeatCapacity => &PPMS_HEAT_CAPACITY,
        Endpoint::PpmsHeatCapacityCw => &PPMS_HEAT_CAPACITY_CW,
        Endpoint::Mpms => &MPMS,
        Endpoint::MpmsMagnetic => &MPMS_MAGNETIC,
        Endpoint::MpmsAc => &MPMS_AC,
    }
}
