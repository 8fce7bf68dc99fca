//! Backend endpoints.
//!
//! Each endpoint names one instrument/analysis pipeline on the plotting
//! server. The set is fixed; the path of the POST is the endpoint name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownEndpoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// Dewar resistance, separate cooling and warming files.
    Dewar,
    /// Dewar resistance, merged into one file.
    DewarStrip,
    CurrentEffect,
    Ppms,
    PpmsMagnetic,
    PpmsHeatCapacity,
    PpmsHeatCapacityCw,
    Mpms,
    MpmsMagnetic,
    MpmsAc,
}

impl Endpoint {
    /// Every endpoint, in dashboard order.
    pub const ALL: [Endpoint; 10] = [
        Endpoint::Dewar,
        Endpoint::DewarStrip,
        Endpoint::CurrentEffect,
        Endpoint::Ppms,
        Endpoint::PpmsMagnetic,
        Endpoint::PpmsHeatCapacity,
        Endpoint::PpmsHeatCapacityCw,
        Endpoint::Mpms,
        Endpoint::MpmsMagnetic,
        Endpoint::MpmsAc,
    ];

    /// URL path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Dewar => "dewar",
            Endpoint::DewarStrip => "dewar_strip",
            Endpoint::CurrentEffect => "current_effect",
            Endpoint::Ppms => "ppms",
            Endpoint::PpmsMagnetic => "ppms_magnetic",
            Endpoint::PpmsHeatCapacity => "ppms_heat_capacity",
            Endpoint::PpmsHeatCapacityCw => "ppms_heat_capacity_cw",
            Endpoint::Mpms => "mpms",
            Endpoint::MpmsMagnetic => "mpms_magnetic",
            Endpoint::MpmsAc => "mpms_ac",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = UnknownEndpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|endpoint| endpoint.as_str() == s)
            .ok_or_else(|| UnknownEndpoint(s.to_string()))
    }
}
