//! Atención domain entity
//!
//! Identifiers and report rows for clinical attentions (visits).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of an attention record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtencionId(pub i32);

impl std::fmt::Display for AtencionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AtencionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i32>() {
            Ok(id) if id > 0 => Ok(AtencionId(id)),
            _ => Err(format!("Identificador de atención inválido: {}", s)),
        }
    }
}

/// Lower bound for the costly-attention report
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MontoMinimo(pub f64);

impl MontoMinimo {
    /// Parse the optional `monto` query value; absent or blank means zero
    pub fn parse(raw: Option<&str>) -> Result<Self, String> {
        let raw = match raw.map(str::trim) {
            None | Some("") => return Ok(MontoMinimo::default()),
            Some(raw) => raw,
        };
        match raw.parse::<f64>() {
            Ok(monto) if monto.is_finite() && monto >= 0.0 => Ok(MontoMinimo(monto)),
            _ => Err(format!("Monto inválido: {}", raw)),
        }
    }
}

/// One row of the costly-attention report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtencionCostosa {
    pub ate_id: AtencionId,
    pub fecha_atencion: NaiveDate,
    pub pac_run: i32,
    pub nombre_paciente: String,
    pub especialidad: Option<String>,
    pub costo: f64,
}
