//! Paciente domain entity
//!
//! A patient registered in the clinic, keyed by RUN.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Chilean RUN (without check digit), the patient's primary key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PacienteRun(pub i32);

impl std::fmt::Display for PacienteRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PacienteRun {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i32>() {
            Ok(run) if run > 0 => Ok(PacienteRun(run)),
            _ => Err(format!("RUN inválido: {}", s)),
        }
    }
}

/// A patient row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paciente {
    pub pac_run: PacienteRun,
    pub dv_run: String,
    pub pnombre: String,
    pub snombre: Option<String>,
    pub apaterno: String,
    pub amaterno: Option<String>,
    pub fecha_nacimiento: NaiveDate,
    pub telefono: Option<String>,
    pub sal_id: Option<i32>,
}

impl Paciente {
    /// Full name as "pnombre [snombre] apaterno [amaterno]"
    pub fn nombre_completo(&self) -> String {
        [
            Some(self.pnombre.as_str()),
            self.snombre.as_deref(),
            Some(self.apaterno.as_str()),
            self.amaterno.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_parses_positive_numbers() {
        assert_eq!("12345678".parse::<PacienteRun>(), Ok(PacienteRun(12345678)));
        assert_eq!(" 42 ".parse::<PacienteRun>(), Ok(PacienteRun(42)));
    }

    #[test]
    fn run_rejects_garbage() {
        assert!("abc".parse::<PacienteRun>().is_err());
        assert!("0".parse::<PacienteRun>().is_err());
        assert!("-5".parse::<PacienteRun>().is_err());
        assert!("12345678-9".parse::<PacienteRun>().is_err());
    }

    #[test]
    fn serializes_flat() {
        let paciente = Paciente {
            pac_run: PacienteRun(11111111),
            dv_run: "1".to_string(),
            pnombre: "Ana".to_string(),
            snombre: None,
            apaterno: "Rojas".to_string(),
            amaterno: Some("Soto".to_string()),
            fecha_nacimiento: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            telefono: None,
            sal_id: Some(3),
        };

        let json = serde_json::to_value(&paciente).unwrap();
        assert_eq!(json["pac_run"], 11111111);
        assert_eq!(json["fecha_nacimiento"], "1990-05-17");
        assert!(json["snombre"].is_null());
        assert_eq!(paciente.nombre_completo(), "Ana Rojas Soto");
    }
}
